//! Rule options: schemas, validation and ignore lists.
//!
//! Options arrive as JSON. A rule declares an [`OptionSchema`]: a check for
//! the primary option and a check per secondary key. Validation runs once,
//! before any node is visited, and collects every problem it finds; a rule
//! with any problem does not run at all.
//!
//! Two secondary keys are accepted for every rule: `severity`
//! (`"error"` or `"warning"`) and `message` (replaces the rule's message).

use std::fmt;

use quill_diagnostic::Severity;
use regex::{Regex, RegexBuilder};
use serde_json::{Map, Value};

/// Secondary keys every rule accepts.
const STANDARD_KEYS: &[&str] = &["severity", "message"];

/// JSON value types a [`Check::Type`] can require.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum JsonType {
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl JsonType {
    fn matches(self, value: &Value) -> bool {
        match self {
            JsonType::Bool => value.is_boolean(),
            JsonType::Number => value.is_number(),
            JsonType::String => value.is_string(),
            JsonType::Array => value.is_array(),
            JsonType::Object => value.is_object(),
        }
    }
}

/// A check on one option value.
#[derive(Copy, Clone, Debug)]
pub enum Check {
    /// Any value.
    Any,
    Type(JsonType),
    /// A string from a fixed set.
    OneOf(&'static [&'static str]),
    /// A list whose every element passes the inner check. A single value
    /// is accepted as a one-element list.
    ListOf(&'static Check),
    Predicate(fn(&Value) -> bool),
}

impl Check {
    pub fn accepts(&self, value: &Value) -> bool {
        match self {
            Check::Any => true,
            Check::Type(ty) => ty.matches(value),
            Check::OneOf(allowed) => value.as_str().is_some_and(|s| allowed.contains(&s)),
            Check::ListOf(inner) => match value {
                Value::Array(items) => items.iter().all(|item| inner.accepts(item)),
                single => inner.accepts(single),
            },
            Check::Predicate(predicate) => predicate(value),
        }
    }

    /// The values that fail this check, for error messages.
    fn rejected<'v>(&self, value: &'v Value) -> Vec<&'v Value> {
        match (self, value) {
            (Check::ListOf(inner), Value::Array(items)) => {
                items.iter().filter(|item| !inner.accepts(item)).collect()
            }
            (Check::ListOf(inner), single) if !inner.accepts(single) => vec![single],
            (Check::ListOf(_), _) => Vec::new(),
            (check, value) if !check.accepts(value) => vec![value],
            _ => Vec::new(),
        }
    }
}

/// The options a rule accepts.
#[derive(Copy, Clone, Debug)]
pub struct OptionSchema {
    /// Check for the primary option.
    pub primary: Check,
    /// Rule-specific secondary keys.
    pub possible: &'static [(&'static str, Check)],
    /// Whether the secondary object may be omitted.
    pub optional: bool,
}

/// A configured rule setting: the primary option plus an optional
/// secondary options object.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct RuleSetting {
    pub primary: Value,
    pub secondary: Option<Value>,
}

impl RuleSetting {
    pub fn new(primary: impl Into<Value>) -> Self {
        RuleSetting {
            primary: primary.into(),
            secondary: None,
        }
    }

    #[must_use]
    pub fn with_secondary(mut self, secondary: Value) -> Self {
        self.secondary = Some(secondary);
        self
    }

    /// Read a setting from config shorthand.
    ///
    /// `null` disables the rule (`None`). `[primary]` and
    /// `[primary, { ... }]` split into primary and secondary; anything else
    /// is the primary option alone.
    pub fn from_config(value: &Value) -> Option<RuleSetting> {
        match value {
            Value::Null => None,
            Value::Array(items) => match items.as_slice() {
                [primary] => Some(RuleSetting::new(primary.clone())),
                [primary, secondary @ Value::Object(_)] => {
                    Some(RuleSetting::new(primary.clone()).with_secondary(secondary.clone()))
                }
                _ => Some(RuleSetting::new(value.clone())),
            },
            other => Some(RuleSetting::new(other.clone())),
        }
    }

    /// A secondary option by key.
    pub fn secondary_option(&self, key: &str) -> Option<&Value> {
        self.secondary.as_ref()?.get(key)
    }

    /// The `severity` override, if any.
    pub fn severity(&self) -> Option<Severity> {
        self.secondary_option("severity")
            .and_then(Value::as_str)
            .and_then(Severity::from_name)
    }

    /// The `message` override, if any.
    pub fn custom_message(&self) -> Option<&str> {
        self.secondary_option("message").and_then(Value::as_str)
    }
}

/// One problem with a rule's options.
#[derive(Clone, Eq, PartialEq, Hash, Debug, thiserror::Error)]
pub enum OptionProblem {
    #[error("Expected option value for rule \"{rule}\"")]
    Missing { rule: String },
    #[error("Invalid option value \"{value}\" for rule \"{rule}\"")]
    InvalidPrimary { rule: String, value: String },
    #[error("Invalid option name \"{key}\" for rule \"{rule}\"")]
    UnknownKey { rule: String, key: String },
    #[error("Invalid value \"{value}\" for option \"{key}\" of rule \"{rule}\"")]
    InvalidValue {
        rule: String,
        key: String,
        value: String,
    },
    #[error("Unexpected option value \"{value}\" for rule \"{rule}\"")]
    Unexpected { rule: String, value: String },
    #[error("Unknown rule \"{rule}\"")]
    UnknownRule { rule: String },
}

/// Every problem found while validating one rule's options.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct OptionsError {
    pub problems: Vec<OptionProblem>,
}

impl OptionsError {
    pub fn single(problem: OptionProblem) -> Self {
        OptionsError {
            problems: vec![problem],
        }
    }

    /// One message per problem.
    pub fn messages(&self) -> Vec<String> {
        self.problems.iter().map(ToString::to_string).collect()
    }
}

impl fmt::Display for OptionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, problem) in self.problems.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{problem}")?;
        }
        Ok(())
    }
}

impl std::error::Error for OptionsError {}

/// Render an option value the way it appears in messages: strings
/// unquoted, lists comma-joined.
pub fn option_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(option_text).collect::<Vec<_>>().join(","),
        Value::Object(_) => "[object Object]".to_string(),
        other => other.to_string(),
    }
}

/// Validate `setting` against `schema`, collecting every problem.
pub fn validate_options(
    rule: &str,
    setting: &RuleSetting,
    schema: &OptionSchema,
) -> Result<(), OptionsError> {
    let mut problems = Vec::new();

    if setting.primary.is_null() {
        problems.push(OptionProblem::Missing {
            rule: rule.to_string(),
        });
    } else {
        for value in schema.primary.rejected(&setting.primary) {
            problems.push(OptionProblem::InvalidPrimary {
                rule: rule.to_string(),
                value: option_text(value),
            });
        }
    }

    match &setting.secondary {
        None if !schema.optional && !schema.possible.is_empty() => {
            problems.push(OptionProblem::Missing {
                rule: rule.to_string(),
            });
        }
        None => {}
        Some(Value::Object(options)) => validate_secondary(rule, options, schema, &mut problems),
        Some(other) => problems.push(OptionProblem::Unexpected {
            rule: rule.to_string(),
            value: option_text(other),
        }),
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err(OptionsError { problems })
    }
}

fn validate_secondary(
    rule: &str,
    options: &Map<String, Value>,
    schema: &OptionSchema,
    problems: &mut Vec<OptionProblem>,
) {
    if let Some(severity) = options.get("severity") {
        if severity.as_str().and_then(Severity::from_name).is_none() {
            problems.push(OptionProblem::InvalidValue {
                rule: rule.to_string(),
                key: "severity".to_string(),
                value: option_text(severity),
            });
        }
    }
    if let Some(message) = options.get("message") {
        if !message.is_string() {
            problems.push(OptionProblem::InvalidValue {
                rule: rule.to_string(),
                key: "message".to_string(),
                value: option_text(message),
            });
        }
    }

    let mut rule_specific = options
        .iter()
        .filter(|(key, _)| !STANDARD_KEYS.contains(&key.as_str()))
        .peekable();

    if schema.possible.is_empty() {
        if rule_specific.peek().is_some() {
            problems.push(OptionProblem::Unexpected {
                rule: rule.to_string(),
                value: option_text(&Value::Object(options.clone())),
            });
        }
        return;
    }

    for (key, value) in rule_specific {
        let Some((_, check)) = schema.possible.iter().find(|(name, _)| *name == key.as_str()) else {
            problems.push(OptionProblem::UnknownKey {
                rule: rule.to_string(),
                key: key.clone(),
            });
            continue;
        };
        for rejected in check.rejected(value) {
            problems.push(OptionProblem::InvalidValue {
                rule: rule.to_string(),
                key: key.clone(),
                value: option_text(rejected),
            });
        }
    }
}

/// Check used for `ignore` list entries: a string that is either a literal
/// or a valid `/pattern/flags` regular expression.
pub const IGNORE_ENTRY: Check = Check::Predicate(is_ignore_entry);

fn is_ignore_entry(value: &Value) -> bool {
    value
        .as_str()
        .is_some_and(|entry| IgnoreEntry::parse(entry).is_some())
}

#[derive(Clone, Debug)]
enum IgnoreEntry {
    Literal(String),
    Pattern(Regex),
}

impl IgnoreEntry {
    /// `None` when the entry looks like a pattern but does not compile.
    fn parse(entry: &str) -> Option<IgnoreEntry> {
        let Some((source, flags)) = split_pattern(entry) else {
            return Some(IgnoreEntry::Literal(entry.to_string()));
        };
        let mut builder = RegexBuilder::new(source);
        for flag in flags.chars() {
            match flag {
                'i' => {
                    builder.case_insensitive(true);
                }
                'm' => {
                    builder.multi_line(true);
                }
                's' => {
                    builder.dot_matches_new_line(true);
                }
                // Global, sticky and unicode flags do not change matching here.
                _ => {}
            }
        }
        builder.build().ok().map(IgnoreEntry::Pattern)
    }

    fn matches(&self, text: &str) -> bool {
        match self {
            IgnoreEntry::Literal(literal) => literal == text,
            IgnoreEntry::Pattern(regex) => regex.is_match(text),
        }
    }
}

/// Split `/source/flags` into source and flags.
fn split_pattern(entry: &str) -> Option<(&str, &str)> {
    let rest = entry.strip_prefix('/')?;
    let close = rest.rfind('/')?;
    let (source, flags) = (&rest[..close], &rest[close + 1..]);
    if source.is_empty() || !flags.bytes().all(|b| b"gimsuy".contains(&b)) {
        return None;
    }
    Some((source, flags))
}

/// Values a rule skips: literal strings and `/regex/` patterns. A value is
/// ignored when any entry matches it.
#[derive(Clone, Debug, Default)]
pub struct IgnoreList {
    entries: Vec<IgnoreEntry>,
}

impl IgnoreList {
    /// Build from a validated option value: a string or a list of strings.
    ///
    /// Entries that are not strings or do not compile are skipped; a
    /// validated option contains neither.
    pub fn from_option(value: Option<&Value>) -> IgnoreList {
        let entries = match value {
            Some(Value::Array(items)) => items.iter().filter_map(Value::as_str).collect(),
            Some(Value::String(entry)) => vec![entry.as_str()],
            _ => Vec::new(),
        };
        IgnoreList {
            entries: entries.into_iter().filter_map(IgnoreEntry::parse).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn matches(&self, text: &str) -> bool {
        self.entries.iter().any(|entry| entry.matches(text))
    }
}
