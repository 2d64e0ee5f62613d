//! The rule-execution contract.
//!
//! A rule is a [`RuleDef`]: metadata (name, target nodes, option schema)
//! plus a `configure` function turning validated options into a
//! [`ConfiguredRule`]. Running a rule means:
//!
//! 1. validate its options once; any problem aborts the run,
//! 2. walk the stylesheet depth-first in document order,
//! 3. hand each targeted node to the configured rule, which reports
//!    [`Finding`]s at offsets into the node's value or selector text,
//! 4. turn each finding into a [`Warning`] at an absolute position.

use quill_diagnostic::{DiagnosticQueue, Report, Severity, Warning};
use quill_ir::{walk, Declaration, Rule, SourcePos, Span, Stylesheet, Visitor};

use crate::options::{validate_options, OptionProblem, OptionSchema, OptionsError, RuleSetting};
use crate::rules::find_rule;

/// Which nodes a rule inspects.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum NodeTarget {
    /// Declaration values.
    Declarations,
    /// Rule selectors.
    Selectors,
}

/// Static description of a rule.
#[derive(Copy, Clone, Debug)]
pub struct RuleMeta {
    pub name: &'static str,
    /// One-line summary for `quill rules`.
    pub description: &'static str,
    pub target: NodeTarget,
    pub schema: OptionSchema,
}

/// A node handed to a rule.
#[derive(Copy, Clone, Debug)]
pub enum LintNode<'a> {
    Declaration(&'a Declaration),
    Rule(&'a Rule),
}

impl<'a> LintNode<'a> {
    /// The text findings are relative to: a value or a selector.
    pub fn text(&self) -> &'a str {
        match self {
            LintNode::Declaration(decl) => &decl.value,
            LintNode::Rule(rule) => &rule.selector,
        }
    }

    /// Absolute position of a byte offset into [`LintNode::text`].
    pub fn position(&self, offset: u32) -> SourcePos {
        match self {
            LintNode::Declaration(decl) => decl.value_position(offset),
            LintNode::Rule(rule) => rule.selector_position(offset),
        }
    }
}

/// A violation found by a rule, relative to the node's text.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Finding {
    pub offset: u32,
    pub len: u32,
    /// Message without the rule name suffix.
    pub message: String,
}

impl Finding {
    pub fn new(offset: u32, len: u32, message: impl Into<String>) -> Self {
        Finding {
            offset,
            len,
            message: message.into(),
        }
    }
}

/// A rule with validated options, ready to check nodes.
///
/// Implementations are pure: the same node yields the same findings, in
/// source order.
pub trait ConfiguredRule: Send + Sync {
    fn check(&self, node: LintNode<'_>, findings: &mut Vec<Finding>);
}

/// Constructor for a [`ConfiguredRule`] from already-validated options.
pub type Configure = fn(&RuleSetting) -> Result<Box<dyn ConfiguredRule>, OptionsError>;

/// A registered rule.
pub struct RuleDef {
    pub meta: RuleMeta,
    pub configure: Configure,
}

impl RuleDef {
    pub fn name(&self) -> &'static str {
        self.meta.name
    }

    /// Validate `setting` and configure the rule.
    pub fn activate(&'static self, setting: &RuleSetting) -> Result<ActiveRule, OptionsError> {
        validate_options(self.meta.name, setting, &self.meta.schema)?;
        let rule = (self.configure)(setting)?;
        tracing::debug!(rule = self.meta.name, "configured rule");
        Ok(ActiveRule {
            def: self,
            rule,
            severity: setting.severity().unwrap_or_default(),
            message: setting.custom_message().map(str::to_string),
        })
    }
}

/// A configured rule plus the per-run overrides from its options.
pub struct ActiveRule {
    def: &'static RuleDef,
    rule: Box<dyn ConfiguredRule>,
    severity: Severity,
    message: Option<String>,
}

impl ActiveRule {
    pub fn name(&self) -> &'static str {
        self.def.meta.name
    }

    /// Check every targeted node of `stylesheet`, reporting into `sink`.
    pub fn check_stylesheet(&self, stylesheet: &Stylesheet, sink: &mut impl Report) {
        let mut visitor = RuleVisitor {
            active: self,
            sink,
            findings: Vec::new(),
        };
        walk(stylesheet, &mut visitor);
    }

    fn report_node(&self, node: LintNode<'_>, findings: &mut Vec<Finding>, sink: &mut impl Report) {
        self.rule.check(node, findings);
        for finding in findings.drain(..) {
            sink.report(self.to_warning(node, finding));
        }
    }

    fn to_warning(&self, node: LintNode<'_>, finding: Finding) -> Warning {
        let name = self.name();
        let pos = node.position(finding.offset);
        let end = node.position(finding.offset.saturating_add(finding.len));
        let message = match &self.message {
            Some(custom) => custom.clone(),
            None => format!("{} ({name})", finding.message),
        };
        Warning {
            rule: name,
            message,
            severity: self.severity,
            line: pos.line,
            column: pos.column,
            span: Span::new(pos.offset, end.offset),
        }
    }
}

struct RuleVisitor<'r, S> {
    active: &'r ActiveRule,
    sink: &'r mut S,
    findings: Vec<Finding>,
}

impl<S: Report> Visitor for RuleVisitor<'_, S> {
    fn visit_rule(&mut self, rule: &Rule) {
        if self.active.def.meta.target == NodeTarget::Selectors {
            self.active
                .report_node(LintNode::Rule(rule), &mut self.findings, self.sink);
        }
    }

    fn visit_declaration(&mut self, decl: &Declaration) {
        if self.active.def.meta.target == NodeTarget::Declarations {
            self.active
                .report_node(LintNode::Declaration(decl), &mut self.findings, self.sink);
        }
    }
}

/// Run one rule over a stylesheet.
///
/// Returns the warnings ordered by position, or the option problems when
/// `setting` does not validate (in which case no node is visited).
pub fn run(
    stylesheet: &Stylesheet,
    setting: &RuleSetting,
    def: &'static RuleDef,
) -> Result<Vec<Warning>, OptionsError> {
    let mut queue = DiagnosticQueue::new();
    run_into(stylesheet, setting, def, &mut queue)?;
    Ok(queue.flush())
}

/// Run one rule over a stylesheet, reporting into `sink` in document order.
pub fn run_into(
    stylesheet: &Stylesheet,
    setting: &RuleSetting,
    def: &'static RuleDef,
    sink: &mut impl Report,
) -> Result<(), OptionsError> {
    let active = def.activate(setting)?;
    active.check_stylesheet(stylesheet, sink);
    Ok(())
}

/// Results of linting one stylesheet.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct LintReport {
    /// Warnings from every active rule, ordered by position.
    pub warnings: Vec<Warning>,
    /// Messages for rules that did not run because of their options.
    pub invalid_options: Vec<String>,
}

impl LintReport {
    pub fn error_count(&self) -> usize {
        self.warnings.iter().filter(|w| w.is_error()).count()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings.len() - self.error_count()
    }
}

/// A set of rules configured once and applied to many stylesheets.
///
/// Rules with invalid options are left out and their problems kept, so one
/// bad setting does not stop the other rules.
pub struct Linter {
    rules: Vec<ActiveRule>,
    invalid_options: Vec<OptionsError>,
}

impl Linter {
    /// Configure rules from `(name, setting)` pairs, in the given order.
    pub fn from_settings<'n>(settings: impl IntoIterator<Item = (&'n str, RuleSetting)>) -> Self {
        let mut rules = Vec::new();
        let mut invalid_options = Vec::new();
        for (name, setting) in settings {
            let Some(def) = find_rule(name) else {
                tracing::warn!(rule = name, "unknown rule");
                invalid_options.push(OptionsError::single(OptionProblem::UnknownRule {
                    rule: name.to_string(),
                }));
                continue;
            };
            match def.activate(&setting) {
                Ok(active) => rules.push(active),
                Err(error) => {
                    tracing::debug!(rule = name, %error, "rule skipped: invalid options");
                    invalid_options.push(error);
                }
            }
        }
        Linter {
            rules,
            invalid_options,
        }
    }

    /// Names of the rules that will run.
    pub fn active_rules(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(ActiveRule::name)
    }

    pub fn invalid_options(&self) -> &[OptionsError] {
        &self.invalid_options
    }

    /// One message per option problem across all rules.
    pub fn invalid_option_messages(&self) -> Vec<String> {
        self.invalid_options
            .iter()
            .flat_map(OptionsError::messages)
            .collect()
    }

    /// Run every active rule over `stylesheet`.
    pub fn lint(&self, stylesheet: &Stylesheet) -> LintReport {
        let mut queue = DiagnosticQueue::new();
        for rule in &self.rules {
            rule.check_stylesheet(stylesheet, &mut queue);
        }
        LintReport {
            warnings: queue.flush(),
            invalid_options: self.invalid_option_messages(),
        }
    }
}
