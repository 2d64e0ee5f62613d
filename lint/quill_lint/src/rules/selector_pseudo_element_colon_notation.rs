//! `selector-pseudo-element-colon-notation`: enforce one or two colons for
//! the CSS2 pseudo-elements (`before`, `after`, `first-line`,
//! `first-letter`).
//!
//! Other pseudo-elements only have a double-colon form and are never
//! reported. Strings, comments and attribute selectors are skipped, so
//! `a[data-x=':before']` is not a pseudo-element.

use std::fmt;

use crate::engine::{ConfiguredRule, Finding, LintNode, NodeTarget, RuleDef, RuleMeta};
use crate::options::{Check, OptionProblem, OptionSchema, OptionsError, RuleSetting, option_text};
use crate::tables::pseudo_element_accepts_single;

const NAME: &str = "selector-pseudo-element-colon-notation";

pub static RULE: RuleDef = RuleDef {
    meta: RuleMeta {
        name: NAME,
        description: "Specify single or double colon notation for applicable pseudo-elements",
        target: NodeTarget::Selectors,
        schema: OptionSchema {
            primary: Check::OneOf(&["single", "double"]),
            possible: &[],
            optional: true,
        },
    },
    configure,
};

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
enum Notation {
    Single,
    Double,
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Notation::Single => "single",
            Notation::Double => "double",
        })
    }
}

fn configure(setting: &RuleSetting) -> Result<Box<dyn ConfiguredRule>, OptionsError> {
    let notation = match setting.primary.as_str() {
        Some("single") => Notation::Single,
        Some("double") => Notation::Double,
        _ => {
            return Err(OptionsError::single(OptionProblem::InvalidPrimary {
                rule: NAME.to_string(),
                value: option_text(&setting.primary),
            }))
        }
    };
    Ok(Box::new(ColonNotation { notation }))
}

struct ColonNotation {
    notation: Notation,
}

impl ConfiguredRule for ColonNotation {
    fn check(&self, node: LintNode<'_>, findings: &mut Vec<Finding>) {
        let LintNode::Rule(rule) = node else {
            return;
        };
        for pseudo in legacy_pseudo_elements(&rule.selector) {
            let wrong = match self.notation {
                Notation::Single => pseudo.double,
                Notation::Double => !pseudo.double,
            };
            if wrong {
                findings.push(Finding::new(
                    pseudo.colon,
                    pseudo.name_end - pseudo.colon,
                    format!("Expected {} colon pseudo-element notation", self.notation),
                ));
            }
        }
    }
}

/// A legacy pseudo-element in a selector.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
struct LegacyPseudo {
    /// Offset of the colon directly before the name.
    colon: u32,
    name_end: u32,
    /// Written with `::`.
    double: bool,
}

fn offset(index: usize) -> u32 {
    u32::try_from(index).unwrap_or(u32::MAX)
}

fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-' || b == b'_' || b >= 0x80
}

/// Index one past a quoted string or bracketed group starting at `start`.
fn skip_until(bytes: &[u8], start: usize, close: u8) -> usize {
    let mut i = start + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b if b == close => return i + 1,
            quote @ (b'"' | b'\'') if close == b']' => i = skip_until(bytes, i, quote),
            _ => i += 1,
        }
    }
    bytes.len()
}

fn legacy_pseudo_elements(selector: &str) -> Vec<LegacyPseudo> {
    let bytes = selector.as_bytes();
    let mut found = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            quote @ (b'"' | b'\'') => i = skip_until(bytes, i, quote),
            b'[' => i = skip_until(bytes, i, b']'),
            b'/' if bytes.get(i + 1) == Some(&b'*') => {
                i = selector[i + 2..]
                    .find("*/")
                    .map_or(bytes.len(), |rel| i + 2 + rel + 2);
            }
            b':' => {
                let name_start = i + 1;
                let name_end = name_start
                    + bytes[name_start..]
                        .iter()
                        .take_while(|&&b| is_ident_byte(b))
                        .count();
                if pseudo_element_accepts_single(&selector[name_start..name_end]) {
                    found.push(LegacyPseudo {
                        colon: offset(i),
                        name_end: offset(name_end),
                        double: i > 0 && bytes[i - 1] == b':',
                    });
                }
                i = name_end.max(name_start);
            }
            _ => i += 1,
        }
    }
    found
}

#[cfg(test)]
mod tests;
