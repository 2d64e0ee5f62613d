//! `value-list-comma-newline-before`: require or disallow a newline before
//! the commas of value lists.
//!
//! Only top-level commas count: commas inside function arguments, strings,
//! comments and `url(...)` are not list separators. A comma with nothing
//! before it is skipped.

use quill_value::{DividerContexts, DividerScope};

use crate::engine::{ConfiguredRule, Finding, LintNode, NodeTarget, RuleDef, RuleMeta};
use crate::options::{Check, OptionProblem, OptionSchema, OptionsError, RuleSetting, option_text};

const NAME: &str = "value-list-comma-newline-before";

pub static RULE: RuleDef = RuleDef {
    meta: RuleMeta {
        name: NAME,
        description: "Require a newline or disallow whitespace before the commas of value lists",
        target: NodeTarget::Declarations,
        schema: OptionSchema {
            primary: Check::OneOf(&["always", "always-multi-line", "never-multi-line"]),
            possible: &[],
            optional: true,
        },
    },
    configure,
};

const EXPECTED_BEFORE: &str = "Expected newline before \",\"";
const EXPECTED_BEFORE_MULTI_LINE: &str = "Expected newline before \",\" in a multi-line list";
const REJECTED_BEFORE_MULTI_LINE: &str = "Unexpected whitespace before \",\" in a multi-line list";

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
enum Mode {
    Always,
    AlwaysMultiLine,
    NeverMultiLine,
}

impl Mode {
    /// Single-line values are exempt in the `*-multi-line` modes.
    fn multi_line_only(self) -> bool {
        matches!(self, Mode::AlwaysMultiLine | Mode::NeverMultiLine)
    }
}

fn configure(setting: &RuleSetting) -> Result<Box<dyn ConfiguredRule>, OptionsError> {
    let mode = match setting.primary.as_str() {
        Some("always") => Mode::Always,
        Some("always-multi-line") => Mode::AlwaysMultiLine,
        Some("never-multi-line") => Mode::NeverMultiLine,
        _ => {
            return Err(OptionsError::single(OptionProblem::InvalidPrimary {
                rule: NAME.to_string(),
                value: option_text(&setting.primary),
            }))
        }
    };
    Ok(Box::new(CommaNewlineBefore { mode }))
}

struct CommaNewlineBefore {
    mode: Mode,
}

impl ConfiguredRule for CommaNewlineBefore {
    fn check(&self, node: LintNode<'_>, findings: &mut Vec<Finding>) {
        let LintNode::Declaration(decl) = node else {
            return;
        };
        if !decl.value.contains(',') {
            return;
        }
        let contexts = DividerContexts::new(&decl.value, DividerScope::TopLevel);
        if self.mode.multi_line_only() && !contexts.is_multi_line() {
            return;
        }

        for (comma, context) in contexts.dividers() {
            if !comma.is_divider(",") || !context.has_predecessor {
                continue;
            }
            let message = match self.mode {
                Mode::Always if !context.has_newline_before() => EXPECTED_BEFORE,
                Mode::AlwaysMultiLine if !context.has_newline_before() => {
                    EXPECTED_BEFORE_MULTI_LINE
                }
                Mode::NeverMultiLine if context.has_space_before() => REJECTED_BEFORE_MULTI_LINE,
                _ => continue,
            };
            findings.push(Finding::new(comma.start, 1, message));
        }
    }
}
