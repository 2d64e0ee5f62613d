//! `unit-no-unknown`: disallow unknown units.
//!
//! ```css
//! a { width: 10pixels; }
//! /*           ^^^^^^ */
//! ```

use quill_value::{parse_dimension, tokenize, walk_tokens, Walk};

use crate::engine::{ConfiguredRule, Finding, LintNode, NodeTarget, RuleDef, RuleMeta};
use crate::options::{Check, IgnoreList, OptionSchema, OptionsError, RuleSetting, IGNORE_ENTRY};
use crate::tables::{is_known_unit, is_variable_reference};

const NAME: &str = "unit-no-unknown";

pub static RULE: RuleDef = RuleDef {
    meta: RuleMeta {
        name: NAME,
        description: "Disallow unknown units",
        target: NodeTarget::Declarations,
        schema: OptionSchema {
            primary: Check::Any,
            possible: &[("ignore", Check::ListOf(&IGNORE_ENTRY))],
            optional: true,
        },
    },
    configure,
};

fn configure(setting: &RuleSetting) -> Result<Box<dyn ConfiguredRule>, OptionsError> {
    Ok(Box::new(UnitNoUnknown {
        ignore: IgnoreList::from_option(setting.secondary_option("ignore")),
    }))
}

pub(crate) fn rejected(unit: &str) -> String {
    format!("Unexpected unknown unit \"{unit}\"")
}

struct UnitNoUnknown {
    ignore: IgnoreList,
}

impl ConfiguredRule for UnitNoUnknown {
    fn check(&self, node: LintNode<'_>, findings: &mut Vec<Finding>) {
        let LintNode::Declaration(decl) = node else {
            return;
        };
        let tokens = tokenize(&decl.value);
        walk_tokens(&tokens, &mut |token| {
            // `url(...)` contents and other opaque arguments are not units.
            if token.is_opaque() {
                return Walk::SkipChildren;
            }
            if !token.is_word() || is_variable_reference(token.text) {
                return Walk::Continue;
            }
            let Some(dimension) = parse_dimension(token.text) else {
                return Walk::Continue;
            };
            let unit = dimension.unit;
            if unit.is_empty() || is_known_unit(unit) || self.ignore.matches(unit) {
                return Walk::Continue;
            }
            findings.push(Finding::new(
                token.start,
                token.end - token.start,
                rejected(unit),
            ));
            Walk::Continue
        });
    }
}
