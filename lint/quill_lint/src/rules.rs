//! The rule registry.
//!
//! Rules are registered in a static table, in alphabetical order, and
//! looked up by name once when a [`Linter`](crate::Linter) is configured.

mod selector_pseudo_element_colon_notation;
mod unit_no_unknown;
mod value_list_comma_newline_before;

use crate::engine::RuleDef;

pub use selector_pseudo_element_colon_notation::RULE as SELECTOR_PSEUDO_ELEMENT_COLON_NOTATION;
pub use unit_no_unknown::RULE as UNIT_NO_UNKNOWN;
pub use value_list_comma_newline_before::RULE as VALUE_LIST_COMMA_NEWLINE_BEFORE;

/// Every registered rule.
pub static RULES: &[&RuleDef] = &[
    &SELECTOR_PSEUDO_ELEMENT_COLON_NOTATION,
    &UNIT_NO_UNKNOWN,
    &VALUE_LIST_COMMA_NEWLINE_BEFORE,
];

/// Look a rule up by name.
pub fn find_rule(name: &str) -> Option<&'static RuleDef> {
    RULES.iter().copied().find(|def| def.meta.name == name)
}
