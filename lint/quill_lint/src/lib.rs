//! Lint rules for stylesheets and the engine that runs them.
//!
//! # Modules
//!
//! - [`tables`]: known units, pseudo-element classes, variable detection
//! - [`options`]: option schemas, validation, ignore lists
//! - [`engine`]: the rule contract, [`run`] and the multi-rule [`Linter`]
//! - [`rules`]: the registered rules
//!
//! ```
//! use quill_lint::{Linter, RuleSetting};
//!
//! let linter = Linter::from_settings([("unit-no-unknown", RuleSetting::new(true))]);
//! let output = quill_parse::parse("a { width: 10pixels; }");
//! let report = linter.lint(&output.stylesheet);
//!
//! assert_eq!(report.warnings.len(), 1);
//! assert_eq!(report.warnings[0].column, 12);
//! ```

pub mod engine;
pub mod options;
pub mod rules;
pub mod tables;

pub use engine::{
    run, run_into, ActiveRule, ConfiguredRule, Finding, LintNode, LintReport, Linter, NodeTarget,
    RuleDef, RuleMeta,
};
pub use options::{
    validate_options, Check, IgnoreList, JsonType, OptionProblem, OptionSchema, OptionsError,
    RuleSetting,
};
pub use rules::{find_rule, RULES};
pub use tables::{
    is_known_unit, is_variable_reference, pseudo_element_accepts_single,
    pseudo_element_requires_double,
};
