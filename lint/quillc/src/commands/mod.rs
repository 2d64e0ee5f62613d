//! Command handlers for the `quill` CLI.
//!
//! Each submodule implements one command. Handlers return the process exit
//! code instead of exiting, so they can be driven from tests.

mod check;
mod debug;
mod rules;

pub use check::{
    check_paths, check_with, parse_check_options, CheckOptions, OutputFormat, EXIT_CLEAN,
    EXIT_FAILURE, EXIT_LINT_ERRORS,
};
pub use debug::{format_tokens, print_tokens};
pub use rules::{format_rules, list_rules};
