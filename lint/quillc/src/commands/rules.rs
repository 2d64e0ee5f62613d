//! The `rules` command: list the registered rules.

use std::fmt::Write;

use quill_lint::RULES;

/// One line per rule: name, padding, description.
pub fn format_rules() -> String {
    let width = RULES.iter().map(|def| def.name().len()).max().unwrap_or(0);
    let mut out = String::new();
    for def in RULES {
        let _ = writeln!(out, "  {:<width$}  {}", def.name(), def.meta.description);
    }
    out
}

pub fn list_rules() {
    println!("Rules:");
    print!("{}", format_rules());
}
