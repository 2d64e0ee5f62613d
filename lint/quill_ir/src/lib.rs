//! Shared data types for quill: spans, source positions and the stylesheet
//! tree that rules are run against.
//!
//! The tree is produced by `quill_parse` (or any other provider that can
//! fill in exact value and selector base positions) and is read-only for
//! the rest of the pipeline.

pub mod ast;
mod position;
mod span;
pub mod visitor;

pub use ast::{AtRule, Comment, Declaration, Node, Rule, Stylesheet};
pub use position::{LineOffsetTable, SourcePos};
pub use span::Span;
pub use visitor::{walk, Visitor};
