//! Inverse helpers for the vCard writer.
//!
//! These undo escaping and folding so generated output can be checked the
//! way a conforming reader would see it.

mod lexer;
mod values;

pub use lexer::{logical_lines, unfold};
pub use values::{split_structured, unescape_text};
