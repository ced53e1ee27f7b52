//! vCard serialization.
//!
//! - Escape: text value escaping
//! - Fold: content line folding
//! - Builder: document assembly with BEGIN/END framing

mod builder;
mod escape;
mod fold;

pub use builder::{VCardBuilder, VCardDocument, serialize_property};
pub use escape::escape_text;
pub use fold::{MAX_LINE_OCTETS, fold_line};
