//! vCard 3.0 implementation (RFC 2426).
//!
//! This module provides the types and serialization rules used to emit a
//! single vCard document from already-normalized contact data.
//!
//! ## Usage
//!
//! ```rust
//! use vcardgen_rfc::rfc::vcard::{VCardBuilder, VCardParameter, VCardProperty};
//!
//! let mut builder = VCardBuilder::new("-//Example//EN", 75);
//! builder
//!     .push(&VCardProperty::text("FN", "Jane Doe"))
//!     .unwrap();
//! builder
//!     .push(
//!         &VCardProperty::text("EMAIL", "jane@example.com")
//!             .with_param(VCardParameter::new("TYPE", "INTERNET")),
//!     )
//!     .unwrap();
//!
//! let card = builder.finish();
//! assert!(card.as_str().starts_with("BEGIN:VCARD\r\n"));
//! assert!(card.as_str().contains("FN:Jane Doe\r\n"));
//! assert!(card.as_str().ends_with("END:VCARD\r\n"));
//! ```
//!
//! ## Line Length
//!
//! Folding counts UTF-8 octets and never splits a character. A physical
//! line carries at most `fold_limit` octets of content; continuation lines
//! add one leading space on top of that.
//!
//! ## Submodules
//!
//! - [`core`] - Property, parameter and structured value types
//! - [`build`] - Escaping, folding and document assembly
//! - [`parse`] - Inverse helpers (unescape, unfold) for round-trip checks

pub mod build;
pub mod core;
pub mod parse;

pub use build::{VCardBuilder, VCardDocument, escape_text, fold_line, serialize_property};
pub use core::{StructuredName, VCardParameter, VCardProperty, VCardValue, names};
pub use parse::{logical_lines, split_structured, unescape_text, unfold};
