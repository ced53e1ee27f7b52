//! Contact-to-vCard encoding engine.
//!
//! [`vcard::VCardGenerator`] drives the pipeline: sanitize and normalize the
//! submitted fields, run the validation checkpoints, assemble the property
//! lines and append the optional photo.

pub mod contact;
pub mod error;
pub mod vcard;
