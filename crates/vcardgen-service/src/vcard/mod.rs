//! vCard generation from a contact submission.

mod assemble;
mod generator;
mod normalized;
mod options;

pub use assemble::{assemble, contact_properties};
pub use generator::VCardGenerator;
pub use normalized::NormalizedContact;
pub use options::GeneratorOptions;
