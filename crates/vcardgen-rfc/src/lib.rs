//! vCard 3.0 wire layer: property model, escaping, folding and document building.

pub mod error;
pub mod rfc;
