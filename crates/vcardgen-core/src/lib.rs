//! Shared configuration, errors and constants for the vCard generator.

pub mod config;
pub mod constants;
pub mod error;
