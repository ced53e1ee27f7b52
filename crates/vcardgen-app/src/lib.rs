//! HTTP front end for the vCard generator.

pub mod app;
pub mod config;
pub mod error;
pub mod generator_handler;
