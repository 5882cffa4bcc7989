//! Subcommand implementations.

pub mod field_types;
pub mod serialize;
