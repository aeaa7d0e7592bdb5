//! CLI subcommand implementations.

pub mod config;
pub mod import;
pub mod search;
