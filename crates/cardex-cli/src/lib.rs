//! cardex CLI library — search/import orchestration against host collaborators.
#![deny(warnings, clippy::all, clippy::pedantic)]
#![warn(missing_docs)]

/// CLI subcommand implementations.
pub mod commands;
/// Persisted settings — read/write `~/.cardex/config.toml`.
pub mod config;
pub mod debounce;
pub mod host;
pub mod session;
