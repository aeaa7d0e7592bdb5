//! HTTP client for communicating with a character-card catalog.
#![deny(warnings, clippy::all, clippy::pedantic)]
#![warn(missing_docs)]

pub mod client;
pub mod encode;
pub mod error;
pub mod normalize;
