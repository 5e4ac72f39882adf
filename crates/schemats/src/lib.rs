//! Command-line driver for `schemats-typegen`.
//!
//! Reads an OpenAPI document from disk or stdin, applies configuration, and
//! writes the generated TypeScript declarations.

pub mod cli;
pub mod config;
pub mod logging;
