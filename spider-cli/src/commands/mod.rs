//! CLI subcommands.

pub mod common;
pub mod config;
pub mod fetch;
