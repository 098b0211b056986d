//! # lab-cli
//!
//! CLI foundation for the prompt lab: argument parsing and catalog listing
//! filters. The binary entry point lives in `main.rs`.

pub mod cli;
pub mod listing;
pub mod report;

pub use cli::{Cli, Commands};
