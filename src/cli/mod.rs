//! Command-line front end: each subcommand fires one or more handlers of
//! [`SearchClient`](crate::application::SearchClient) against console regions.

pub mod args;
pub mod commands;

pub use args::{Cli, Command};
pub use commands::{execute, run, Page};
