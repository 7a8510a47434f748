//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the parley binary.

mod commands;
mod offline;
mod server;

pub use commands::{Cli, Commands};
pub use offline::{handle_model_info_command, handle_token_count_command};
pub use server::{handle_serve_command, resolve_config};
