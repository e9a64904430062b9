//! Interactive commands
//!
//! Parses and executes the commands accepted by the registry shell.

pub mod handlers;
pub mod parser;

pub use parser::{Command, CommandResult, parse_command};
