//! User Registry - Entry Point
//!
//! An interactive shell over the in-process identity and credential
//! registry.

use std::io::{self, BufRead, Write};

use log::info;

use user_registry::UserRegistry;
use user_registry::commands::handlers::handle_command;
use user_registry::commands::parser::{CommandResult, parse_command};
use user_registry::config::AppConfig;

fn main() {
    // Initialize the logger (env_logger picks up RUST_LOG environment variable)
    env_logger::init();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Failed to load configuration: {err}");
            std::process::exit(1);
        }
    };

    info!("Starting user registry shell");
    println!("user-registry shell. Type HELP for commands, QUIT to exit.");

    let mut registry = UserRegistry::new();
    let stdin = io::stdin();
    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(err) => {
                eprintln!("Read error: {err}");
                break;
            }
        }
        if line.trim().is_empty() {
            continue;
        }
        if line.len() > config.max_command_length {
            println!(
                "Command too long (max {} characters)",
                config.max_command_length
            );
            continue;
        }

        let command = parse_command(&line);
        if handle_command(&mut registry, &config, command) == CommandResult::Quit {
            break;
        }
    }

    info!("Shutting down");
}
