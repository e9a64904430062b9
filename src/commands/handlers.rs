//! Command handlers
//!
//! Executes parsed shell commands against the registry and prints results.
//! File reading for IMPORT happens here, outside the registry core: the
//! core only ever sees an already-split sequence of records.

use std::fs;

use log::warn;

use crate::commands::parser::{Command, CommandResult};
use crate::config::AppConfig;
use crate::error::RegistryError;
use crate::registry::UserRegistry;

const HELP_TEXT: &str = "\
Commands:
  REGISTER <full name>;<email>;<password>
  PHONE    <full name>;<phone>
  CODE     <phone>
  LOGIN    <login>;<credential>
  PASSWD   <login>;<old password>;<new password>
  IMPORT   [file]
  RESET
  HELP
  QUIT";

/// Executes one command against the registry.
pub fn handle_command(
    registry: &mut UserRegistry,
    config: &AppConfig,
    command: Command,
) -> CommandResult {
    match command {
        Command::Register(arg) => match split_args::<3>(&arg) {
            Some([full_name, email, password]) => {
                report_user(registry.register_by_password(full_name, email, password));
            }
            None => usage("REGISTER <full name>;<email>;<password>"),
        },
        Command::Phone(arg) => match split_args::<2>(&arg) {
            Some([full_name, phone]) => {
                report_user(registry.register_by_phone(full_name, phone));
            }
            None => usage("PHONE <full name>;<phone>"),
        },
        Command::Code(arg) => {
            if arg.is_empty() {
                usage("CODE <phone>");
            } else {
                match registry.request_access_code(&arg) {
                    Ok(()) => println!("Access code sent"),
                    Err(err) => report_error(&err),
                }
            }
        }
        Command::Login(arg) => match split_args::<2>(&arg) {
            Some([login, credential]) => match registry.login(login, credential) {
                Some(profile) => println!("{profile}"),
                None => println!("Login failed"),
            },
            None => usage("LOGIN <login>;<credential>"),
        },
        Command::Passwd(arg) => match split_args::<3>(&arg) {
            Some([login, old, new]) => match registry.change_password(login, old, new) {
                Ok(()) => println!("Password updated"),
                Err(err) => report_error(&err),
            },
            None => usage("PASSWD <login>;<old password>;<new password>"),
        },
        Command::Import(arg) => {
            let path = if arg.is_empty() {
                config.import_file.as_str()
            } else {
                arg.as_str()
            };
            import_from_file(registry, path);
        }
        Command::Reset => {
            registry.reset();
            println!("Registry cleared");
        }
        Command::Help => println!("{HELP_TEXT}"),
        Command::Quit => {
            println!("Goodbye");
            return CommandResult::Quit;
        }
        Command::Unknown(raw) => println!("Unknown command: {raw}"),
    }
    CommandResult::Continue
}

fn import_from_file(registry: &mut UserRegistry, path: &str) {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) => {
            warn!("failed to read import file {}: {}", path, err);
            println!("Cannot read {path}: {err}");
            return;
        }
    };
    let rows: Vec<&str> = contents
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect();
    match registry.import_records(&rows) {
        Ok(users) => println!("Imported {} users", users.len()),
        Err(err) => report_error(&err),
    }
}

/// Splits a semicolon-separated argument string into exactly `N` non-empty
/// parts.
fn split_args<const N: usize>(raw: &str) -> Option<[&str; N]> {
    let mut out = [""; N];
    let mut parts = raw.splitn(N, ';');
    for slot in &mut out {
        *slot = parts.next()?.trim();
    }
    if out.iter().any(|part| part.is_empty()) {
        return None;
    }
    Some(out)
}

fn report_user(result: Result<&crate::user::User, RegistryError>) {
    match result {
        Ok(user) => println!("{}", user.profile_summary()),
        Err(err) => report_error(&err),
    }
}

fn report_error(err: &RegistryError) {
    println!("Error: {err}");
}

fn usage(expected: &str) {
    println!("Usage: {expected}");
}
