// Command enum to represent registry shell commands
#[derive(Debug, PartialEq)]
pub enum Command {
    /// REGISTER <full name>;<email>;<password>
    Register(String),
    /// PHONE <full name>;<phone>
    Phone(String),
    /// CODE <phone>
    Code(String),
    /// LOGIN <login>;<credential>
    Login(String),
    /// PASSWD <login>;<old password>;<new password>
    Passwd(String),
    /// IMPORT [file]
    Import(String),
    Reset,
    Help,
    Quit,
    Unknown(String),
}

#[derive(Debug, PartialEq)]
pub enum CommandResult {
    Quit,
    Continue,
}

// Parse raw command string into Command enum
pub fn parse_command(raw: &str) -> Command {
    let trimmed = raw.trim();
    let mut parts = trimmed.splitn(2, char::is_whitespace);
    let cmd = parts.next().unwrap_or("").to_ascii_uppercase();
    let arg = parts.next().unwrap_or("").trim();

    match cmd.as_str() {
        "REGISTER" => Command::Register(arg.to_string()),
        "PHONE" => Command::Phone(arg.to_string()),
        "CODE" => Command::Code(arg.to_string()),
        "LOGIN" => Command::Login(arg.to_string()),
        "PASSWD" => Command::Passwd(arg.to_string()),
        "IMPORT" => Command::Import(arg.to_string()),
        "RESET" => Command::Reset,
        "HELP" => Command::Help,
        "QUIT" | "Q" => Command::Quit,
        _ => Command::Unknown(trimmed.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_commands() {
        assert_eq!(parse_command("QUIT"), Command::Quit);
        assert_eq!(parse_command("Q"), Command::Quit);
        assert_eq!(parse_command("RESET"), Command::Reset);
        assert_eq!(parse_command("HELP"), Command::Help);
    }

    #[test]
    fn test_parse_commands_with_args() {
        assert_eq!(
            parse_command("REGISTER John Doe;john@unknown.com;testPass"),
            Command::Register("John Doe;john@unknown.com;testPass".to_string())
        );
        assert_eq!(
            parse_command("PHONE John Doe;+7 (917) 971-11-11"),
            Command::Phone("John Doe;+7 (917) 971-11-11".to_string())
        );
        assert_eq!(
            parse_command("CODE +7 (917) 971-11-11"),
            Command::Code("+7 (917) 971-11-11".to_string())
        );
        assert_eq!(
            parse_command("LOGIN john@unknown.com;testPass"),
            Command::Login("john@unknown.com;testPass".to_string())
        );
        assert_eq!(
            parse_command("PASSWD john@unknown.com;old;new"),
            Command::Passwd("john@unknown.com;old;new".to_string())
        );
        assert_eq!(
            parse_command("IMPORT users.csv"),
            Command::Import("users.csv".to_string())
        );
    }

    #[test]
    fn test_parse_with_whitespace() {
        assert_eq!(parse_command("  QUIT  "), Command::Quit);
        assert_eq!(parse_command("register John Doe;a@b.c;pw"), Command::Register("John Doe;a@b.c;pw".to_string()));
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            parse_command("FROB something"),
            Command::Unknown("FROB something".to_string())
        );
    }
}
