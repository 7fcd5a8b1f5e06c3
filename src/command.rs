//! Text typed at the prompt, turned into something the app can act on.

use crate::error::ParseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    Save,
    Load,
    Restart,
    Yes,
    No,
    /// Zero-based column; may be out of range, the game decides.
    Drop(isize),
}

impl Command {
    /// Parse a prompt line. Columns are entered 1-based.
    pub fn parse(input: &str) -> Result<Command, ParseError> {
        let text = input.trim();
        if text.is_empty() {
            return Err(ParseError::Blank);
        }
        match text.to_ascii_lowercase().as_str() {
            "quit" => return Ok(Command::Quit),
            "save" => return Ok(Command::Save),
            "load" => return Ok(Command::Load),
            "restart" => return Ok(Command::Restart),
            "y" | "yes" => return Ok(Command::Yes),
            "n" | "no" => return Ok(Command::No),
            _ => {}
        }
        parse_column(text).map(Command::Drop)
    }
}

/// Digits only, converted from 1-based to 0-based. `"0"` becomes -1.
pub fn parse_column(text: &str) -> Result<isize, ParseError> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::NotANumber(text.to_string()));
    }
    text.parse::<isize>()
        .map(|n| n - 1)
        .map_err(|_| ParseError::NotANumber(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_words() {
        assert_eq!(Command::parse("quit"), Ok(Command::Quit));
        assert_eq!(Command::parse("  SAVE "), Ok(Command::Save));
        assert_eq!(Command::parse("load"), Ok(Command::Load));
        assert_eq!(Command::parse("restart"), Ok(Command::Restart));
        assert_eq!(Command::parse("y"), Ok(Command::Yes));
        assert_eq!(Command::parse("No"), Ok(Command::No));
    }

    #[test]
    fn test_parse_columns_are_one_based() {
        assert_eq!(Command::parse("1"), Ok(Command::Drop(0)));
        assert_eq!(Command::parse("7"), Ok(Command::Drop(6)));
        assert_eq!(Command::parse("0"), Ok(Command::Drop(-1)));
        assert_eq!(Command::parse("120"), Ok(Command::Drop(119)));
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        assert_eq!(
            Command::parse("-3"),
            Err(ParseError::NotANumber("-3".into()))
        );
        assert_eq!(
            Command::parse("three"),
            Err(ParseError::NotANumber("three".into()))
        );
        assert_eq!(Command::parse("2.5"), Err(ParseError::NotANumber("2.5".into())));
        assert_eq!(Command::parse("   "), Err(ParseError::Blank));
    }

    #[test]
    fn test_only_listed_words_are_commands() {
        assert_eq!(Command::parse("q"), Err(ParseError::NotANumber("q".into())));
        assert_eq!(Command::parse("exit"), Err(ParseError::NotANumber("exit".into())));
    }

    #[test]
    fn test_parse_rejects_overflow() {
        let huge = "9".repeat(40);
        assert_eq!(parse_column(&huge), Err(ParseError::NotANumber(huge.clone())));
    }
}
