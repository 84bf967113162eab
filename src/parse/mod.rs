mod lexer;
mod parser;

pub use lexer::TokenKind;
pub use parser::{Command, ParseError, ParseErrorKind};

/// Parses one line of console input into a [`Command`].
///
/// # Examples
/// ```
/// use chinchillo::parse::{parse, Command};
///
/// let command = parse("play 2").unwrap();
/// assert!(matches!(command, Command::Play(Some(cap)) if cap.get() == 2));
/// assert!(parse("play 9").is_err());
/// ```
pub fn parse(s: &str) -> Result<Command, ParseError> {
    parser::Parser::new(s).parse()
}
