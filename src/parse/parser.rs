use super::lexer::*;
use crate::common::{RollCap, RollCapError};
use crate::narrate::{MarkdownNarrator, Narrator, PlainNarrator};
use logos_iter::LogosIter;
use std::fmt;
use std::ops::Range;

type PResult<T> = Result<T, ParseError>;

/// One line of input to the console front end.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Command {
    /// Play a match; `None` uses the configured cap.
    Play(Option<RollCap>),
    Style(Narrator),
    Help,
    Quit,
}

#[derive(thiserror::Error, Debug, Clone, Eq, PartialEq)]
#[error("error at position {} ({slice:?}): {kind}", .span.start)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Range<usize>,
    pub slice: String,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum ParseErrorKind {
    UnexpectedToken {
        found: Option<TokenKind>,
        expected: Vec<TokenKind>,
    },
    UnexpectedString {
        expected: Vec<TokenKind>,
    },
    InvalidInteger,
    RollCap(RollCapError),
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedToken { found, expected } => {
                match found {
                    Some(found) => write!(f, "unexpected {}, expected ", found)?,
                    None => f.write_str("unexpected end of input, expected ")?,
                }
                fmt_expected(expected, f)
            }
            Self::UnexpectedString { expected } => {
                f.write_str("expected ")?;
                fmt_expected(expected, f)
            }
            Self::InvalidInteger => f.write_str("integer is too large"),
            Self::RollCap(why) => fmt::Display::fmt(why, f),
        }
    }
}

fn fmt_expected(expected: &[TokenKind], f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match expected {
        [] => f.write_str("end of input"),
        [a] => f.write_str(a.as_str()),
        [a, b] => write!(f, "{} or {}", a, b),
        [init @ .., last] => {
            for exp in init {
                write!(f, "{}, ", exp)?;
            }
            write!(f, "or {}", last)
        }
    }
}

pub struct Parser<'a> {
    lexer: Lexer<'a>,
}

impl<'a> Parser<'a> {
    const COMMANDS: &'static [TokenKind] = &[
        TokenKind::Integer,
        TokenKind::Play,
        TokenKind::Style,
        TokenKind::Help,
        TokenKind::Quit,
    ];

    const STYLES: &'static [TokenKind] = &[TokenKind::Plain, TokenKind::Markdown];

    pub fn new(s: &'a str) -> Self {
        Self { lexer: lexer(s) }
    }

    pub fn parse(mut self) -> PResult<Command> {
        let command = self.parse_command()?;
        self.parse_end()?;
        Ok(command)
    }

    fn advance(&mut self) -> Option<TokenKind> {
        self.lexer.next()
    }

    fn matches(&mut self, kind: TokenKind) -> bool {
        self.lexer.peek().map_or(false, |&peeked| peeked == kind)
    }

    fn consume(&mut self, expected: TokenKind) -> PResult<()> {
        if self.matches(expected) {
            self.advance();
            Ok(())
        } else {
            self.unexpected_token(vec![expected])
        }
    }

    fn error<T>(&mut self, kind: ParseErrorKind) -> PResult<T> {
        Err(ParseError {
            kind,
            span: self.lexer.span(),
            slice: self.lexer.slice().to_string(),
        })
    }

    fn unexpected_token<T>(&mut self, expected: Vec<TokenKind>) -> PResult<T> {
        let found = self.advance();
        if matches!(found, Some(TokenKind::Error)) {
            self.error(ParseErrorKind::UnexpectedString { expected })
        } else {
            self.error(ParseErrorKind::UnexpectedToken { found, expected })
        }
    }

    fn parse_command(&mut self) -> PResult<Command> {
        match self.lexer.peek().copied() {
            Some(TokenKind::Integer) => self.parse_roll_cap().map(|cap| Command::Play(Some(cap))),
            Some(TokenKind::Play) => {
                self.advance();
                let cap = if self.matches(TokenKind::Integer) {
                    Some(self.parse_roll_cap()?)
                } else {
                    None
                };
                Ok(Command::Play(cap))
            }
            Some(TokenKind::Style) => {
                self.advance();
                self.parse_style().map(Command::Style)
            }
            Some(TokenKind::Help) => {
                self.advance();
                Ok(Command::Help)
            }
            Some(TokenKind::Quit) => {
                self.advance();
                Ok(Command::Quit)
            }
            _ => self.unexpected_token(Self::COMMANDS.to_vec()),
        }
    }

    fn parse_roll_cap(&mut self) -> PResult<RollCap> {
        self.consume(TokenKind::Integer)?;
        let n = match self.lexer.slice().parse::<usize>() {
            Ok(n) => n,
            Err(_) => return self.error(ParseErrorKind::InvalidInteger),
        };
        match RollCap::limited(n) {
            Ok(cap) => Ok(cap),
            Err(why) => self.error(ParseErrorKind::RollCap(why)),
        }
    }

    fn parse_style(&mut self) -> PResult<Narrator> {
        match self.lexer.peek().copied() {
            Some(TokenKind::Plain) => {
                self.advance();
                Ok(PlainNarrator.into())
            }
            Some(TokenKind::Markdown) => {
                self.advance();
                Ok(MarkdownNarrator.into())
            }
            _ => self.unexpected_token(Self::STYLES.to_vec()),
        }
    }

    fn parse_end(&mut self) -> PResult<()> {
        if self.lexer.peek().is_none() {
            Ok(())
        } else {
            self.unexpected_token(vec![])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(s: &str, expected: Command) {
        assert_eq!(Parser::new(s).parse(), Ok(expected), "{:?}", s);
    }

    fn check_err(s: &str, kind: ParseErrorKind, span: Range<usize>) {
        let err = Parser::new(s).parse().unwrap_err();
        assert_eq!(err.kind, kind, "{:?}", s);
        assert_eq!(err.span, span, "{:?}", s);
    }

    fn cap(n: usize) -> Option<RollCap> {
        Some(RollCap::new(n).unwrap())
    }

    #[test]
    fn test_parse_play() {
        check("3", Command::Play(cap(3)));
        check("play", Command::Play(None));
        check("play 1", Command::Play(cap(1)));
        check("  roll   2  ", Command::Play(cap(2)));
    }

    #[test]
    fn test_parse_other_commands() {
        check("style markdown", Command::Style(MarkdownNarrator.into()));
        check("style plain", Command::Style(PlainNarrator.into()));
        check("help", Command::Help);
        check("?", Command::Help);
        check("quit", Command::Quit);
        check("exit", Command::Quit);
    }

    #[test]
    fn test_roll_cap_out_of_range() {
        check_err("play 4", ParseErrorKind::RollCap(RollCapError::TooLarge(4)), 5..6);
        check_err("0", ParseErrorKind::RollCap(RollCapError::Zero), 0..1);
        check_err("99999999999999999999999999", ParseErrorKind::InvalidInteger, 0..26);
    }

    #[test]
    fn test_unexpected_input() {
        check_err(
            "play 2 3",
            ParseErrorKind::UnexpectedToken {
                found: Some(TokenKind::Integer),
                expected: vec![],
            },
            7..8,
        );
        let err = Parser::new("style").parse().unwrap_err();
        assert_eq!(
            err.kind,
            ParseErrorKind::UnexpectedToken {
                found: None,
                expected: vec![TokenKind::Plain, TokenKind::Markdown],
            }
        );
        let err = Parser::new("dance").parse().unwrap_err();
        assert!(matches!(err.kind, ParseErrorKind::UnexpectedString { .. }));
    }

    #[test]
    fn test_error_messages() {
        let err = Parser::new("play 4").parse().unwrap_err();
        assert_eq!(
            &err.to_string(),
            "error at position 5 (\"4\"): roll cap 4 is above the limit of 3"
        );
        let err = Parser::new("style html").parse().unwrap_err();
        assert_eq!(
            &err.kind.to_string(),
            "expected 'plain' or 'markdown'"
        );
        let err = Parser::new("help me").parse().unwrap_err();
        assert!(err.kind.to_string().ends_with("expected end of input"));
    }
}
