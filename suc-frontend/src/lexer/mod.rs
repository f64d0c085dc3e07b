//! Expression Lexer
//!
//! Classifies every character of the input. There is no whitespace
//! skipping: anything that is not an ASCII letter or digit, one of
//! `+ - * /`, or a parenthesis is rejected on the spot.

pub mod token;

pub use token::{Token, TokenType};

use log::trace;
use suc_common::{CompilerError, SourceTracker};

/// Expression lexer
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    tracker: SourceTracker,
}

impl Lexer {
    /// Create a new lexer for an expression typed by the user
    pub fn new(input: &str) -> Self {
        Self::with_tracker(input, SourceTracker::default())
    }

    /// Create a lexer whose locations start wherever `tracker` points
    pub fn with_tracker(input: &str, tracker: SourceTracker) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            tracker,
        }
    }

    /// Tokenize the whole input. The result always ends with `EndOfInput`.
    pub fn tokenize(&mut self) -> Result<Vec<Token>, CompilerError> {
        let mut tokens = Vec::with_capacity(self.input.len() + 1);

        while let Some(ch) = self.current_char() {
            let location = self.tracker.location();
            let token_type = match ch {
                c if c.is_ascii_alphanumeric() => TokenType::Operand(c),
                '+' => TokenType::Plus,
                '-' => TokenType::Minus,
                '*' => TokenType::Star,
                '/' => TokenType::Slash,
                '(' => TokenType::LeftParen,
                ')' => TokenType::RightParen,
                c if c.is_whitespace() => {
                    return Err(CompilerError::malformed(
                        "whitespace is not allowed in an expression",
                        location,
                    ));
                }
                c => {
                    return Err(CompilerError::malformed(
                        format!("unexpected character '{c}'"),
                        location,
                    ));
                }
            };

            trace!("lexed {token_type} at {location}");
            tokens.push(Token::new(token_type, location));
            self.advance();
        }

        tokens.push(Token::new(TokenType::EndOfInput, self.tracker.location()));
        Ok(tokens)
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn advance(&mut self) {
        if let Some(ch) = self.current_char() {
            self.tracker.advance(ch);
            self.position += 1;
        }
    }
}
