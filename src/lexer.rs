use log::{debug, trace};
use thiserror::Error;

use crate::ast::{FieldKey, Token};

/// Errors produced while scanning filter source.
///
/// Positions are character offsets into the trimmed source.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LexError {
    #[error("unterminated string starting at position {position}: expected closing {quote}")]
    UnterminatedString { quote: char, position: usize },

    #[error("invalid number literal '{text}' at position {position}")]
    InvalidNumber { text: String, position: usize },

    #[error("expected field key (key, value or type) at position {position}, but found {}", describe(.found))]
    ExpectedFieldKey { found: Option<char>, position: usize },

    #[error("expected unquoted string at position {position}, but found '{found}'")]
    UnexpectedChar { found: char, position: usize },
}

fn describe(ch: &Option<char>) -> String {
    match ch {
        Some(ch) => format!("'{}'", ch),
        None => "end of input".to_string(),
    }
}

/// Scans the whole source into tokens.
///
/// Surrounding whitespace is trimmed first. Either every token is returned or
/// the first error is.
pub fn lex(source: &str) -> Result<Vec<Token>, LexError> {
    let result = Lexer::new(source.trim()).tokenize();
    match &result {
        Ok(tokens) => trace!("lexed {} tokens", tokens.len()),
        Err(e) => debug!("lex failed: {}", e),
    }
    result
}

pub struct Lexer {
    input: Vec<char>,
    position: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            input: input.chars().collect(),
            position: 0,
        }
    }

    /// `None` once the cursor has reached the end.
    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    // The cursor never moves past the end of input.
    fn advance(&mut self) {
        self.position = (self.position + 1).min(self.input.len());
    }

    fn skip_whitespace(&mut self) {
        while let Some(' ' | '\t' | '\n' | '\r') = self.current_char() {
            self.advance();
        }
    }

    fn match_word(&mut self, word: &str) -> bool {
        let len = word.chars().count();
        let end = self.position + len;
        let matched = self
            .input
            .get(self.position..end)
            .is_some_and(|window| window.iter().copied().eq(word.chars()));
        if !matched {
            return false;
        }
        self.position = end;
        true
    }

    fn read_identifier(&mut self) -> Result<String, LexError> {
        let mut result = String::new();
        while let Some(ch) = self.current_char() {
            if ch.is_ascii_alphanumeric() || ch == '_' {
                result.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        if result.is_empty() {
            // Identifiers are the fallback, so an empty one is an unknown char.
            let found = self.current_char().unwrap_or_default();
            return Err(LexError::UnexpectedChar {
                found,
                position: self.position,
            });
        }
        Ok(result)
    }

    fn read_string(&mut self, quote: char) -> Result<String, LexError> {
        let start = self.position;
        let mut result = String::new();
        self.advance(); // Consume opening quote

        while let Some(ch) = self.current_char() {
            self.advance();
            if ch == quote {
                return Ok(result);
            }
            result.push(ch);
        }

        Err(LexError::UnterminatedString {
            quote,
            position: start,
        })
    }

    fn read_number(&mut self) -> Result<f64, LexError> {
        let start = self.position;
        let mut text = String::new();

        while let Some(ch) = self.current_char() {
            if ch.is_ascii_digit() || matches!(ch, '.' | '-' | '+') {
                text.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        text.parse::<f64>().map_err(|_| LexError::InvalidNumber {
            text,
            position: start,
        })
    }

    fn read_field_key(&mut self) -> Result<FieldKey, LexError> {
        self.advance(); // Consume '$'

        for key in FieldKey::ALL {
            if self.match_word(key.as_str()) {
                return Ok(key);
            }
        }

        Err(LexError::ExpectedFieldKey {
            found: self.current_char(),
            position: self.position,
        })
    }

    /// Returns the next token, or `None` at the end of input.
    pub fn next_token(&mut self) -> Result<Option<Token>, LexError> {
        self.skip_whitespace();

        let token = match self.current_char() {
            None => return Ok(None),
            Some(quote @ ('"' | '\'')) => Token::String(self.read_string(quote)?),
            Some('0'..='9' | '-' | '+' | '.') => Token::Number(self.read_number()?),
            Some('$') => Token::FieldKey(self.read_field_key()?),
            Some('&') => {
                self.advance();
                Token::And
            }
            Some('|') => {
                self.advance();
                Token::Or
            }
            Some('!') => {
                self.advance();
                Token::Not
            }
            Some(':') => {
                self.advance();
                Token::Colon
            }
            Some('(') => {
                self.advance();
                Token::LParen
            }
            Some(')') => {
                self.advance();
                Token::RParen
            }
            Some(_) => {
                let ident = self.read_identifier()?;

                match ident.as_str() {
                    "true" => Token::Boolean(true),
                    "false" => Token::Boolean(false),
                    "null" => Token::Null,
                    _ => Token::String(ident),
                }
            }
        };
        Ok(Some(token))
    }

    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }
        Ok(tokens)
    }
}

#[test]
fn test_keywords() {
    let mut lexer = Lexer::new("true false null nullable");
    assert_eq!(lexer.next_token().unwrap(), Some(Token::Boolean(true)));
    assert_eq!(lexer.next_token().unwrap(), Some(Token::Boolean(false)));
    assert_eq!(lexer.next_token().unwrap(), Some(Token::Null));
    assert_eq!(
        lexer.next_token().unwrap(),
        Some(Token::String("nullable".to_string()))
    );
    assert_eq!(lexer.next_token().unwrap(), None);
}

#[test]
fn test_cursor_clamps_at_end() {
    let mut lexer = Lexer::new("a");
    lexer.advance();
    lexer.advance();
    assert_eq!(lexer.position, 1);
    assert_eq!(lexer.current_char(), None);
}
