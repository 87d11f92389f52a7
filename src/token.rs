//! Token definitions and the scanner-output adapter.
//!
//! The external scanner prints one token per line: either a bare lexeme
//! (`PRINT`, `(`, `NEWLINE`) or a tagged payload (`IDENTIFIER:x`,
//! `STRING:"hi"`). Lines the adapter does not recognise become pass-through
//! atoms, so operators inside expressions survive verbatim. Malformed
//! lexemes arrive already tagged `UNKNOWN` by the scanner.

use crate::error::{SyntaxError, TranslateResult};
use std::fmt;

/// Tokens understood by the statement parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
  Print,
  If,
  For,
  In,
  Range,
  OpenParen,
  CloseParen,
  Colon,
  Assign,
  Newline,
  Indent,
  Dedent,
  Identifier(String),
  Number(String),
  Float(String),
  CharLit(String),
  StrLit(String),
  Unknown(String),
  /// Any other bare lexeme the scanner emits, kept verbatim.
  Atom(String),
}

impl Token {
  /// Classify one line of scanner output.
  pub fn from_line(line: &str) -> Self {
    if let Some(value) = line.strip_prefix("IDENTIFIER:") {
      return Token::Identifier(value.to_owned());
    }
    if let Some(value) = line.strip_prefix("NUMBER:") {
      return Token::Number(value.to_owned());
    }
    if let Some(value) = line.strip_prefix("FLOAT:") {
      return Token::Float(value.to_owned());
    }
    if let Some(value) = line.strip_prefix("CHAR:") {
      return Token::CharLit(value.to_owned());
    }
    if let Some(value) = line.strip_prefix("STRING:") {
      return Token::StrLit(value.to_owned());
    }
    if let Some(value) = line.strip_prefix("UNKNOWN:") {
      return Token::Unknown(value.to_owned());
    }

    match line {
      "PRINT" => Token::Print,
      "IF" => Token::If,
      "FOR" => Token::For,
      "IN" => Token::In,
      "RANGE" => Token::Range,
      "(" => Token::OpenParen,
      ")" => Token::CloseParen,
      ":" => Token::Colon,
      "=" => Token::Assign,
      "NEWLINE" => Token::Newline,
      "INDENT" => Token::Indent,
      "DEDENT" => Token::Dedent,
      other => Token::Atom(other.to_owned()),
    }
  }

  /// Spelling a token contributes when folded into normalized expression
  /// text: tagged tokens yield their stripped value, everything else its
  /// bare lexeme.
  pub fn expr_text(&self) -> &str {
    match self {
      Token::Identifier(value)
      | Token::Number(value)
      | Token::Float(value)
      | Token::CharLit(value)
      | Token::StrLit(value)
      | Token::Unknown(value)
      | Token::Atom(value) => value,
      Token::Print => "PRINT",
      Token::If => "IF",
      Token::For => "FOR",
      Token::In => "IN",
      Token::Range => "RANGE",
      Token::OpenParen => "(",
      Token::CloseParen => ")",
      Token::Colon => ":",
      Token::Assign => "=",
      Token::Newline => "NEWLINE",
      Token::Indent => "INDENT",
      Token::Dedent => "DEDENT",
    }
  }
}

impl fmt::Display for Token {
  /// Render the token in the scanner's own spelling, used by diagnostics.
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Token::Identifier(value) => write!(f, "IDENTIFIER:{value}"),
      Token::Number(value) => write!(f, "NUMBER:{value}"),
      Token::Float(value) => write!(f, "FLOAT:{value}"),
      Token::CharLit(value) => write!(f, "CHAR:{value}"),
      Token::StrLit(value) => write!(f, "STRING:{value}"),
      Token::Unknown(value) => write!(f, "UNKNOWN:{value}"),
      other => f.write_str(other.expr_text()),
    }
  }
}

/// Convert the scanner's stdout into a token sequence: one token per line,
/// surrounding whitespace trimmed, blank lines dropped.
pub fn read_stream(output: &str) -> Vec<Token> {
  output
    .lines()
    .map(str::trim)
    .filter(|line| !line.is_empty())
    .map(Token::from_line)
    .collect()
}

/// Flatten a token run into a single space-joined expression string.
///
/// Expressions are never parsed further; whatever precedence or typing the
/// flattened text implies is inherited downstream as-is. An `UNKNOWN` token
/// anywhere in the run fails, naming the supplied context.
pub fn normalize_expr(tokens: &[Token], context: &str) -> TranslateResult<String> {
  let mut parts = Vec::with_capacity(tokens.len());
  for token in tokens {
    if let Token::Unknown(_) = token {
      return Err(SyntaxError::new(format!(
        "unknown token in {context}: {token}"
      )));
    }
    parts.push(token.expr_text());
  }
  Ok(parts.join(" "))
}
