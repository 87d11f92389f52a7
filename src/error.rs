//! Shared error type for the translation pipeline.
//!
//! Diagnostics are kept lightweight on purpose: a single syntax-error kind
//! carrying a preformatted message that names the offending token or context
//! and, where one is known, its index in the token sequence. The first
//! malformed construct aborts the whole translation; there is no recovery.

use snafu::Snafu;

pub type TranslateResult<T> = Result<T, SyntaxError>;

#[derive(Debug, Snafu)]
pub enum SyntaxError {
  #[snafu(display("{message}"))]
  Malformed { message: String },
}

impl SyntaxError {
  /// Construct an error anchored at a token index in the input sequence.
  pub fn at(index: usize, message: impl Into<String>) -> Self {
    Self::Malformed {
      message: format!("{} at index {index}", message.into()),
    }
  }

  /// Construct an error without a usable index; the message's context string
  /// does the locating instead.
  pub fn new(message: impl Into<String>) -> Self {
    Self::Malformed {
      message: message.into(),
    }
  }
}
