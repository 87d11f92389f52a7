//! Crate root: wires together the translation pipeline.
//!
//! The stages are intentionally small and composable so they can be evolved
//! independently:
//! - `token` adapts the external scanner's line-oriented output into typed
//!   tokens and flattens token runs into normalized expression text.
//! - `parser` owns all syntactic knowledge and returns a nested statement
//!   list mirroring the input's INDENT/DEDENT structure.
//! - `ty` classifies normalized expressions into the four primitive C kinds.
//! - `codegen` lowers the statement list into a complete C program.
//! - `error` centralises the single syntax-error kind shared by the stages.
//!
//! Lexing itself lives outside this crate: an external scanner produces the
//! token stream, and an external toolchain builds the emitted C.

pub mod codegen;
pub mod error;
pub mod parser;
pub mod token;
pub mod ty;

pub use error::{SyntaxError, TranslateResult};

/// Translate scanner output (one token per line) into a complete C program.
pub fn translate(scanner_output: &str) -> TranslateResult<String> {
  let tokens = token::read_stream(scanner_output);
  let program = parser::parse(&tokens)?;
  Ok(codegen::generate(&program))
}
