/// The four primitive C kinds a normalized expression can map to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CType {
  Int,
  Float,
  Char,
  CharPtr,
}

impl CType {
  /// Classify an expression by its textual form alone.
  ///
  /// The heuristic knows nothing about declarations, promotion or mixed
  /// operands: double-quoted text is a string pointer, single-quoted text a
  /// character, undelimited text containing a dot a float, and everything
  /// else (identifiers, arithmetic, the unrecognised) defaults to int.
  pub fn infer(expr: &str) -> Self {
    if expr.starts_with('"') && expr.ends_with('"') {
      CType::CharPtr
    } else if expr.starts_with('\'') && expr.ends_with('\'') {
      CType::Char
    } else if expr.contains('.') && !expr.starts_with('"') && !expr.starts_with('\'') {
      CType::Float
    } else {
      CType::Int
    }
  }

  /// C spelling used in declaration lines.
  pub fn c_name(self) -> &'static str {
    match self {
      CType::Int => "int",
      CType::Float => "float",
      CType::Char => "char",
      CType::CharPtr => "char*",
    }
  }

  /// printf conversion for values of this kind. Characters share the
  /// integer format.
  pub fn printf_directive(self) -> &'static str {
    match self {
      CType::Float => "%f",
      CType::CharPtr => "%s",
      CType::Int | CType::Char => "%d",
    }
  }

  pub fn is_string(self) -> bool {
    matches!(self, CType::CharPtr)
  }
}
