//! Code generation: lower the parsed statement list into C source text.
//!
//! Each nesting level runs two passes over its own statements: declarations
//! first (type inferred from the first assigned value), then executable
//! statements. Declaration sets are local to one level; nested bodies get a
//! fresh set and re-declare their names independently. Expression text is
//! emitted verbatim: nothing here validates that it is well-formed C.

use crate::parser::Stmt;
use crate::ty::CType;
use std::collections::HashSet;

/// Emit a complete C program for a top-level statement list.
pub fn generate(program: &[Stmt]) -> String {
  let mut needs_string_h = false;
  let body = emit_block(program, 0, &mut needs_string_h);

  let mut lines = Vec::new();
  lines.push("#include <stdio.h>".to_owned());
  if needs_string_h {
    lines.push("#include <string.h>".to_owned());
  }
  lines.push(String::new());
  lines.push("int main() {".to_owned());
  lines.extend(body);
  lines.push("    return 0;".to_owned());
  lines.push("}".to_owned());
  lines.join("\n")
}

/// Emit the raw line list for one nesting level.
///
/// The string-header flag is threaded through recursive calls so a string
/// print anywhere in the tree reaches the top-level include decision.
fn emit_block(stmts: &[Stmt], depth: usize, needs_string_h: &mut bool) -> Vec<String> {
  let indent = "    ".repeat(depth);
  let mut lines = Vec::new();
  let mut declared: HashSet<&str> = HashSet::new();

  // Pass 1: declarations for this level's own statements. First write wins;
  // a loop induction variable is always int.
  for stmt in stmts {
    match stmt {
      Stmt::Assign { var, value } => {
        if declared.insert(var) {
          let ty = CType::infer(value);
          if ty.is_string() {
            *needs_string_h = true;
          }
          lines.push(format!("{indent}{} {var};", ty.c_name()));
        }
      }
      Stmt::For { var, .. } => {
        if declared.insert(var) {
          lines.push(format!("{indent}int {var};"));
        }
      }
      _ => {}
    }
  }

  if !lines.is_empty() {
    lines.push(String::new());
  }

  // Pass 2: executable statements in order.
  for stmt in stmts {
    match stmt {
      Stmt::Assign { var, value } => {
        lines.push(format!("{indent}{var} = {value};"));
      }
      Stmt::Print { value } => {
        let ty = CType::infer(value);
        if ty.is_string() {
          *needs_string_h = true;
        }
        lines.push(format!(
          "{indent}printf(\"{}\\n\", {value});",
          ty.printf_directive()
        ));
      }
      Stmt::If { condition, body } => {
        lines.push(format!("{indent}if ({condition}) {{"));
        lines.extend(emit_block(body, depth + 1, needs_string_h));
        lines.push(format!("{indent}}}"));
      }
      Stmt::For { var, range, body } => {
        lines.push(format!(
          "{indent}for ({var} = 0; {var} < {range}; {var}++) {{"
        ));
        lines.extend(emit_block(body, depth + 1, needs_string_h));
        lines.push(format!("{indent}}}"));
      }
    }
  }

  lines
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::parser::parse;
  use crate::token::Token;
  use pretty_assertions::assert_eq;

  fn translate(src: &str) -> String {
    let tokens: Vec<Token> = src.split_whitespace().map(Token::from_line).collect();
    generate(&parse(&tokens).unwrap())
  }

  #[test]
  fn declares_then_assigns() {
    let program = translate("IDENTIFIER:x = NUMBER:5 NEWLINE");
    assert_eq!(
      program,
      "#include <stdio.h>\n\
       \n\
       int main() {\n\
       int x;\n\
       \n\
       x = 5;\n\
       \x20   return 0;\n\
       }"
    );
  }

  #[test]
  fn string_print_pulls_in_the_string_header() {
    let program = translate("PRINT ( STRING:\"hi\" ) NEWLINE");
    assert_eq!(
      program,
      "#include <stdio.h>\n\
       #include <string.h>\n\
       \n\
       int main() {\n\
       printf(\"%s\\n\", \"hi\");\n\
       \x20   return 0;\n\
       }"
    );
  }

  #[test]
  fn float_print_uses_the_float_format() {
    let program = translate("PRINT ( FLOAT:3.14 ) NEWLINE");
    assert!(program.contains("printf(\"%f\\n\", 3.14);"));
    assert!(!program.contains("string.h"));
  }

  #[test]
  fn char_print_shares_the_integer_format() {
    let program = translate("PRINT ( CHAR:'c' ) NEWLINE");
    assert!(program.contains("printf(\"%d\\n\", 'c');"));
  }

  #[test]
  fn string_assignment_declares_a_char_pointer() {
    let program = translate("IDENTIFIER:s = STRING:\"hi\" NEWLINE");
    assert!(program.contains("char* s;"));
    assert!(program.contains("#include <string.h>"));
    assert!(program.contains("s = \"hi\";"));
  }

  #[test]
  fn counted_loop_declares_its_induction_variable() {
    let program = translate(
      "FOR IDENTIFIER:i IN RANGE ( NUMBER:3 ) : NEWLINE INDENT PRINT ( IDENTIFIER:i ) NEWLINE DEDENT",
    );
    assert_eq!(
      program,
      "#include <stdio.h>\n\
       \n\
       int main() {\n\
       int i;\n\
       \n\
       for (i = 0; i < 3; i++) {\n\
       \x20   printf(\"%d\\n\", i);\n\
       }\n\
       \x20   return 0;\n\
       }"
    );
  }

  #[test]
  fn assigned_loop_variable_is_not_redeclared() {
    let program = translate(
      "IDENTIFIER:i = NUMBER:0 NEWLINE FOR IDENTIFIER:i IN RANGE ( NUMBER:3 ) : NEWLINE",
    );
    assert_eq!(program.matches("int i;").count(), 1);
  }

  #[test]
  fn first_assignment_fixes_the_declared_type() {
    let program = translate(
      "IDENTIFIER:x = STRING:\"hi\" NEWLINE IDENTIFIER:x = NUMBER:5 NEWLINE",
    );
    assert!(program.contains("char* x;"));
    assert!(!program.contains("int x;"));
    assert!(program.contains("x = \"hi\";"));
    assert!(program.contains("x = 5;"));
  }

  #[test]
  fn no_declarations_means_no_separator_line() {
    let program = translate("PRINT ( NUMBER:1 ) NEWLINE");
    assert_eq!(
      program,
      "#include <stdio.h>\n\
       \n\
       int main() {\n\
       printf(\"%d\\n\", 1);\n\
       \x20   return 0;\n\
       }"
    );
  }

  #[test]
  fn nested_bodies_indent_one_level_per_depth() {
    let program = translate(
      "IF IDENTIFIER:a : NEWLINE \
       INDENT IF IDENTIFIER:b : NEWLINE \
       INDENT PRINT ( NUMBER:1 ) NEWLINE DEDENT DEDENT",
    );
    assert!(program.contains("if (a) {"));
    assert!(program.contains("    if (b) {"));
    assert!(program.contains("        printf(\"%d\\n\", 1);"));
  }

  #[test]
  fn nested_string_print_still_marks_the_header() {
    let program = translate(
      "IF IDENTIFIER:x : NEWLINE INDENT PRINT ( STRING:\"hi\" ) NEWLINE DEDENT",
    );
    assert!(program.contains("#include <string.h>"));
  }

  #[test]
  fn sibling_blocks_declare_independently() {
    let program = translate(
      "IF IDENTIFIER:a : NEWLINE INDENT IDENTIFIER:y = NUMBER:1 NEWLINE DEDENT \
       IF IDENTIFIER:b : NEWLINE INDENT IDENTIFIER:y = NUMBER:2 NEWLINE DEDENT",
    );
    assert_eq!(program.matches("    int y;").count(), 2);
  }

  #[test]
  fn nested_declarations_are_not_hoisted() {
    let program = translate(
      "IF IDENTIFIER:a : NEWLINE INDENT IDENTIFIER:y = NUMBER:1 NEWLINE DEDENT",
    );
    // The declaration sits inside the guarded block, not at the top level.
    assert!(program.contains("if (a) {\n    int y;"));
  }

  #[test]
  fn empty_program_is_just_the_shell() {
    assert_eq!(
      generate(&[]),
      "#include <stdio.h>\n\
       \n\
       int main() {\n\
       \x20   return 0;\n\
       }"
    );
  }
}
