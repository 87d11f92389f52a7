//! Command-line driver: read scanner output, write the translated C program.
//!
//! The scanner and the C toolchain are external collaborators; this binary
//! only bridges them. Logging goes through `env_logger`, so `RUST_LOG=debug`
//! exposes the parser's progress tracing.

use clap::Parser;
use rpy2c::translate;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process;

/// Translate scanner token output into a C program.
#[derive(Parser)]
#[command(name = "rpy2c", version)]
struct Cli {
  /// Scanner output with one token per line; reads stdin when omitted
  input: Option<PathBuf>,

  /// Write the C program here instead of stdout
  #[arg(short, long)]
  output: Option<PathBuf>,
}

fn main() {
  env_logger::init();
  let cli = Cli::parse();

  if let Err(err) = run(&cli) {
    eprintln!("{err}");
    process::exit(1);
  }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
  let scanner_output = match &cli.input {
    Some(path) => fs::read_to_string(path)?,
    None => {
      let mut buffer = String::new();
      io::stdin().read_to_string(&mut buffer)?;
      buffer
    }
  };

  let c_program = translate(&scanner_output)?;

  match &cli.output {
    Some(path) => fs::write(path, format!("{c_program}\n"))?,
    None => println!("{c_program}"),
  }

  Ok(())
}
