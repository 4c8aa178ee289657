//! minijson CLI.
//!
//! Reads one JSON document from a file or stdin and either reports whether it
//! parses (`check`) or prints its compact serialization (`fmt`). Results and
//! errors are written to stdout as JSON envelopes:
//! `{"ok":...}` with exit code 0, `{"err":{...}}` with exit code 1 for parse
//! errors and 2 for I/O errors.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use minijson::json::{parse_bytes_with_limits, serialize, JsonValue, Limits};
use minijson::ErrorCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "minijson")]
#[command(about = "Parse, check and reformat JSON documents", long_about = None)]
#[command(version)]
struct Cli {
    /// Ignore content after the first value and allow deeper nesting
    #[arg(long, global = true)]
    lenient: bool,

    /// Maximum array/object nesting depth
    #[arg(long, global = true, value_name = "DEPTH")]
    max_depth: Option<u64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show version information
    Version,

    /// Parse a document and report its top-level type
    Check {
        /// Input file (stdin when omitted)
        file: Option<PathBuf>,
    },

    /// Parse a document and print it in compact form
    Fmt {
        /// Input file (stdin when omitted)
        file: Option<PathBuf>,
    },
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let mut limits = if cli.lenient {
        Limits::lenient()
    } else {
        Limits::strict()
    };
    if let Some(depth) = cli.max_depth {
        limits = limits.with_max_nesting_depth(depth);
    }

    match cli.command {
        Some(Commands::Version) => {
            println!("minijson v{}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        None => {
            println!("minijson v{}", env!("CARGO_PKG_VERSION"));
            println!("Use --help for usage information");
            ExitCode::SUCCESS
        }
        Some(Commands::Check { file }) => run(file, limits, |value| {
            object([("type", JsonValue::from(value.type_name()))])
        }),
        Some(Commands::Fmt { file }) => run(file, limits, |value| value.clone()),
    }
}

/// Read, parse and print the `ok` envelope built by `on_success`.
fn run(
    file: Option<PathBuf>,
    limits: Limits,
    on_success: impl FnOnce(&JsonValue) -> JsonValue,
) -> ExitCode {
    let input = match read_input(file.as_ref()) {
        Ok(input) => input,
        Err(e) => {
            print_err(0, "IoError", &e.to_string());
            return ExitCode::from(2);
        }
    };
    debug!(bytes = input.len(), "read input");

    match parse_bytes_with_limits(&input, limits) {
        Ok(value) => {
            println!("{}", serialize(&object([("ok", on_success(&value))])));
            ExitCode::SUCCESS
        }
        Err(e) => {
            print_parse_error(&e);
            ExitCode::FAILURE
        }
    }
}

fn read_input(file: Option<&PathBuf>) -> io::Result<Vec<u8>> {
    match file {
        Some(path) => fs::read(path),
        None => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf)?;
            Ok(buf)
        }
    }
}

fn object<const N: usize>(fields: [(&str, JsonValue); N]) -> JsonValue {
    fields.into_iter().collect()
}

fn print_parse_error(e: &ErrorCode) {
    print_err(e.code(), e.name(), &e.to_string());
}

fn print_err(code: u32, name: &str, message: &str) {
    let err = object([
        ("code", JsonValue::from(code)),
        ("name", JsonValue::from(name)),
        ("message", JsonValue::from(message)),
    ]);
    println!("{}", serialize(&object([("err", err)])));
}
