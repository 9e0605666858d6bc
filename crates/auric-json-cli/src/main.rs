//! `auric` CLI: check and inspect JSON documents from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Validate JSON from stdin
//! echo '{"name":"Alice","age":30}' | auric check
//!
//! # Reject anything after the first value
//! auric check --strict -i data.json
//!
//! # Count nodes per type and report nesting depth
//! auric stats -i data.json
//!
//! # Read one value by path (object keys and array indices, `/`-separated)
//! auric get friends/0/name -i data.json
//!
//! # Parse very deep documents
//! auric check --max-depth 4096 -i deep.json
//! ```

use anyhow::{Context, Result};
use auric_json::{ParseOptions, Parser as JsonParser, Value};
use clap::{Args, Parser, Subcommand};
use std::io::{self, Write};

#[derive(Parser)]
#[command(name = "auric", version, about = "Check and inspect JSON documents")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse the input and report the type of the root value
    Check {
        #[command(flatten)]
        parse: ParseArgs,
    },
    /// Show node counts per type, nesting depth and input size
    Stats {
        #[command(flatten)]
        parse: ParseArgs,
    },
    /// Print the value at a `/`-separated path
    Get {
        /// Path of object keys and array indices, e.g. `friends/0/name`
        path: String,
        #[command(flatten)]
        parse: ParseArgs,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
}

#[derive(Args)]
struct ParseArgs {
    /// Input file (reads from stdin if omitted)
    #[arg(short, long)]
    input: Option<String>,
    /// Fail if anything but whitespace follows the first value
    #[arg(long)]
    strict: bool,
    /// Maximum nesting depth of arrays/objects
    #[arg(long, default_value_t = auric_json::DEFAULT_MAX_DEPTH)]
    max_depth: usize,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check { parse } => {
            let text = read_input(parse.input.as_deref())?;
            let value = parse_document(&text, &parse)?;
            println!("ok: {}", value.type_name());
        }
        Commands::Stats { parse } => {
            let text = read_input(parse.input.as_deref())?;
            let value = parse_document(&text, &parse)?;
            let mut stats = Stats::default();
            stats.visit(&value, 0);
            println!("Input size:  {} bytes", text.len());
            println!("Max depth:   {}", stats.max_depth);
            println!("Nulls:       {}", stats.nulls);
            println!("Booleans:    {}", stats.booleans);
            println!("Integers:    {}", stats.integers);
            println!("Doubles:     {}", stats.doubles);
            println!("Strings:     {}", stats.strings);
            println!("Arrays:      {}", stats.arrays);
            println!("Objects:     {}", stats.objects);
        }
        Commands::Get {
            path,
            parse,
            output,
        } => {
            let text = read_input(parse.input.as_deref())?;
            let value = parse_document(&text, &parse)?;
            let found = value
                .pointer(&path)
                .with_context(|| format!("Failed to resolve path: {}", path))?;
            write_output(output.as_deref(), &format!("{}\n", describe(found)))?;
        }
    }

    Ok(())
}

/// Parse `text` with the depth limit from the arguments, enforcing
/// single-document input when `--strict` is set.
fn parse_document(text: &str, args: &ParseArgs) -> Result<Value> {
    let options = ParseOptions::new().with_max_depth(args.max_depth);
    let mut parser = JsonParser::with_options(text, options);
    let value = parser.parse_value().context("Failed to parse JSON")?;
    if args.strict && !parser.is_at_end() {
        anyhow::bail!(
            "Failed to parse JSON: trailing content at offset {}",
            parser.position()
        );
    }
    Ok(value)
}

/// Scalars print as plain text; containers print as a one-line summary.
fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Integer(n) => n.to_string(),
        Value::Double(f) => format!("{:?}", f),
        Value::String(s) => s.clone(),
        Value::Array(a) => format!("array ({} elements)", a.len()),
        Value::Object(o) => format!("object ({} members)", o.len()),
    }
}

/// Node counts per variant plus the deepest container nesting.
#[derive(Default)]
struct Stats {
    nulls: usize,
    booleans: usize,
    integers: usize,
    doubles: usize,
    strings: usize,
    arrays: usize,
    objects: usize,
    max_depth: usize,
}

impl Stats {
    fn visit(&mut self, value: &Value, depth: usize) {
        match value {
            Value::Null => self.nulls += 1,
            Value::Bool(_) => self.booleans += 1,
            Value::Integer(_) => self.integers += 1,
            Value::Double(_) => self.doubles += 1,
            Value::String(_) => self.strings += 1,
            Value::Array(a) => {
                self.arrays += 1;
                self.max_depth = self.max_depth.max(depth + 1);
                for item in a {
                    self.visit(item, depth + 1);
                }
            }
            Value::Object(o) => {
                self.objects += 1;
                self.max_depth = self.max_depth.max(depth + 1);
                for (_, item) in o {
                    self.visit(item, depth + 1);
                }
            }
        }
    }
}

/// Read the whole document from `-i` or, when omitted, from stdin.
fn read_input(path: Option<&str>) -> Result<String> {
    let Some(path) = path else {
        return io::read_to_string(io::stdin()).context("Failed to read from stdin");
    };
    std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {path}"))
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    if let Some(path) = path {
        return std::fs::write(path, content)
            .with_context(|| format!("Failed to write file: {path}"));
    }
    io::stdout()
        .lock()
        .write_all(content.as_bytes())
        .context("Failed to write to stdout")
}
