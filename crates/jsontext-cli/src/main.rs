//! `jsontext` CLI — run Postgres-jsonb-style queries over JSON documents.
//!
//! ## Usage
//!
//! ```sh
//! # Positional access (stdin → stdout)
//! echo '["great wall","lada","trabant"]' | jsontext first
//! echo '["great wall","lada","trabant"]' | jsontext nth 2
//!
//! # From file to file
//! jsontext last -i cars.json -o result.json
//!
//! # Operators: -> (integer position), ->> (string key), #> (path)
//! echo '{"british":["vauxhall","morris"]}' | jsontext query '->>' british
//! jsontext query '#>' '{"bikes":"japanese"}' -i garage.json --pretty
//! ```
//!
//! Results are printed as compact JSON; an empty match prints `[]`.

use std::io::{self, Read};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use jsontext_core::{JsonText, Matcher, Operator, ReturnType};

#[derive(Parser)]
#[command(
    name = "jsontext",
    version,
    about = "Postgres-jsonb-style queries over JSON text"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Input file (reads from stdin if omitted)
    #[arg(short, long, global = true)]
    input: Option<String>,

    /// Output file (writes to stdout if omitted)
    #[arg(short, long, global = true)]
    output: Option<String>,

    /// Pretty-print the result
    #[arg(long, global = true)]
    pretty: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// First element of a top-level array, as {"0": value}
    First,
    /// Last element of a top-level array, as {"N-1": value}
    Last,
    /// Element at INDEX; out of range prints []
    Nth {
        /// 0-based element index
        index: usize,
    },
    /// Evaluate an operator against the document
    Query {
        /// One of ->, ->>, #>
        #[arg(allow_hyphen_values = true)]
        operator: String,
        /// Integer for ->, string for ->>, JSON like {"k":"v"} for #>
        matcher: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let text = read_input(cli.input.as_deref())?;
    let field = JsonText::new(text).with_return_type(ReturnType::Json);

    let rendered = match &cli.command {
        Commands::First => field.first(),
        Commands::Last => field.last(),
        Commands::Nth { index } => field.nth(*index),
        Commands::Query { operator, matcher } => {
            let operator: Operator = operator.parse()?;
            field.query(operator, &build_matcher(operator, matcher))
        }
    }
    .context("query failed")?;

    // ReturnType::Json guarantees a JSON rendering.
    let json = rendered.as_json().unwrap_or("[]");
    let result = if cli.pretty { prettify(json)? } else { json.to_string() };
    write_output(cli.output.as_deref(), &result)
}

/// Shell arguments are always strings; for `->` an argument that parses as an
/// integer is passed as one, anything else stays a string and falls to the
/// engine's strict no-coercion handling (which prints `[]`).
fn build_matcher(operator: Operator, raw: &str) -> Matcher {
    match operator {
        Operator::IndexMatch => match raw.parse::<i64>() {
            Ok(n) => Matcher::Int(n),
            Err(_) => Matcher::Str(raw.to_string()),
        },
        Operator::KeyMatch | Operator::PathMatch => Matcher::Str(raw.to_string()),
    }
}

/// Re-render compact result JSON with indentation. Goes through the engine's
/// own value type so duplicate keys survive pretty-printing.
fn prettify(json: &str) -> Result<String> {
    let value: jsontext_core::Value =
        serde_json::from_str(json).context("result was not valid JSON")?;
    serde_json::to_string_pretty(&value).context("failed to pretty-print result")
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("failed to read file: {path}"))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("failed to write file: {path}"))?;
        }
        None => {
            println!("{content}");
        }
    }
    Ok(())
}
