//! `jtree` CLI: parse, query and canonicalize JSON from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Canonicalize JSON (stdin → stdout): sorted keys, no whitespace
//! echo '{"b": 1, "a": [1.5, "x"]}' | jtree format
//!
//! # File to file, rejecting trailing garbage after the document
//! jtree format --strict -i data.json -o data.canonical.json
//!
//! # Pretty-print instead of the canonical form
//! jtree format --pretty -i data.json
//!
//! # Print the node at a path
//! jtree get '$.3.two.two-one' -i data.json
//!
//! # Run the built-in tree-building demonstration
//! jtree demo
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use json_tree::{append, parse, ParseOptions, Value};
use std::io::{self, Read};

#[derive(Parser)]
#[command(
    name = "jtree",
    version,
    about = "Parse, query and canonicalize JSON documents"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse JSON and print its canonical serialization
    Format {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Reject non-whitespace content after the top-level value
        #[arg(long)]
        strict: bool,
        /// Pretty-print instead of emitting the canonical form
        #[arg(long)]
        pretty: bool,
    },
    /// Print the canonical serialization of the node at a `$.a.0.b` path
    Get {
        /// Path to look up, e.g. `$.users.0.name`
        path: String,
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Reject non-whitespace content after the top-level value
        #[arg(long)]
        strict: bool,
    },
    /// Build, mutate and print sample trees
    Demo,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Format {
            input,
            output,
            strict,
            pretty,
        } => {
            let text = read_input(input.as_deref())?;
            let value = parse_input(&text, strict)?;
            let rendered = if pretty {
                serde_json::to_string_pretty(&value).context("Failed to pretty-print JSON")?
            } else {
                value.to_string()
            };
            write_output(output.as_deref(), &rendered)?;
        }
        Commands::Get {
            path,
            input,
            strict,
        } => {
            let text = read_input(input.as_deref())?;
            let value = parse_input(&text, strict)?;
            let node = value
                .pointer(&path)
                .with_context(|| format!("Invalid path: {}", path))?
                .with_context(|| format!("No value at path: {}", path))?;
            write_output(None, &node.to_string())?;
        }
        Commands::Demo => run_demo()?,
    }

    Ok(())
}

/// The tree-building walkthrough: vivification, auto-extension, insert-if-absent
/// appends, reassignment, then parsing a document and reading it by index.
fn run_demo() -> Result<()> {
    let mut node = Value::Null;
    node.at_key("a")?.at_key("b")?.at_key("c")?.assign(Value::Array(vec![]));
    node.at_key("a")?.at_key("c")?.at(1)?.assign(1);
    node.at_key("xx")?.append_pair("yy", "zz")?;
    append!(node.at_key("zz")?, 1, 1.1, true, (), "aaa")?;
    println!("{}", node);

    let mut simple = Value::Null;
    append!(simple, 1, 2, 3, 4, 5)?;
    println!("{}", simple);
    simple.assign(114);
    println!("{}", simple);
    simple.assign(114.514);
    println!("{}", simple);
    simple.assign("data");
    println!("{}", simple);

    println!();

    let mut doc = parse(DEMO_DOCUMENT).context("Failed to parse demo document")?;
    append!(doc.at(6)?, "1", "2", "3")?;
    for i in 0..9 {
        println!("$.{} = {}", i, doc.at(i)?);
    }
    println!(
        "$.3.two.four = {}",
        doc.at(3)?.at_key("two")?.at_key("four")?
    );
    println!(
        "$.3.two.two-one = {}",
        doc.at(3)?.at_key("two")?.at_key("two-one")?
    );
    println!("$.100 = {}", doc.at(100)?);
    Ok(())
}

const DEMO_DOCUMENT: &str = r#"
    [
        13,
        29,
        3.33,
        {
            "one": true,
            "two": {
                "two-one": 1.3e9,
                "two-two": null,
                "two-three": "hello\t\"cpp\""
            },
            "three": 999
        },
        true,
        false,
        [1, 2, 3],
        "foo",
        "baz"
    ]
"#;

fn parse_input(text: &str, strict: bool) -> Result<Value> {
    let options = ParseOptions::default().reject_trailing(strict);
    json_tree::parse_with(text, options).context("Failed to parse JSON input")
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
