//! `dynjson` CLI: navigate, format, shuffle and validate JSON documents.
//!
//! ## Usage
//!
//! ```sh
//! # Validate a payload against a rule set
//! dynjson check -i payload.json --rules rules.json
//!
//! # Read one node by dot path (numeric segments index arrays)
//! echo '{"items":[{"name":"a"}]}' | dynjson get items.0.name
//!
//! # Re-encode, compact or indented
//! dynjson fmt -i data.json -o out/data.json --pretty
//!
//! # Shuffle an array document reproducibly
//! dynjson shuffle -i list.json --seed 42
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dynjson_core::{io as docio, RuleSet, Value};
use rand_xoshiro::rand_core::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;
use std::io::{self, Read};

#[derive(Parser)]
#[command(
    name = "dynjson",
    version,
    about = "Navigate, format and validate JSON documents"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate an object document against a JSON rule set
    Check {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Rule set file: {"rules":[{"rule":"keys_present","keys":["name"]}]}
        #[arg(long)]
        rules: String,
    },
    /// Print the node at a dot-separated path
    Get {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Path such as `items.0.name`; empty for the root
        #[arg(default_value = "")]
        path: String,
    },
    /// Decode and re-encode a document
    Fmt {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted); parent directories are created
        #[arg(short, long)]
        output: Option<String>,
        /// Indent the output
        #[arg(long)]
        pretty: bool,
    },
    /// Shuffle an array document with a seeded generator
    Shuffle {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Seed for the shuffle
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check { input, rules } => {
            let doc = dynjson_core::decode(read_input(input.as_deref())?)
                .context("Failed to decode input document")?;
            let config = std::fs::read_to_string(&rules)
                .with_context(|| format!("Failed to read rules file: {}", rules))?;
            let rule_set = RuleSet::from_json(&config)
                .with_context(|| format!("Invalid rules file: {}", rules))?;
            rule_set.check(&doc).context("Validation failed")?;
            println!("ok");
        }
        Commands::Get { input, path } => {
            let doc = dynjson_core::decode(read_input(input.as_deref())?)
                .context("Failed to decode input document")?;
            println!("{}", navigate(&doc, &path).to_text());
        }
        Commands::Fmt {
            input,
            output,
            pretty,
        } => {
            let doc = dynjson_core::decode(read_input(input.as_deref())?)
                .context("Failed to decode input document")?;
            match output {
                Some(path) => docio::save_to_file(&path, &doc, pretty)
                    .with_context(|| format!("Failed to write file: {}", path))?,
                None => println!("{}", render(&doc, pretty)?),
            }
        }
        Commands::Shuffle { input, seed } => {
            let mut doc = dynjson_core::decode_array(read_input(input.as_deref())?)
                .context("Failed to decode input array")?;
            doc.shuffle(&mut Xoshiro256StarStar::seed_from_u64(seed));
            println!("{}", render(&doc, false)?);
        }
    }

    Ok(())
}

/// Walk a dot path. Numeric segments index arrays, everything else looks up an
/// object key. Missing steps read as `null`.
fn navigate<'a>(doc: &'a Value, path: &str) -> &'a Value {
    path.split('.')
        .filter(|seg| !seg.is_empty())
        .fold(doc, |node, seg| match seg.parse::<isize>() {
            Ok(index) if node.is_array() => node.get_at(index),
            _ => node.get(seg),
        })
}

fn render(doc: &Value, pretty: bool) -> Result<String> {
    let text = if pretty {
        dynjson_core::encode_pretty(doc)
    } else {
        dynjson_core::encode(doc)
    };
    text.context("Failed to encode document")
}

fn read_input(path: Option<&str>) -> Result<Vec<u8>> {
    match path {
        Some(path) => std::fs::read(path).with_context(|| format!("Failed to read file: {}", path)),
        None => {
            let mut buf = Vec::new();
            io::stdin()
                .read_to_end(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}
