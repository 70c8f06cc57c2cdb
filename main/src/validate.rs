use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use serde_json::Value;

/// Checks that a corpus file is a valid JSON array and that a sample of
/// entries carries the three required string fields.
#[derive(Parser, Debug)]
#[command(name = "validate")]
struct Args {
    /// Corpus file to check
    #[arg(default_value = "data/medquad.json")]
    path: PathBuf,
}

const SAMPLE_SIZE: usize = 100;
const REQUIRED_FIELDS: [&str; 3] = ["focus", "question", "answer"];

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let raw = fs::read_to_string(&args.path)
        .with_context(|| format!("reading {}", args.path.display()))?;
    let entries: Vec<Value> =
        serde_json::from_str(&raw).context("corpus file is not a valid JSON array")?;

    println!("Corpus is valid JSON with {} entries.", entries.len());

    let mut missing = 0usize;
    for (index, entry) in entries.iter().take(SAMPLE_SIZE).enumerate() {
        for field in REQUIRED_FIELDS {
            if entry.get(field).and_then(Value::as_str).is_none() {
                missing += 1;
                println!("Entry {index} is missing string field: {field}");
            }
        }
    }

    if missing == 0 {
        println!("All required fields are present in the sampled entries.");
    } else {
        println!("{missing} missing required fields in the first {SAMPLE_SIZE} entries.");
    }
    Ok(())
}
