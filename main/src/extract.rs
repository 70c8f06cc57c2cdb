use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use common::corpus::extract::extract_corpus;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Walks a MedQuAD XML tree and writes the flat corpus JSON consumed by
/// the server at startup.
#[derive(Parser, Debug)]
#[command(name = "extract")]
struct Args {
    /// Directory containing the MedQuAD XML documents
    #[arg(default_value = "MedQuAD")]
    root: PathBuf,

    /// Where to write the corpus JSON array
    #[arg(short, long, default_value = "data/medquad.json")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .try_init()
        .ok();

    let args = Args::parse();

    let entries = extract_corpus(&args.root);

    if let Some(parent) = args.output.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating output directory {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(&entries)?;
    fs::write(&args.output, json)
        .with_context(|| format!("writing corpus to {}", args.output.display()))?;

    info!(
        entries = entries.len(),
        output = %args.output.display(),
        "Corpus extraction complete"
    );
    Ok(())
}
