use std::fs;
use std::io::Read;

use anyhow::{Context, Result};
use clap::Parser;
use gloss_rewrite::{Driver, RawEntry, StandardText, pool};
use serde::Deserialize;

mod cli;

use cli::GlossCli;

#[derive(Debug, Deserialize)]
struct Input {
    entities: Vec<RawEntry>,
}

fn main() -> Result<()> {
    let cli = GlossCli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let raw = match &cli.input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read standard input")?;
            buffer
        }
    };
    let input: Input =
        serde_json::from_str(&raw).context("input is not a valid entity document")?;

    let finals = Driver::new(StandardText)
        .with_round_cap(cli.max_rounds)
        .run(input.entities)?;
    let knowledge = pool::build(finals);

    let output = if cli.pretty {
        serde_json::to_string_pretty(&knowledge)?
    } else {
        serde_json::to_string(&knowledge)?
    };
    println!("{output}");
    Ok(())
}
