//! Reads text from stdin and prints its statistics as JSON.
//!
//! `echo "I love sunny days." | cargo run --bin analyze-stdin`

use std::io::{self, Read};

use anyhow::Context;

fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .context("stdin is not valid UTF-8 text")?;

    let result = text_stats_analyzer::analyze_text(&text)?;
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
