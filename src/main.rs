use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use secret_quorum::TieBreak;
use secret_quorum::cli::{Cli, Commands};
use secret_quorum::commands::{decode_value, encode_value, recover, render_report};

/// Log to stderr; RUST_LOG wins over --verbose
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Read a share file from stdin when it is piped in
fn read_stdin() -> Result<String> {
    if atty::is(atty::Stream::Stdin) {
        bail!("No share files given and stdin is a terminal");
    }

    let mut json = String::new();
    io::stdin()
        .lock()
        .read_to_string(&mut json)
        .context("Failed to read share file from stdin")?;
    Ok(json)
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn print_report(json: &str, tie_break: TieBreak, top: usize, as_json: bool) -> Result<()> {
    let report = recover(json, tie_break)?;
    if as_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", render_report(&report, top));
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Recover {
            files,
            tie_break,
            top,
            json,
        } => {
            let tie_break = TieBreak::from(tie_break);

            if files.is_empty() {
                let input = read_stdin()?;
                return print_report(&input, tie_break, top, json);
            }

            // Report every file before failing
            let mut failures = 0;
            for path in &files {
                if !json {
                    println!("\n== {} ==", path.display());
                }
                let outcome =
                    read_file(path).and_then(|input| print_report(&input, tie_break, top, json));
                if let Err(e) = outcome {
                    eprintln!("Error processing {}: {e:#}", path.display());
                    failures += 1;
                }
            }

            if failures > 0 {
                bail!("{failures} of {} share files failed", files.len());
            }
        }
        Commands::Decode { value, base } => {
            println!("{}", decode_value(&value, base)?);
        }
        Commands::Encode { value, base } => {
            println!("{}", encode_value(&value, base)?);
        }
    }

    Ok(())
}
