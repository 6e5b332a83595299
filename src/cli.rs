use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::codec::{MAX_RADIX, MIN_RADIX};
use crate::consensus::TieBreak;

/// Validates that a base is within the supported 2..=16 range
fn validate_base(s: &str) -> Result<u32, String> {
    let value: u32 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;

    if !(MIN_RADIX..=MAX_RADIX).contains(&value) {
        return Err(format!(
            "base must be between {MIN_RADIX} and {MAX_RADIX} (got {value})"
        ));
    }
    Ok(value)
}

/// Tie-break policy as accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TieBreakArg {
    /// Fail when several secrets share the highest count
    Reject,
    /// Keep the secret produced by the earliest subset
    First,
}

impl From<TieBreakArg> for TieBreak {
    fn from(arg: TieBreakArg) -> Self {
        match arg {
            TieBreakArg::Reject => TieBreak::Reject,
            TieBreakArg::First => TieBreak::FirstEnumerated,
        }
    }
}

#[derive(Parser)]
#[command(name = "secret-quorum")]
#[command(about = "Recover a polynomial secret from shares and flag the corrupted ones")]
pub struct Cli {
    /// Log debug events to stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Recover the secret from one or more share files (stdin when none given)
    Recover {
        /// JSON share files
        files: Vec<PathBuf>,

        /// What to do when several secrets share the highest count
        #[arg(long, value_enum, default_value_t = TieBreakArg::First)]
        tie_break: TieBreakArg,

        /// Number of candidate secrets to list
        #[arg(long, default_value_t = 5)]
        top: usize,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Decode a value written in the given base
    Decode {
        value: String,

        /// Base of the value (2-16)
        #[arg(short, long, value_parser = validate_base)]
        base: u32,
    },
    /// Encode a decimal value in the given base
    Encode {
        value: String,

        /// Target base (2-16)
        #[arg(short, long, value_parser = validate_base)]
        base: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_base() {
        assert_eq!(validate_base("16").unwrap(), 16);
        assert!(validate_base("1").is_err());
        assert!(validate_base("17").is_err());
        assert!(validate_base("hex").is_err());
    }

    #[test]
    fn test_parse_recover_defaults() {
        let cli = Cli::try_parse_from(["secret-quorum", "recover", "a.json", "b.json"]).unwrap();
        match cli.command {
            Commands::Recover {
                files,
                tie_break,
                top,
                json,
            } => {
                assert_eq!(files.len(), 2);
                assert_eq!(tie_break, TieBreakArg::First);
                assert_eq!(top, 5);
                assert!(!json);
            }
            _ => panic!("expected recover"),
        }
    }

    #[test]
    fn test_parse_tie_break_reject() {
        let cli =
            Cli::try_parse_from(["secret-quorum", "recover", "--tie-break", "reject"]).unwrap();
        let Commands::Recover { tie_break, .. } = cli.command else {
            panic!("expected recover");
        };
        assert_eq!(TieBreak::from(tie_break), TieBreak::Reject);
    }

    #[test]
    fn test_parse_decode_rejects_base() {
        assert!(Cli::try_parse_from(["secret-quorum", "decode", "101", "--base", "20"]).is_err());
    }
}
