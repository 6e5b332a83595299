use std::fmt;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::codec;
use crate::combinations::subset_count;
use crate::consensus::{self, Resolution, TieBreak};
use crate::domain::Share;
use crate::input;

/// A share as reported (big integers rendered in decimal)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareEntry {
    pub x: String,
    pub y: String,
}

impl From<&Share> for ShareEntry {
    fn from(share: &Share) -> Self {
        Self {
            x: share.x.to_string(),
            y: share.y.to_string(),
        }
    }
}

/// One row of the frequency table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TallyEntry {
    pub secret: String,
    pub occurrences: usize,
}

/// Result of recovering the secret from one share file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Total number of shares (n)
    pub share_count: usize,
    /// Reconstruction threshold (k)
    pub threshold: usize,
    /// Polynomial degree (k - 1)
    pub degree: usize,
    /// Decoded shares in enumeration order
    pub shares: Vec<ShareEntry>,
    /// Number of k-subsets evaluated
    pub subsets_evaluated: usize,
    /// Candidate secrets, most frequent first
    pub tally: Vec<TallyEntry>,
    /// Shares inconsistent with the secret
    pub wrong_shares: Vec<ShareEntry>,
    pub secret: String,
}

impl Report {
    fn new(share_count: usize, threshold: usize, shares: &[Share], resolution: &Resolution) -> Self {
        Self {
            share_count,
            threshold,
            degree: threshold - 1,
            shares: shares.iter().map(ShareEntry::from).collect(),
            subsets_evaluated: resolution.tally.total_occurrences(),
            tally: resolution
                .tally
                .ranked()
                .into_iter()
                .map(|c| TallyEntry {
                    secret: c.secret.to_string(),
                    occurrences: c.occurrences,
                })
                .collect(),
            wrong_shares: resolution.wrong.iter().map(ShareEntry::from).collect(),
            secret: resolution.secret.to_string(),
        }
    }
}

/// Recover the secret from a JSON share file
///
/// Returns a report with the secret, the wrong shares and the frequency table.
///
/// # Errors
/// Returns an error if the share file is invalid, a share value fails to
/// decode, or the consensus cannot be reached
pub fn recover(json: &str, tie_break: TieBreak) -> Result<Report> {
    let file = input::parse_share_file(json)?;
    let n = *file.config.share_count();
    let k = *file.config.threshold();

    let mut shares = Vec::with_capacity(file.shares.len());
    for encoded in file.shares {
        let index = encoded.index.clone();
        let share = encoded
            .decode()
            .with_context(|| format!("Failed to decode share {index}"))?;
        debug!(%share, "decoded share");
        shares.push(share);
    }

    info!(n, k, subsets = %subset_count(n, k), "recovering secret");

    let resolution =
        consensus::resolve_with(&shares, k, tie_break).context("Failed to recover secret")?;

    Ok(Report::new(n, k, &shares, &resolution))
}

/// Console rendering of a report, listing at most `top` candidates
struct ReportDisplay<'a> {
    report: &'a Report,
    top: usize,
}

impl fmt::Display for ReportDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.report;
        let rule = "=".repeat(50);

        writeln!(f, "Configuration:")?;
        writeln!(f, "  Total shares (n): {}", report.share_count)?;
        writeln!(f, "  Threshold (k): {}", report.threshold)?;
        writeln!(f, "  Polynomial degree: {}", report.degree)?;

        writeln!(f, "\nDecoded shares:")?;
        for (i, share) in report.shares.iter().enumerate() {
            writeln!(f, "  {:>2}. ({}, {})", i + 1, share.x, share.y)?;
        }

        writeln!(
            f,
            "\nSecret frequency over {} subsets:",
            report.subsets_evaluated
        )?;
        for entry in report.tally.iter().take(self.top) {
            writeln!(f, "  {} appears {} times", entry.secret, entry.occurrences)?;
        }

        if report.wrong_shares.is_empty() {
            writeln!(f, "\nAll shares are consistent")?;
        } else {
            writeln!(f, "\nWrong shares:")?;
            for share in &report.wrong_shares {
                writeln!(f, "  x={}, y={}", share.x, share.y)?;
            }
        }

        writeln!(f, "\n{rule}")?;
        writeln!(f, "SECRET: {}", report.secret)?;
        write!(f, "{rule}")
    }
}

/// Render a report for the console, listing at most `top` candidates
#[must_use]
pub fn render_report(report: &Report, top: usize) -> String {
    ReportDisplay { report, top }.to_string()
}

/// Decode a digit string in `base` to its decimal value
///
/// # Errors
/// Returns an error if `base` is unsupported or `value` has an invalid digit
pub fn decode_value(value: &str, base: u32) -> Result<String> {
    let decoded = codec::decode(value, base)
        .with_context(|| format!("Failed to decode '{value}' in base {base}"))?;
    Ok(decoded.to_string())
}

/// Encode a decimal integer as digits in `base`
///
/// # Errors
/// Returns an error if `value` is not a non-negative decimal integer or
/// `base` is unsupported
pub fn encode_value(value: &str, base: u32) -> Result<String> {
    let parsed = codec::decode(value, 10)
        .with_context(|| format!("'{value}' is not a non-negative decimal integer"))?;
    Ok(codec::encode(&parsed, base)?)
}

/// Recover the secret and serialize the report as JSON
///
/// # Errors
/// Returns an error if recovery fails
pub fn recover_json(json: &str, tie_break: TieBreak) -> Result<String> {
    let report = recover(json, tie_break)?;
    serde_json::to_string_pretty(&report).context("Failed to serialize report")
}
