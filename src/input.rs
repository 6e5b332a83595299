//! Share file loading
//!
//! A share file is a JSON object with a `keys` block carrying the share count
//! `n` and threshold `k`, and one entry per share keyed by its decimal index:
//!
//! ```json
//! {
//!     "keys": { "n": 4, "k": 3 },
//!     "1": { "base": "10", "value": "4" },
//!     "2": { "base": "2", "value": "111" },
//!     "3": { "base": "10", "value": "12" },
//!     "6": { "base": "4", "value": "213" }
//! }
//! ```
//!
//! `base` may be a JSON string or number. Loading validates the document's
//! shape and the threshold configuration; share values stay encoded until
//! they reach the decoder.

use std::collections::{BTreeMap, HashSet};
use std::str::FromStr;

use anyhow::{Context, Result, bail};
use num_bigint::BigInt;
use serde::Deserialize;

use crate::domain::{EncodedShare, ThresholdConfig};

#[derive(Debug, Deserialize)]
struct RawShareFile {
    keys: RawKeys,
    #[serde(flatten)]
    shares: BTreeMap<String, RawShare>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawKeys {
    n: usize,
    k: usize,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawShare {
    base: RawBase,
    value: String,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawBase {
    Number(u32),
    Text(String),
}

impl RawBase {
    fn radix(&self) -> Result<u32> {
        match self {
            Self::Number(radix) => Ok(*radix),
            Self::Text(text) => text
                .trim()
                .parse()
                .with_context(|| format!("'{text}' is not a valid base")),
        }
    }
}

/// A loaded share file: threshold configuration plus encoded shares
///
/// Shares are ordered by ascending index, which fixes the order in which
/// subsets are enumerated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareFile {
    pub config: ThresholdConfig,
    pub shares: Vec<EncodedShare>,
}

/// Parses and validates a share file
///
/// # Errors
/// Returns an error if the document is not valid JSON of the expected shape,
/// a share key is not an integer, two keys name the same index, `n` does not
/// match the number of listed shares, or `k` is not within 1..=n
///
/// # Examples
///
/// ```rust
/// use secret_quorum::input::parse_share_file;
///
/// let file = parse_share_file(r#"{
///     "keys": { "n": 2, "k": 2 },
///     "1": { "base": "10", "value": "5" },
///     "2": { "base": 16, "value": "a" }
/// }"#).unwrap();
///
/// assert_eq!(*file.config.threshold(), 2);
/// assert_eq!(file.shares.len(), 2);
/// assert_eq!(file.shares[1].radix, 16);
/// ```
pub fn parse_share_file(json: &str) -> Result<ShareFile> {
    let raw: RawShareFile = serde_json::from_str(json).context("Malformed share file")?;

    let config = ThresholdConfig::from_raw(raw.keys.k, raw.keys.n)
        .context("Invalid keys block")?;

    if raw.shares.len() != raw.keys.n {
        bail!(
            "Share file declares n = {} but lists {} shares",
            raw.keys.n,
            raw.shares.len()
        );
    }

    let mut seen = HashSet::with_capacity(raw.shares.len());
    let mut shares = Vec::with_capacity(raw.shares.len());

    for (key, share) in raw.shares {
        let index = BigInt::from_str(key.trim())
            .with_context(|| format!("Share key '{key}' is not an integer index"))?;

        if !seen.insert(index.clone()) {
            bail!("Share index {index} appears more than once");
        }

        let radix = share
            .base
            .radix()
            .with_context(|| format!("Invalid base for share {key}"))?;

        shares.push(EncodedShare::new(index, radix, share.value));
    }

    shares.sort_by(|a, b| a.index.cmp(&b.index));

    Ok(ShareFile { config, shares })
}
