//! Domain types for secret reconstruction
//!
//! This module contains the share model and validated threshold configuration:
//! - [`Share`] - A decoded `(x, y)` point on the secret polynomial
//! - [`EncodedShare`] - A share as loaded, with its value still in digit form
//! - [`Threshold`] - Number of shares needed to determine the polynomial (k >= 1)
//! - [`ShareCount`] - Total number of shares available (n >= 1)
//! - [`ThresholdConfig`] - Validated threshold and share count pair

mod config;
mod share;
mod share_count;
mod threshold;

pub use config::ThresholdConfig;
pub use share::{EncodedShare, Share};
pub use share_count::ShareCount;
pub use threshold::Threshold;
