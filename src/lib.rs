// Reconstruction engine and the thin I/O shell used by the CLI
// The engine (codec, combinations, interpolate, consensus) has no I/O

pub mod codec;
pub mod combinations;
pub mod commands;
pub mod consensus;
pub mod domain;
pub mod error;
pub mod input;
pub mod interpolate;

#[cfg(feature = "cli")]
pub mod cli;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use consensus::{Resolution, TieBreak, resolve, resolve_with};
pub use domain::{EncodedShare, Share, ThresholdConfig};
pub use error::ResolveError;
