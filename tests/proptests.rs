//! Property-based tests for secret-quorum
//!
//! This test suite uses quickcheck to verify correctness across random inputs,
//! including random values, bases, polynomials and corrupted shares.
//!
//! Run with: cargo test --test proptests

#[path = "proptests/codec.rs"]
mod codec;

#[path = "proptests/consensus.rs"]
mod consensus;
