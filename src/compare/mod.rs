//! Comparison engine
//!
//! This module implements the matching and classification pipeline:
//!
//! - `matcher`: the sequence-matcher contract and the default Myers
//!   implementation over opaque comparison keys
//! - `policy`: the three whitespace-sensitivity comparison policies
//! - `engine`: the public entry points gluing tokens, keys, runs and
//!   fragments together
//!
//! The pipeline is pure and deterministic: identical inputs under the same
//! policy always produce an identical fragment sequence.

pub mod engine;
pub mod matcher;
pub mod policy;
