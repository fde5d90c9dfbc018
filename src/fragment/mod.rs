//! Diff output model
//!
//! This module contains the value objects a comparison produces:
//!
//! - `fragment`: a classified region (unchanged / changed / one-sided)
//! - `side`: the symmetric left/right selector for side-generic logic
//! - `builder`: turns matcher runs plus original tokens into fragments
//! - `matrix`: a row-growable 2D fragment container for per-line grouping
//!
//! Fragments are immutable after construction; concatenating either side of
//! a fragment sequence in order reproduces that side's input text exactly.

pub mod builder;
pub mod fragment;
pub mod matrix;
pub mod side;
