// src/naming/mod.rs

//! Turns free-text labels into safe filesystem tokens.
//!
//! Labels come from language models or from heuristics and may carry prompt
//! echoes, punctuation, or nothing at all. Everything that ends up as a path
//! component passes through [`sanitize`] first.

mod sanitize;

pub use sanitize::sanitize;
