// src/output/mod.rs

//! Everything the user sees: event messages, tree views, and reports.

mod report;
pub mod sink;
mod tree;

pub use report::{dry_run_listing, execution_summary, plan_preview};
pub use sink::{Reporter, SharedBuffer};
pub use tree::{input_tree, simulated_tree};
