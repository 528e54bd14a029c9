//! Repository adapters: walk the content tree and load the evaluation model.
//!
//! This crate is allowed to do filesystem IO. Everything it hands to the
//! domain layer is an immutable snapshot; checks never read the disk.

#![forbid(unsafe_code)]

mod load;
mod scan;

pub use load::{build_repo_model, LoadOptions};
pub use scan::{build_ignore_set, scan_tree};
