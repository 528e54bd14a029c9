//! Use case orchestration for lorelint.
//!
//! This crate provides the application layer: use cases that coordinate the
//! domain, repo, and render layers. It is intentionally thin and delegates
//! heavy lifting to the appropriate layers.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod check;
mod render;

pub use check::{run_check, verdict_exit_code, CheckInput, CheckOutput};
pub use render::{
    parse_report_json, runtime_error_report, serialize_report, to_renderable, write_report,
    write_text,
};
