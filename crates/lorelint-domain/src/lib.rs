//! Pure rule evaluation (no IO).
//!
//! Input: a repository model constructed elsewhere.
//! Output: violations + verdict + summary data.

#![forbid(unsafe_code)]

pub mod areas;
pub mod model;
pub mod policy;
pub mod report;
pub mod ruleset;

mod engine;
pub mod checks;

#[cfg(test)]
mod test_support;

pub use engine::evaluate;
