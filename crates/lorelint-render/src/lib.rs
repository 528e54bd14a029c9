//! Rendering utilities for CI surfaces (Markdown, condensed JSON summary).

#![forbid(unsafe_code)]

mod markdown;
mod model;
mod summary;

pub use markdown::render_markdown;
pub use model::{
    RenderableData, RenderableReport, RenderableSeverity, RenderableVerdictStatus,
    RenderableViolation,
};
pub use summary::render_summary;
