//! Stable identifiers for checks and violation codes.
//!
//! `check_id` is a dotted namespace. `code` is a short snake_case discriminator.

// Checks
pub const CHECK_IDS_UNIQUE: &str = "ids.unique";
pub const CHECK_REFS_RESOLVE: &str = "refs.resolve";
pub const CHECK_DOCS_LANGUAGE: &str = "docs.language";

// Codes: ids.unique
pub const CODE_DUPLICATE_ID: &str = "duplicate_id";

// Codes: refs.resolve
pub const CODE_BROKEN_FILE_REFERENCE: &str = "broken_file_reference";
pub const CODE_BROKEN_MARKDOWN_REFERENCE: &str = "broken_markdown_reference";
pub const CODE_FILE_ANALYSIS_ERROR: &str = "file_analysis_error";

// Codes: docs.language
pub const CODE_MISSING_ENGLISH_DOCUMENTATION: &str = "missing_english_documentation";

// Tool-level
pub const CHECK_TOOL_RUNTIME: &str = "tool.runtime";
pub const CODE_RUNTIME_ERROR: &str = "runtime_error";
