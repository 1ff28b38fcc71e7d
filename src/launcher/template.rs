//! Placeholder substitution for command templates.
//!
//! Both `%1` and `{{filename}}` expand to the triggering path wrapped in
//! double quotes. Backslashes in the final command line are rewritten to
//! forward slashes, including those in the template text itself.

use std::path::Path;

/// Positional placeholder.
pub const PERCENT_PLACEHOLDER: &str = "%1";
/// Named placeholder.
pub const FILENAME_PLACEHOLDER: &str = "{{filename}}";

/// Expand a template for the given path.
pub fn render(template: &str, path: &Path) -> String {
    let quoted = format!("\"{}\"", path.to_string_lossy());

    template
        .replace(PERCENT_PLACEHOLDER, &quoted)
        .replace(FILENAME_PLACEHOLDER, &quoted)
        .replace("\\\\", "/")
        .replace('\\', "/")
}

/// True when a template is unset or contains only whitespace.
pub fn is_blank(template: Option<&str>) -> bool {
    template.is_none_or(|t| t.trim().is_empty())
}
