//! Shared utilities for CLI commands

use serde_json::{Map, Value};
use tabled::{Table, settings::Style};

/// Truncate a string with ellipsis if it exceeds max length
pub fn truncate_with_ellipsis(s: &str, max: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max - 3).collect();
        format!("{}...", truncated)
    }
}

/// Format a list of names for display
pub fn format_list(items: &[String]) -> String {
    if items.is_empty() {
        "-".to_string()
    } else {
        items.join(", ")
    }
}

/// Format an entry template as `field: type` pairs
pub fn format_template(template: &Map<String, Value>) -> String {
    if template.is_empty() {
        return "-".to_string();
    }
    template
        .iter()
        .map(|(field, tag)| match tag {
            Value::String(tag) => format!("{}: {}", field, tag),
            other => format!("{}: {}", field, other),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Apply consistent table styling
pub fn apply_table_style(table: &mut Table) {
    table.with(Style::rounded());
}
