//! Formatting utilities used for CLI outputs.

/// Shorten a cell value so the table stays aligned
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}

/// Textual description and ANSI color for a task status code.
/// Used by list outputs and in tests.
pub fn describe_status(code: &str) -> (String, &'static str) {
    match code {
        "pending" => ("Pending".into(), "\x1b[33m"),
        "in_progress" => ("In Progress".into(), "\x1b[36m"),
        "completed" => ("Completed".into(), "\x1b[32m"),
        "cancelled" => ("Cancelled".into(), "\x1b[31m"),
        other => (other.to_string(), "\x1b[0m"),
    }
}

pub fn opt_str(v: &Option<String>) -> String {
    v.clone().unwrap_or_default()
}
