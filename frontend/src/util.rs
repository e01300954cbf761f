use chrono::{DateTime, Local, Utc};

pub fn format_date(dt: &DateTime<Utc>) -> String {
    dt.with_timezone(&Local).format("%H:%M, %d %b, %Y").to_string()
}

pub fn format_optional_date(dt: Option<&DateTime<Utc>>) -> String {
    dt.map(format_date).unwrap_or_else(|| "-".to_string())
}

/// Human readable run time, e.g. `2m 30s`.
pub fn format_duration(secs: i64) -> String {
    let secs = secs.max(0);
    let (h, m, s) = (secs / 3600, (secs % 3600) / 60, secs % 60);
    if h > 0 {
        format!("{}h {}m {}s", h, m, s)
    } else if m > 0 {
        format!("{}m {}s", m, s)
    } else {
        format!("{}s", s)
    }
}

/// Comma separated tag input, trimmed, empties dropped.
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Tailwind badge classes for a status.
pub fn status_badge_class(status: expboard_core::ExperimentStatus) -> &'static str {
    if status.is_running() {
        "bg-blue-500/10 text-blue-400 border-blue-500/20"
    } else {
        match status {
            expboard_core::ExperimentStatus::Succeeded => {
                "bg-green-500/10 text-green-400 border-green-500/20"
            }
            expboard_core::ExperimentStatus::Failed
            | expboard_core::ExperimentStatus::Unschedulable => {
                "bg-red-500/10 text-red-400 border-red-500/20"
            }
            expboard_core::ExperimentStatus::Warning => {
                "bg-yellow-500/10 text-yellow-400 border-yellow-500/20"
            }
            _ => "bg-slate-800 text-slate-400 border-slate-700",
        }
    }
}
