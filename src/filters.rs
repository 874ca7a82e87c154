use chrono::{Duration, NaiveDate};

/// The project/date-range/user-selection triple driving a hours fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriteria {
    pub project: String,
    pub start: String,
    pub end: String,
    pub users: Vec<String>,
}

impl FilterCriteria {
    pub fn from_query(project: String, range: &str, users: &str) -> Self {
        let (start, end) = split_range(range);
        Self {
            project,
            start,
            end,
            users: parse_users(users),
        }
    }
}

/// Splits a combined date-range control value on `" - "`. The dates are
/// passed through as opaque strings; a value without the separator ends
/// up entirely in `start` with an empty `end`.
pub fn split_range(raw: &str) -> (String, String) {
    let raw = raw.trim();
    match raw.split_once(" - ") {
        Some((start, end)) => (start.to_string(), end.to_string()),
        None => (raw.to_string(), String::new()),
    }
}

/// Parses the comma-joined user ids sent by the page. Empty entries are
/// skipped and each selected user appears once, in first-seen order.
pub fn parse_users(raw: &str) -> Vec<String> {
    let mut users: Vec<String> = Vec::new();
    for id in raw.split(',') {
        let id = id.trim();
        if id.is_empty() || users.iter().any(|seen| seen == id) {
            continue;
        }
        users.push(id.to_string());
    }
    users
}

/// Default range shown on the reporting page: the last 30 days.
pub fn default_range(today: NaiveDate) -> String {
    let start = today - Duration::days(30);
    format!("{start} - {today}")
}
