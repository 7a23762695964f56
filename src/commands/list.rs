//! LIST command and LIST ACTIVE parsing

use super::group::{Group, PostingStatus};
use tracing::warn;

/// Build LIST command
///
/// An empty `subcommand` gives the bare `LIST`, which servers treat as
/// `LIST ACTIVE`.
pub fn list(subcommand: &str) -> String {
    if subcommand.is_empty() {
        "LIST".to_string()
    } else {
        format!("LIST {}", subcommand)
    }
}

/// Build LIST OVERVIEW.FMT command (RFC 3977 §8.4)
pub fn list_overview_fmt() -> &'static str {
    "LIST OVERVIEW.FMT"
}

/// Parse one LIST ACTIVE line
///
/// Format: `name high low status`, exactly four single-space separated
/// fields. Returns `None` when the line does not fit that shape or the
/// high/low marks are not integers.
pub fn parse_list_line(line: &str) -> Option<Group> {
    let parts: Vec<&str> = line.split(' ').collect();
    let [name, high, low, flag] = parts.as_slice() else {
        return None;
    };

    Some(Group {
        name: name.to_string(),
        high: high.parse().ok()?,
        low: low.parse().ok()?,
        count: 0,
        posting: PostingStatus::from_flag(flag),
    })
}

/// Parse a LIST ACTIVE block into groups
///
/// Lines that fail [`parse_list_line`] are skipped with a warning rather
/// than failing the whole listing; servers in the wild deviate from the
/// format in minor ways.
pub fn parse_list_response<S: AsRef<str>>(lines: &[S]) -> Vec<Group> {
    let mut groups = Vec::with_capacity(lines.len());
    for line in lines {
        let line = line.as_ref();
        match parse_list_line(line) {
            Some(group) => groups.push(group),
            None => warn!("Skipping malformed LIST line: {}", line),
        }
    }
    groups
}
