//! OVER command (RFC 3977 §8.3)
//!
//! Overview lines are handed back raw; field meaning depends on the
//! server's LIST OVERVIEW.FMT answer.

/// Build OVER command for a range, article number or message-id
pub fn over(specifier: &str) -> String {
    format!("OVER {}", specifier)
}
