//! NNTP command builders and response field grammars
//!
//! Builders return the command line without its terminator; the line codec
//! appends CRLF on transmission. Each command with a structured response has
//! its own parser, since field order differs per command (GROUP and LIST
//! disagree on where low and high go).

pub mod article;
pub mod group;
pub mod list;
pub mod over;
pub mod response;

pub use article::*;
pub use group::*;
pub use list::*;
pub use over::*;
pub use response::*;

// Authentication (RFC 4643)

/// Build AUTHINFO USER command
pub fn authinfo_user(username: &str) -> String {
    format!("AUTHINFO USER {}", username)
}

/// Build AUTHINFO PASS command
pub fn authinfo_pass(password: &str) -> String {
    format!("AUTHINFO PASS {}", password)
}

// Session management

/// Build CAPABILITIES command (RFC 3977 §5.2)
pub fn capabilities() -> &'static str {
    "CAPABILITIES"
}

/// Build STARTTLS command (RFC 4642)
pub fn starttls() -> &'static str {
    "STARTTLS"
}

/// Build QUIT command (RFC 3977 §5.4)
pub fn quit() -> &'static str {
    "QUIT"
}

/// Build POST command (RFC 3977 §6.3.1)
pub fn post() -> &'static str {
    "POST"
}
