//! NNTP capabilities storage and lookup (RFC 3977 Section 5.2)
//!
//! The CAPABILITIES command returns one line per capability: a label
//! followed by optional arguments, separated by spaces or tabs. Lines are
//! stored uppercased and in server order.

use crate::error::{NntpError, Result};

/// Capability lines advertised by an NNTP server
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capabilities {
    lines: Vec<String>,
}

fn label_of(line: &str) -> &str {
    line.split([' ', '\t']).next().unwrap_or(line)
}

impl Capabilities {
    /// Build from the lines of a CAPABILITIES block
    ///
    /// # Example
    /// ```text
    /// VERSION 2
    /// READER
    /// LIST ACTIVE NEWSGROUPS OVERVIEW.FMT
    /// ```
    pub fn parse<S: AsRef<str>>(lines: &[S]) -> Self {
        Self {
            lines: lines.iter().map(|l| l.as_ref().to_uppercase()).collect(),
        }
    }

    /// The full capability line whose label is `label` (case-insensitive)
    #[must_use]
    pub fn get(&self, label: &str) -> Option<&str> {
        self.lines
            .iter()
            .map(String::as_str)
            .find(|line| label_of(line).eq_ignore_ascii_case(label))
    }

    /// Check if a capability is advertised
    #[must_use]
    pub fn has(&self, label: &str) -> bool {
        self.get(label).is_some()
    }

    /// Whether `argument` appears among the tokens after `label`
    ///
    /// "Argument" covers both true arguments and the keyword variants of
    /// compound commands, such as `ACTIVE` in `LIST ACTIVE`.
    ///
    /// # Errors
    ///
    /// [`NntpError::CapabilityNotFound`] if `label` is not advertised.
    pub fn has_argument(&self, label: &str, argument: &str) -> Result<bool> {
        let line = self
            .get(label)
            .ok_or_else(|| NntpError::CapabilityNotFound(label.to_uppercase()))?;
        Ok(line
            .split_whitespace()
            .skip(1)
            .any(|token| token.eq_ignore_ascii_case(argument)))
    }

    /// Capability lines in server order
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of capability lines
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the server advertised nothing
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
