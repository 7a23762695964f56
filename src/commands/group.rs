//! Newsgroup model and GROUP command

use crate::error::{NntpError, Result};

/// Build GROUP command
pub fn group(newsgroup: &str) -> String {
    format!("GROUP {}", newsgroup)
}

/// Whether posting to a group is allowed, as reported by LIST ACTIVE
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PostingStatus {
    /// `y`: posting permitted
    Permitted,
    /// `m`: postings go to the moderator
    Moderated,
    /// `n` or any flag this client does not recognise
    #[default]
    NotPermitted,
}

impl PostingStatus {
    /// Map a LIST ACTIVE status token; unknown tokens are `NotPermitted`
    pub fn from_flag(flag: &str) -> Self {
        match flag {
            "y" => PostingStatus::Permitted,
            "m" => PostingStatus::Moderated,
            _ => PostingStatus::NotPermitted,
        }
    }
}

/// A newsgroup and its article range
///
/// `count` is the server's estimate from GROUP. LIST does not report a
/// count, so groups produced by LIST carry 0.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Group {
    /// Newsgroup name
    pub name: String,
    /// Lowest article number
    pub low: i64,
    /// Highest article number
    pub high: i64,
    /// Estimated number of articles
    pub count: i64,
    /// Posting status
    pub posting: PostingStatus,
}

/// Parse the message of a 211 GROUP response
///
/// Format: `count low high name`, exactly four single-space separated fields.
pub fn parse_group_response(message: &str) -> Result<Group> {
    let invalid = || NntpError::InvalidGroupResponse(message.to_string());

    let parts: Vec<&str> = message.split(' ').collect();
    let [count, low, high, name] = parts.as_slice() else {
        return Err(invalid());
    };

    Ok(Group {
        name: name.to_string(),
        low: low.parse().map_err(|_| invalid())?,
        high: high.parse().map_err(|_| invalid())?,
        count: count.parse().map_err(|_| invalid())?,
        posting: PostingStatus::default(),
    })
}
