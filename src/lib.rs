#![doc = include_str!("../README.md")]

mod capabilities;
/// CRLF line framing and dot-terminated blocks
pub mod codec;
/// NNTP command builders and response field grammars
pub mod commands;
mod config;
mod error;
mod response;
mod session;

pub use capabilities::Capabilities;
pub use codec::{BlockReader, BlockWriter, LineCodec};
pub use commands::{ArticlePart, Group, PostingStatus};
pub use config::ServerConfig;
pub use error::{NntpError, Result};
pub use response::{Expect, NntpResponse, codes};
pub use session::{ArticleResponse, NntpSession, Transport};
