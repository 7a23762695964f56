//! Article retrieval commands (RFC 3977 §6.2)
//!
//! - ARTICLE - headers and body
//! - HEAD - headers only
//! - BODY - body only
//!
//! The content is not buffered: the caller gets a [`BlockReader`] positioned
//! at the first line and must read it through before the next command.

use super::{NntpSession, Transport};
use crate::codec::BlockReader;
use crate::commands::{self, ArticlePart};
use crate::error::Result;
use tokio::io::{AsyncRead, AsyncWrite};
use tracing::trace;

/// Status of an ARTICLE/HEAD/BODY command plus the content that follows
pub struct ArticleResponse<'a, S> {
    /// Article number (0 when requested by message-id and the server has none)
    pub number: i64,
    /// Rest of the status message, normally the message-id
    pub remainder: String,
    /// Lazy reader over the article content
    pub block: BlockReader<'a, Transport<S>>,
}

impl<S: AsyncRead + AsyncWrite + Unpin> NntpSession<S> {
    async fn retrieve(
        &mut self,
        part: ArticlePart,
        specifier: &str,
    ) -> Result<ArticleResponse<'_, S>> {
        trace!("Fetching {:?} {}", part, specifier);

        let response = self
            .command(&part.command(specifier), part.success_code())
            .await?;
        let (number, remainder) = match commands::parse_article_response(&response.message) {
            Ok(fields) => fields,
            Err(e) => {
                // the content block is still pending on the wire
                self.codec.mark_broken();
                return Err(e);
            }
        };

        Ok(ArticleResponse {
            number,
            remainder,
            block: self.codec.read_block(),
        })
    }

    /// Fetch a full article by number or message-id (expects 220)
    ///
    /// # Errors
    ///
    /// - [`NntpError::UnexpectedResponseCode`](crate::NntpError::UnexpectedResponseCode) - e.g. 423/430 no such article
    /// - [`NntpError::InvalidArticleNumber`](crate::NntpError::InvalidArticleNumber) - status message lacks a number
    pub async fn article(&mut self, specifier: &str) -> Result<ArticleResponse<'_, S>> {
        self.retrieve(ArticlePart::Full, specifier).await
    }

    /// Fetch article headers only (expects 221)
    pub async fn head(&mut self, specifier: &str) -> Result<ArticleResponse<'_, S>> {
        self.retrieve(ArticlePart::Head, specifier).await
    }

    /// Fetch article body only (expects 222)
    pub async fn body(&mut self, specifier: &str) -> Result<ArticleResponse<'_, S>> {
        self.retrieve(ArticlePart::Body, specifier).await
    }
}
