//! RFC 3977 Section 6.2 - ARTICLE, HEAD, BODY

use crate::common::{recv, reply, session};
use nntp_session::{Expect, NntpError};

#[tokio::test]
async fn test_article_streams_unstuffed_content() {
    let (mut session, server) = session(vec![
        recv("ARTICLE <45223423@example.com>"),
        reply(&[
            "220 0 <45223423@example.com>",
            "Subject: dots",
            "",
            "..leading dot",
            "...",
            ".",
        ]),
        recv("DATE"),
        reply(&["111 20240101000000"]),
    ])
    .await;

    let mut article = session.article("<45223423@example.com>").await.unwrap();
    assert_eq!(article.number, 0);
    assert_eq!(article.remainder, "<45223423@example.com>");

    let mut lines = Vec::new();
    while let Some(line) = article.block.next_line().await.unwrap() {
        lines.push(line.to_vec());
    }
    assert_eq!(
        lines,
        [&b"Subject: dots"[..], b"", b".leading dot", b".."]
    );
    drop(article);

    session.command("DATE", 111).await.unwrap();
    assert!(!session.is_broken());
    server.await.unwrap();
}

#[tokio::test]
async fn test_head_by_number() {
    let (mut session, server) = session(vec![
        recv("HEAD 3000234"),
        reply(&[
            "221 3000234 <45223423@example.com>",
            "From: someone@example.com",
            "Subject: hello",
            ".",
        ]),
    ])
    .await;

    let head = session.head("3000234").await.unwrap();
    assert_eq!(head.number, 3000234);
    assert_eq!(head.remainder, "<45223423@example.com>");
    let data = head.block.read_to_end().await.unwrap();
    assert_eq!(data, b"From: someone@example.com\r\nSubject: hello\r\n");
    server.await.unwrap();
}

#[tokio::test]
async fn test_body_requires_222() {
    let (mut session, server) = session(vec![
        recv("BODY 10"),
        // a HEAD answer is not acceptable for BODY
        reply(&["221 10 <id@host>"]),
    ])
    .await;

    match session.body("10").await {
        Err(NntpError::UnexpectedResponseCode { got, expected, .. }) => {
            assert_eq!(got, 221);
            assert_eq!(expected, Expect::Exact(222));
        }
        Err(other) => panic!("unexpected error: {other:?}"),
        Ok(_) => panic!("221 accepted for BODY"),
    }
    server.await.unwrap();
}

#[tokio::test]
async fn test_no_such_article() {
    let (mut session, server) = session(vec![
        recv("ARTICLE <missing@host>"),
        reply(&["430 no article with that message-id"]),
    ])
    .await;

    assert!(matches!(
        session.article("<missing@host>").await,
        Err(NntpError::UnexpectedResponseCode { got: 430, .. })
    ));
    assert!(!session.is_broken());
    server.await.unwrap();
}

#[tokio::test]
async fn test_invalid_article_number() {
    let (mut session, server) = session(vec![
        recv("BODY <id@host>"),
        reply(&["222 <id@host> body follows"]),
    ])
    .await;

    assert!(matches!(
        session.body("<id@host>").await,
        Err(NntpError::InvalidArticleNumber(_))
    ));
    assert!(session.is_broken());
    server.await.unwrap();
}

#[tokio::test]
async fn test_abandoned_body_marks_session_broken() {
    let (mut session, server) = session(vec![
        recv("BODY 1"),
        reply(&["222 1 <id@host>", "first", "second", "."]),
    ])
    .await;

    {
        let mut body = session.body("1").await.unwrap();
        assert_eq!(body.block.next_line().await.unwrap(), Some(&b"first"[..]));
    }
    assert!(session.is_broken());
    server.await.unwrap();
}
