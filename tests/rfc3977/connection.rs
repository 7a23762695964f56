//! RFC 3977 Section 5 - Greeting, QUIT and low-level commands

use crate::common::{recv, reply, serve, session};
use nntp_session::{Expect, NntpError, NntpSession, codes};

#[tokio::test]
async fn test_greeting_becomes_banner() {
    let (session, server) = session(vec![]).await;
    assert_eq!(session.banner(), "news.example.com ready");
    assert!(!session.is_tls());
    assert!(session.cached_capabilities().is_none());
    drop(session);
    server.await.unwrap();
}

#[tokio::test]
async fn test_any_greeting_code_accepted() {
    // 502 means "service permanently unavailable", but it is still a valid greeting
    let (client, server) = serve(vec![reply(&["502 go away"])]);
    let session = NntpSession::connect(client).await.unwrap();
    assert_eq!(session.banner(), "go away");
    server.await.unwrap();
}

#[tokio::test]
async fn test_malformed_greeting() {
    let (client, server) = serve(vec![reply(&["* OK IMAP4rev1 ready"])]);
    let result = NntpSession::connect(client).await;
    assert!(matches!(result, Err(NntpError::MalformedResponse(_))));
    server.await.unwrap();
}

#[tokio::test]
async fn test_greeting_eof() {
    let (client, server) = serve(vec![]);
    let result = NntpSession::connect(client).await;
    assert!(matches!(result, Err(NntpError::ConnectionClosed)));
    server.await.unwrap();
}

#[tokio::test]
async fn test_quit() {
    let (session, server) = session(vec![recv("QUIT"), reply(&["205 bye"])]).await;
    assert_eq!(session.quit().await.unwrap(), "bye");
    server.await.unwrap();
}

#[tokio::test]
async fn test_close_shuts_down_transport() {
    let (session, server) = session(vec![]).await;
    session.close().await.unwrap();
    server.await.unwrap();
}

#[tokio::test]
async fn test_low_level_command_prefix_match() {
    let (mut session, server) = session(vec![
        recv("DATE"),
        reply(&["111 20240101120000"]),
        recv("MODE READER"),
        reply(&["201 no posting"]),
        recv("HELP"),
        reply(&["100 help follows"]),
    ])
    .await;

    let date = session.command("DATE", 111).await.unwrap();
    assert_eq!(date.message, "20240101120000");

    // any 2xx
    let mode = session.command("MODE READER", 2).await.unwrap();
    assert_eq!(mode.code, codes::READY_NO_POSTING);

    let err = session.command("HELP", 22).await.unwrap_err();
    assert!(matches!(
        err,
        NntpError::UnexpectedResponseCode { got: 100, expected: Expect::Family(22), .. }
    ));
    server.await.unwrap();
}

#[tokio::test]
async fn test_low_level_command_block() {
    let (mut session, server) = session(vec![
        recv("HELP"),
        reply(&["100 help text follows", "  ARTICLE", "..hidden", "."]),
        recv("DATE"),
        reply(&["111 20240101120000"]),
    ])
    .await;

    let (response, block) = session.command_block("HELP", Expect::Any).await.unwrap();
    assert_eq!(response.code, 100);
    assert_eq!(block.read_lines().await.unwrap(), ["  ARTICLE", ".hidden"]);

    session.command("DATE", 111).await.unwrap();
    assert!(!session.is_broken());
    server.await.unwrap();
}
