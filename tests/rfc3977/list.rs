//! RFC 3977 Section 7.6 - LIST
//!
//! LIST ACTIVE lines: "group high low status"

use crate::common::{recv, reply, session};
use nntp_session::{NntpError, PostingStatus};

#[tokio::test]
async fn test_list_default_drops_malformed_lines() {
    let (mut session, server) = session(vec![
        recv("LIST"),
        reply(&[
            "215 list of newsgroups follows",
            "alt.test 100 1 y",
            "bad.group notanumber 1 y",
            ".",
        ]),
    ])
    .await;

    let groups = session.list("").await.unwrap();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].name, "alt.test");
    assert_eq!(groups[0].high, 100);
    assert_eq!(groups[0].low, 1);
    assert_eq!(groups[0].posting, PostingStatus::Permitted);
    assert!(!session.is_broken());
    server.await.unwrap();
}

#[tokio::test]
async fn test_list_active_with_wildmat() {
    let (mut session, server) = session(vec![
        recv("LIST ACTIVE comp.*"),
        reply(&[
            "215 list follows",
            "comp.lang.rust 12345 1000 y",
            "comp.moderated 10 2 m",
            "comp.readonly 5 1 n",
            ".",
        ]),
    ])
    .await;

    let groups = session.list("ACTIVE comp.*").await.unwrap();
    let postings: Vec<_> = groups.iter().map(|g| g.posting).collect();
    assert_eq!(
        postings,
        [
            PostingStatus::Permitted,
            PostingStatus::Moderated,
            PostingStatus::NotPermitted
        ]
    );
    assert!(groups.iter().all(|g| g.count == 0));
    server.await.unwrap();
}

#[tokio::test]
async fn test_list_empty() {
    let (mut session, server) =
        session(vec![recv("LIST"), reply(&["215 nothing here", "."])]).await;
    assert!(session.list("").await.unwrap().is_empty());
    server.await.unwrap();
}

#[tokio::test]
async fn test_list_rejected() {
    let (mut session, server) = session(vec![
        recv("LIST DISTRIB.PATS"),
        reply(&["503 data item not stored"]),
    ])
    .await;

    let err = session.list("DISTRIB.PATS").await.unwrap_err();
    assert!(matches!(err, NntpError::UnexpectedResponseCode { got: 503, .. }));
    server.await.unwrap();
}

#[tokio::test]
async fn test_list_truncated_block() {
    // server hangs up mid-listing
    let (mut session, server) = session(vec![
        recv("LIST"),
        reply(&["215 list follows", "alt.test 100 1 y"]),
    ])
    .await;

    let err = session.list("").await.unwrap_err();
    assert!(err.is_transport());
    assert!(session.is_broken());
    server.await.unwrap();
}
