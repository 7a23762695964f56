//! RFC 3977 Section 6.1.1 - GROUP
//!
//! Response: "211 number low high group"

use crate::common::{recv, reply, session};
use nntp_session::{Expect, NntpError, PostingStatus};

#[tokio::test]
async fn test_group_selects() {
    let (mut session, server) =
        session(vec![recv("GROUP alt.test"), reply(&["211 50 1 50 alt.test"])]).await;

    let group = session.group("alt.test").await.unwrap();
    assert_eq!(group.count, 50);
    assert_eq!(group.low, 1);
    assert_eq!(group.high, 50);
    assert_eq!(group.name, "alt.test");
    assert_eq!(group.posting, PostingStatus::NotPermitted);
    server.await.unwrap();
}

#[tokio::test]
async fn test_group_three_fields_is_parse_error() {
    let (mut session, server) =
        session(vec![recv("GROUP alt.test"), reply(&["211 1 2 3"])]).await;

    let err = session.group("alt.test").await.unwrap_err();
    assert!(matches!(err, NntpError::InvalidGroupResponse(msg) if msg == "1 2 3"));
    // a field grammar failure leaves the stream intact
    assert!(!session.is_broken());
    server.await.unwrap();
}

#[tokio::test]
async fn test_group_non_numeric_count() {
    let (mut session, server) =
        session(vec![recv("GROUP alt.test"), reply(&["211 lots 1 50 alt.test"])]).await;

    assert!(matches!(
        session.group("alt.test").await,
        Err(NntpError::InvalidGroupResponse(_))
    ));
    server.await.unwrap();
}

#[tokio::test]
async fn test_no_such_group() {
    let (mut session, server) = session(vec![
        recv("GROUP no.such"),
        reply(&["411 no such newsgroup"]),
        recv("GROUP alt.test"),
        reply(&["211 0 1 0 alt.test"]),
    ])
    .await;

    match session.group("no.such").await {
        Err(NntpError::UnexpectedResponseCode {
            got,
            expected,
            message,
        }) => {
            assert_eq!(got, 411);
            assert_eq!(expected, Expect::Exact(211));
            assert_eq!(message, "no such newsgroup");
        }
        other => panic!("unexpected result: {other:?}"),
    }

    // session remains usable after a rejected command
    let group = session.group("alt.test").await.unwrap();
    assert_eq!(group.count, 0);
    server.await.unwrap();
}
