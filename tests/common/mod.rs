//! Scripted in-memory NNTP server for session tests
//!
//! The server runs as a task on the other end of a `tokio::io::duplex`
//! pipe and walks through a list of [`Step`]s, asserting on every line the
//! client sends.

#![allow(dead_code)]

use nntp_session::NntpSession;
use std::sync::Arc;
use tokio::io::{
    AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader, DuplexStream, duplex,
};
use tokio::task::JoinHandle;
use tokio_rustls::TlsAcceptor;
use tokio_rustls::rustls::pki_types::{CertificateDer, PrivateKeyDer, PrivatePkcs8KeyDer};
use tokio_rustls::rustls::{self, crypto::ring};

/// One action of the scripted server
pub enum Step {
    /// Expect exactly this command line from the client
    Recv(String),
    /// Expect a dot-terminated block; lines are compared as sent (still stuffed)
    RecvBlock(Vec<String>),
    /// Send raw bytes
    Send(Vec<u8>),
    /// Run the server side of a TLS handshake; later steps go over TLS
    AcceptTls(TlsAcceptor),
}

/// Expect command `line`
pub fn recv(line: &str) -> Step {
    Step::Recv(line.to_string())
}

/// Expect a block whose wire lines are `lines`
pub fn recv_block(lines: &[&str]) -> Step {
    Step::RecvBlock(lines.iter().map(|l| l.to_string()).collect())
}

/// Send `lines`, each terminated with CRLF
pub fn reply(lines: &[&str]) -> Step {
    let mut bytes = Vec::new();
    for line in lines {
        bytes.extend_from_slice(line.as_bytes());
        bytes.extend_from_slice(b"\r\n");
    }
    Step::Send(bytes)
}

/// Accept TLS with a freshly generated self-signed certificate for `host`
pub fn accept_tls(host: &str) -> Step {
    let key_pair = rcgen::KeyPair::generate().unwrap();
    let cert = rcgen::CertificateParams::new(vec![host.to_string()])
        .unwrap()
        .self_signed(&key_pair)
        .unwrap();
    let key = PrivateKeyDer::Pkcs8(PrivatePkcs8KeyDer::from(key_pair.serialize_der()));
    let chain: Vec<CertificateDer<'static>> = vec![cert.der().clone()];

    let config = rustls::ServerConfig::builder_with_provider(Arc::new(ring::default_provider()))
        .with_safe_default_protocol_versions()
        .unwrap()
        .with_no_client_auth()
        .with_single_cert(chain, key)
        .unwrap();
    Step::AcceptTls(TlsAcceptor::from(Arc::new(config)))
}

/// Install a test subscriber honouring `RUST_LOG`
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

async fn read_line<T: AsyncRead + Unpin>(server: &mut BufReader<T>) -> String {
    let mut line = String::new();
    server.read_line(&mut line).await.unwrap();
    assert!(line.ends_with("\r\n"), "line not CRLF-terminated: {line:?}");
    line.truncate(line.len() - 2);
    line
}

/// Play steps until the script ends or asks for TLS; returns the acceptor
async fn play<T: AsyncRead + AsyncWrite + Unpin>(
    server: &mut BufReader<T>,
    steps: &mut std::vec::IntoIter<Step>,
) -> Option<TlsAcceptor> {
    for step in steps {
        match step {
            Step::Recv(expected) => {
                assert_eq!(read_line(server).await, expected);
            }
            Step::RecvBlock(expected) => {
                let mut got = Vec::new();
                loop {
                    let line = read_line(server).await;
                    if line == "." {
                        break;
                    }
                    got.push(line);
                }
                assert_eq!(got, expected);
            }
            Step::Send(bytes) => {
                let stream = server.get_mut();
                stream.write_all(&bytes).await.unwrap();
                stream.flush().await.unwrap();
            }
            Step::AcceptTls(acceptor) => return Some(acceptor),
        }
    }
    None
}

/// Start a scripted server; returns the client end and the server task
pub fn serve(steps: Vec<Step>) -> (DuplexStream, JoinHandle<()>) {
    let (client, server) = duplex(64 * 1024);
    let handle = tokio::spawn(async move {
        let mut steps = steps.into_iter();
        let mut server = BufReader::new(server);
        let Some(acceptor) = play(&mut server, &mut steps).await else {
            return;
        };

        assert!(server.buffer().is_empty(), "client sent data ahead of the handshake");
        let tls = acceptor.accept(server.into_inner()).await.unwrap();
        let mut server = BufReader::new(tls);
        let again = play(&mut server, &mut steps).await;
        assert!(again.is_none(), "TLS can only be negotiated once");
    });
    (client, handle)
}

/// Connect a session to a scripted server that first sends a 200 greeting
pub async fn session(steps: Vec<Step>) -> (NntpSession<DuplexStream>, JoinHandle<()>) {
    init_tracing();
    let mut script = vec![reply(&["200 news.example.com ready"])];
    script.extend(steps);
    let (client, handle) = serve(script);
    let session = NntpSession::connect(client).await.unwrap();
    (session, handle)
}
