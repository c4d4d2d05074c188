//! In-process stub backend for HTTP-level tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::Router;

use crate::config::{AuthScheme, ClientConfig};
use crate::http::ApiClient;
use crate::session::{Session, SessionGrant};

/// Serve `router` on an ephemeral local port and return its base URL.
pub async fn spawn_stub(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("stub bind should succeed");
    let addr = listener.local_addr().expect("stub addr should resolve");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("stub server should run");
    });
    format!("http://{addr}")
}

/// Base URL on which nothing is listening.
pub async fn dead_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind should succeed");
    let addr = listener.local_addr().expect("addr should resolve");
    drop(listener);
    format!("http://{addr}")
}

pub fn client_for(base_url: &str, session: Session) -> ApiClient {
    client_with_scheme(base_url, session, AuthScheme::Token)
}

pub fn client_with_scheme(base_url: &str, session: Session, scheme: AuthScheme) -> ApiClient {
    let config = ClientConfig::new(base_url).expect("stub URL should be valid").with_auth_scheme(scheme);
    ApiClient::new(&config, session).expect("client should build")
}

pub fn signed_in(token: &str) -> Session {
    let session = Session::in_memory();
    session
        .begin(&SessionGrant { token: token.into(), email: None, name: None })
        .expect("memory store should accept writes");
    session
}

/// Shared request counter for stub handlers.
#[derive(Clone, Default)]
pub struct Hits(Arc<AtomicUsize>);

impl Hits {
    pub fn bump(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }

    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}
