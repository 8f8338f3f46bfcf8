#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::http::{header, HeaderMap, Method, StatusCode, Uri};
use axum::Router;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Request as seen by the loopback server.
#[derive(Debug, Clone)]
pub struct Captured {
    pub method: Method,
    pub path: String,
    pub headers: HeaderMap,
    pub body: String,
}

impl Captured {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// Loopback server answering every request with one canned JSON response.
pub struct TestServer {
    pub base_url: String,
    captured: Arc<Mutex<Vec<Captured>>>,
    server: JoinHandle<()>,
}

impl TestServer {
    pub fn captured(&self) -> Vec<Captured> {
        self.captured.lock().unwrap().clone()
    }

    /// The single request the server received.
    pub fn only_request(&self) -> Captured {
        let captured = self.captured();
        assert_eq!(captured.len(), 1, "expected exactly one request");
        captured.into_iter().next().unwrap()
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.server.abort();
    }
}

pub async fn serve(status: u16, body: &'static str) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();

    let captured = Arc::new(Mutex::new(Vec::new()));
    let status = StatusCode::from_u16(status).unwrap();

    let app = Router::new().fallback({
        let captured = captured.clone();
        move |method: Method, uri: Uri, headers: HeaderMap, payload: String| {
            let captured = captured.clone();
            async move {
                captured.lock().unwrap().push(Captured {
                    method,
                    path: uri.path().to_string(),
                    headers,
                    body: payload,
                });
                (status, [(header::CONTENT_TYPE, "application/json")], body)
            }
        }
    });

    let server = tokio::spawn(async move {
        if let Err(err) = axum::serve(listener, app.into_make_service()).await {
            eprintln!("loopback server error: {err}");
        }
    });

    TestServer {
        base_url: format!("http://{addr}"),
        captured,
        server,
    }
}

/// A base URL nothing listens on.
pub async fn closed_port() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}
