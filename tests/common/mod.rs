//! Shared test helpers: a local stand-in for the OpenCage endpoint.

#![allow(dead_code)]

use axum::extract::Query;
use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use std::collections::HashMap;
use std::sync::{mpsc, Arc, Mutex};

pub const VALID_KEY: &str = "test-key";

pub const NAIROBI: &str = r#"{
    "results": [{"geometry": {"lat": -1.2921, "lng": 36.8219}, "formatted": "Nairobi, Kenya"}],
    "status": {"code": 200, "message": "OK"},
    "total_results": 1
}"#;

pub const NO_RESULTS: &str = r#"{
    "results": [],
    "status": {"code": 200, "message": "OK"},
    "total_results": 0
}"#;

pub const QUOTA: &str = r#"{"results": [], "status": {"code": 402, "message": "quota exceeded"}}"#;

const UNAUTHORIZED: &str =
    r#"{"results": [], "status": {"code": 401, "message": "invalid API key"}}"#;

pub struct MockServer {
    pub base_url: String,
    queries: Arc<Mutex<Vec<String>>>,
}

impl MockServer {
    /// Start a server answering every authorized request with `status`/`body`.
    pub fn start(status: u16, body: &'static str) -> Self {
        let queries = Arc::new(Mutex::new(Vec::new()));
        let seen = queries.clone();
        let (tx, rx) = mpsc::channel();

        std::thread::spawn(move || {
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .unwrap();
            rt.block_on(async move {
                let handler = move |Query(params): Query<HashMap<String, String>>| {
                    let seen = seen.clone();
                    async move {
                        if let Some(q) = params.get("q") {
                            seen.lock().unwrap().push(q.clone());
                        }
                        if params.get("key").map(String::as_str) != Some(VALID_KEY) {
                            return (StatusCode::UNAUTHORIZED, UNAUTHORIZED.to_string());
                        }
                        (StatusCode::from_u16(status).unwrap(), body.to_string())
                    }
                };
                let app = Router::new().route("/geocode/v1/json", get(handler));
                let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
                tx.send(listener.local_addr().unwrap()).unwrap();
                axum::serve(listener, app).await.unwrap();
            });
        });

        let addr = rx.recv().unwrap();
        Self {
            base_url: format!("http://{}", addr),
            queries,
        }
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

/// A base URL nothing listens on.
pub fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

/// `<prefix>_<8 digits>_<6 digits>.html`
pub fn is_timestamped_map_name(name: &str, prefix: &str) -> bool {
    let Some(stem) = name.strip_suffix(".html") else {
        return false;
    };
    let Some(rest) = stem.strip_prefix(prefix).and_then(|r| r.strip_prefix('_')) else {
        return false;
    };
    match rest.split_once('_') {
        Some((date, time)) => {
            date.len() == 8
                && time.len() == 6
                && date.chars().all(|c| c.is_ascii_digit())
                && time.chars().all(|c| c.is_ascii_digit())
        }
        None => false,
    }
}
