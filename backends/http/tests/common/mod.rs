//! A minimal in-process stand-in for the dataset hub.
//!
//! Serves canned responses keyed by request path (as sent on the wire, i.e.
//! percent-encoded) and records every request it receives.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

#[derive(Debug, Clone)]
pub struct Recorded {
    pub path: String,
    pub authorization: Option<String>,
}

pub struct MockHub {
    pub endpoint: String,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

impl MockHub {
    pub fn requests(&self) -> Vec<Recorded> { self.requests.lock().expect("lock").clone() }
}

/// Route table entry: status code and body.
pub type Route = (u16, String);

pub async fn spawn(routes: Vec<(String, Route)>) -> MockHub {
    let routes: Arc<HashMap<String, Route>> = Arc::new(routes.into_iter().collect());
    let requests = Arc::new(Mutex::new(Vec::new()));

    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind mock hub");
    let addr = listener.local_addr().expect("local addr");

    let log = requests.clone();
    tokio::spawn(async move {
        while let Ok((mut stream, _)) = listener.accept().await {
            let routes = routes.clone();
            let log = log.clone();
            tokio::spawn(async move {
                let mut head = Vec::new();
                let mut chunk = [0u8; 1024];
                while !head.windows(4).any(|w| w == b"\r\n\r\n") {
                    match stream.read(&mut chunk).await {
                        Ok(0) | Err(_) => break,
                        Ok(n) => head.extend_from_slice(&chunk[..n]),
                    }
                }

                let head = String::from_utf8_lossy(&head).to_string();
                let mut lines = head.lines();
                let path = lines
                    .next()
                    .and_then(|line| line.split_whitespace().nth(1))
                    .unwrap_or("/")
                    .to_string();
                let authorization = lines.find_map(|line| {
                    let (name, value) = line.split_once(':')?;
                    name.eq_ignore_ascii_case("authorization").then(|| value.trim().to_string())
                });
                log.lock().expect("lock").push(Recorded { path: path.clone(), authorization });

                let (status, body) =
                    routes.get(&path).cloned().unwrap_or((404, "Entry not found".to_string()));
                let response = format!(
                    "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    reason(status),
                    body.len(),
                    body
                );
                let _ = stream.write_all(response.as_bytes()).await;
                let _ = stream.shutdown().await;
            });
        }
    });

    MockHub { endpoint: format!("http://{}", addr), requests }
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "Not Found",
        _ => "Error",
    }
}

pub fn file_path(project_encoded: &str) -> String {
    format!(
        "/datasets/shuxunoo/NFT-Net/resolve/main/NFT1000/{}/metadata_dashboard.json",
        project_encoded
    )
}

pub fn tree_path() -> String { "/api/datasets/shuxunoo/NFT-Net/tree/main/NFT1000".to_string() }
