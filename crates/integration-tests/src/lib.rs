//! Integration tests for the catalog mock API.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p catalog-mock-integration-tests
//! ```
//!
//! Each test spawns its own server on an ephemeral port with a freshly
//! seeded catalog, so tests never see each other's logins or added records.
//!
//! # Test Categories
//!
//! - `products` - Product listing and search
//! - `brands` - Brand listing and brand products
//! - `login` - Token issuance
//! - `cart` - Cart stubs

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use catalog_mock_api::catalog::Catalog;
use catalog_mock_api::config::ApiConfig;
use catalog_mock_api::fixtures::Fixtures;
use catalog_mock_api::state::AppState;
use reqwest::Client;
use serde_json::Value;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// Directory holding the repository's fixture JSON files.
#[must_use]
pub fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../initial-data")
}

/// Load the repository fixtures.
///
/// # Panics
///
/// Panics if the fixture files are missing or malformed.
#[must_use]
pub fn load_fixtures() -> Fixtures {
    Fixtures::load(&fixtures_dir()).expect("Failed to load fixtures")
}

/// Read one fixture file as raw JSON, for comparing against responses.
///
/// # Panics
///
/// Panics if the file is missing or not valid JSON.
#[must_use]
pub fn fixture_json(file: &str) -> Value {
    let path = fixtures_dir().join(file);
    let contents = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {e}", path.display()));
    serde_json::from_str(&contents)
        .unwrap_or_else(|e| panic!("Failed to parse {}: {e}", path.display()))
}

/// A running API server bound to `127.0.0.1` on an ephemeral port.
pub struct TestServer {
    addr: SocketAddr,
    state: AppState,
    client: Client,
}

impl TestServer {
    /// Seed a catalog from the repository fixtures and start serving it.
    ///
    /// # Panics
    ///
    /// Panics if the fixtures cannot be loaded or the listener cannot bind.
    pub async fn spawn() -> Self {
        let config = ApiConfig {
            port: 0,
            data_dir: fixtures_dir(),
            ..ApiConfig::default()
        };
        let state = AppState::new(config.clone(), Catalog::new(load_fixtures()));

        let listener = TcpListener::bind(config.socket_addr())
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Failed to read local address");

        let app = catalog_mock_api::app(state.clone());
        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!("Test server error: {e}");
            }
        });

        Self {
            addr,
            state,
            client: Client::new(),
        }
    }

    /// Absolute URL for `path` on this server.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    /// The HTTP client to talk to this server with.
    #[must_use]
    pub const fn client(&self) -> &Client {
        &self.client
    }

    /// The server's shared state, for seeding or inspecting stores directly.
    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    /// Send a raw HTTP/1.1 request and return the response's status line,
    /// e.g. `HTTP/1.1 404 no brand with that id found`.
    ///
    /// `reqwest` only exposes the canonical reason for a status, so the
    /// reason phrase the server actually sent has to be read off the wire.
    ///
    /// # Panics
    ///
    /// Panics if the connection fails or the response is not valid UTF-8.
    pub async fn status_line(&self, method: &str, path: &str, json_body: Option<&str>) -> String {
        let body = json_body.unwrap_or_default();
        let mut request = format!(
            "{method} {path} HTTP/1.1\r\nHost: {}\r\nConnection: close\r\n",
            self.addr
        );
        if json_body.is_some() {
            request.push_str("Content-Type: application/json\r\n");
        }
        request.push_str(&format!("Content-Length: {}\r\n\r\n{body}", body.len()));

        let mut stream = TcpStream::connect(self.addr)
            .await
            .expect("Failed to connect to test server");
        stream
            .write_all(request.as_bytes())
            .await
            .expect("Failed to write request");

        let mut response = Vec::new();
        stream
            .read_to_end(&mut response)
            .await
            .expect("Failed to read response");
        let response = String::from_utf8(response).expect("Response was not UTF-8");

        response.lines().next().unwrap_or_default().to_string()
    }
}
