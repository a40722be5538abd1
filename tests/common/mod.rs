use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::{Value, json};

use portfolio_api::config::Config;
use portfolio_api::models::ContactMessage;
use portfolio_api::store::{Store, StoreError};

/// Scriptable in-memory store. Records inserts so tests can assert how many
/// times (if at all) the handler touched the store.
pub struct MockStore {
    fail_inserts: bool,
    fail_lists: bool,
    error_message: String,
    collections: Vec<String>,
    pub inserts: Mutex<Vec<ContactMessage>>,
}

impl MockStore {
    pub fn new() -> Self {
        MockStore {
            fail_inserts: false,
            fail_lists: false,
            error_message: "connection refused".to_string(),
            collections: vec!["contact_messages".to_string()],
            inserts: Mutex::new(Vec::new()),
        }
    }

    /// A store whose every operation fails with `message`.
    pub fn failing(message: &str) -> Self {
        MockStore {
            fail_inserts: true,
            fail_lists: true,
            error_message: message.to_string(),
            ..MockStore::new()
        }
    }

    pub fn with_collections(names: &[&str]) -> Self {
        MockStore {
            collections: names.iter().map(|s| s.to_string()).collect(),
            ..MockStore::new()
        }
    }

    pub fn insert_count(&self) -> usize {
        self.inserts.lock().unwrap().len()
    }
}

#[async_trait]
impl Store for MockStore {
    fn name(&self) -> Option<&str> {
        Some("portfolio_test")
    }

    async fn insert_contact(&self, message: &ContactMessage) -> Result<(), StoreError> {
        if self.fail_inserts {
            return Err(StoreError::new(self.error_message.clone()));
        }
        self.inserts.lock().unwrap().push(message.clone());
        Ok(())
    }

    async fn list_collections(&self) -> Result<Vec<String>, StoreError> {
        if self.fail_lists {
            return Err(StoreError::new(self.error_message.clone()));
        }
        Ok(self.collections.clone())
    }
}

/// A running test server instance.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// POST a contact submission, return (body, status).
    pub async fn post_contact(&self, body: &Value) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url("/api/contact"))
            .json(body)
            .send()
            .await
            .expect("contact request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// GET a path, return (body, status).
    pub async fn get_json(&self, path: &str) -> (Value, StatusCode) {
        let resp = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("get request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }
}

/// Config for tests; `database_url` presence mirrors whether a store is
/// meant to be configured.
pub fn test_config(database_url: Option<&str>) -> Config {
    Config {
        host: "127.0.0.1".parse().unwrap(),
        port: 0, // unused, we bind to a random port
        owner: "Test Owner".to_string(),
        max_body_size: 65536,
        log_level: "warn".to_string(),
        database_url: database_url.map(|s| s.to_string()),
        database_name: database_url.map(|_| "portfolio_test".to_string()),
    }
}

/// Spawn the app on a random port, with an optional injected store.
pub async fn spawn_app(config: Config, store: Option<Arc<MockStore>>) -> TestApp {
    let store = store.map(|s| s as Arc<dyn Store>);
    let app = portfolio_api::build_app(store, config);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    let client = Client::new();

    TestApp { addr, client }
}

/// Spawn with a configured, working store.
pub async fn spawn_with_store() -> (TestApp, Arc<MockStore>) {
    let store = Arc::new(MockStore::new());
    let app = spawn_app(test_config(Some("postgres://test")), Some(store.clone())).await;
    (app, store)
}
