//! Outbound HTTP transports.

use crate::{CatalogError, Response};
use async_trait::async_trait;
use reqwest::Url;

/// Something that can perform a GET and buffer the answer.
///
/// Non-2xx statuses are returned as responses, not errors; only failures to
/// obtain a response at all are `Err`.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &Url) -> Result<Response, CatalogError>;
}

/// Transport backed by a shared `reqwest` client.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, url: &Url) -> Result<Response, CatalogError> {
        let response = self
            .client
            .get(url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;
        Ok(Response::new(status, body.to_vec()))
    }
}

#[cfg(any(test, feature = "test-util"))]
pub use self::canned::StaticTransport;

#[cfg(any(test, feature = "test-util"))]
mod canned {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Debug, Clone)]
    enum Route {
        Reply(Response),
        Unreachable,
    }

    /// Transport that answers from a fixed route table, keyed by URL path.
    ///
    /// Unknown paths answer 404. Every requested path is recorded.
    #[derive(Debug, Default)]
    pub struct StaticTransport {
        routes: HashMap<String, Route>,
        requests: Mutex<Vec<String>>,
    }

    impl StaticTransport {
        pub fn new() -> Self {
            Self::default()
        }

        /// Answer `path` with 200 and the serialized value.
        pub fn with_json(self, path: &str, value: serde_json::Value) -> Self {
            self.with_status(path, 200, value.to_string())
        }

        /// Answer `path` with an arbitrary status and body.
        pub fn with_status(mut self, path: &str, status: u16, body: impl Into<Vec<u8>>) -> Self {
            self.routes
                .insert(path.to_string(), Route::Reply(Response::new(status, body)));
            self
        }

        /// Fail requests to `path` as if the host were down.
        pub fn unreachable(mut self, path: &str) -> Self {
            self.routes.insert(path.to_string(), Route::Unreachable);
            self
        }

        /// Paths requested so far, in order.
        pub fn requests(&self) -> Vec<String> {
            self.requests
                .lock()
                .map(|r| r.clone())
                .unwrap_or_default()
        }
    }

    #[async_trait]
    impl Transport for StaticTransport {
        async fn get(&self, url: &Url) -> Result<Response, CatalogError> {
            let path = url.path().to_string();
            if let Ok(mut requests) = self.requests.lock() {
                requests.push(path.clone());
            }
            match self.routes.get(&path) {
                Some(Route::Reply(response)) => Ok(response.clone()),
                Some(Route::Unreachable) => {
                    Err(CatalogError::Network(format!("connection refused: {}", url)))
                }
                None => Ok(Response::new(404, "")),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_transport_routes() {
        let transport = StaticTransport::new()
            .with_json("/products/categories", serde_json::json!(["electronics"]))
            .unreachable("/products");

        let base = Url::parse("https://fakestoreapi.com").unwrap();

        let ok = transport
            .get(&base.join("/products/categories").unwrap())
            .await
            .unwrap();
        assert_eq!(ok.status, 200);

        let missing = transport.get(&base.join("/nope").unwrap()).await.unwrap();
        assert_eq!(missing.status, 404);

        let down = transport.get(&base.join("/products").unwrap()).await;
        assert!(matches!(down, Err(CatalogError::Network(_))));

        assert_eq!(
            transport.requests(),
            vec!["/products/categories", "/nope", "/products"]
        );
    }
}
