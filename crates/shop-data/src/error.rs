//! Catalog client error types.

use thiserror::Error;

/// Errors from the remote catalog.
///
/// Callers generally care about one distinction only: did the catalog answer
/// with a status (and which), or did the request never produce a usable
/// answer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The catalog answered with a non-2xx status.
    #[error("HTTP error! status: {status}")]
    Http { status: u16 },

    /// Anything else: connection failure, unreadable body, malformed JSON.
    #[error("Network error occurred: {0}")]
    Network(String),

    /// The configured base URL cannot be used to build request URLs.
    #[error("Invalid catalog URL: {0}")]
    InvalidUrl(String),
}

impl CatalogError {
    /// The HTTP status, if the catalog answered with one.
    pub fn status(&self) -> Option<u16> {
        match self {
            CatalogError::Http { status } => Some(*status),
            _ => None,
        }
    }

    /// Whether the catalog reported the resource as missing.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

impl From<reqwest::Error> for CatalogError {
    fn from(e: reqwest::Error) -> Self {
        CatalogError::Network(e.to_string())
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::Network(format!("invalid JSON: {}", e))
    }
}
