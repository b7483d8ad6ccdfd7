//! Asynchronous load state shared by the pages.

use serde::Serialize;

/// Where a page's remote data stands.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(tag = "state", content = "value", rename_all = "lowercase")]
pub enum PageState<T> {
    /// Fetch in flight (or not started).
    #[default]
    Loading,
    /// Data arrived.
    Ready(T),
    /// Fetch failed; the message is what the page shows.
    Failed(String),
}

impl<T> PageState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, PageState::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            PageState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            PageState::Failed(message) => Some(message),
            _ => None,
        }
    }
}
