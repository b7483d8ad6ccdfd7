//! Remote image allowlist.
//!
//! Product images are only rendered when their URL matches one of the
//! configured remote patterns. Anything else is withheld.

use reqwest::Url;
use serde::{Deserialize, Serialize};

/// Placeholder shown in place of a disallowed image.
pub const WITHHELD: &str = "[image withheld]";

/// Result type for allowlist checks.
pub type AllowlistResult<T> = Result<T, AllowlistError>;

/// Why an image URL was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AllowlistError {
    #[error("invalid image URL: {0}")]
    InvalidUrl(String),

    #[error("protocol not allowed: {0}")]
    ProtocolNotAllowed(String),

    #[error("host not allowed: {0}")]
    HostNotAllowed(String),

    #[error("port not allowed: {0}")]
    PortNotAllowed(String),

    #[error("path not allowed: {0}")]
    PathNotAllowed(String),
}

/// One allowed image source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemotePattern {
    /// URL scheme, e.g. "https".
    pub protocol: String,
    /// Exact host, or `*.example.com` for any subdomain.
    pub hostname: String,
    /// Explicit port; `None` only accepts the scheme's default port.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    /// Path glob. `*` matches one segment, `**` the rest of the path.
    #[serde(default = "default_pathname")]
    pub pathname: String,
}

fn default_pathname() -> String {
    "/**".to_string()
}

impl RemotePattern {
    pub fn new(protocol: impl Into<String>, hostname: impl Into<String>) -> Self {
        Self {
            protocol: protocol.into(),
            hostname: hostname.into().to_lowercase(),
            port: None,
            pathname: default_pathname(),
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn with_pathname(mut self, pathname: impl Into<String>) -> Self {
        self.pathname = pathname.into();
        self
    }

    /// The catalog's own image host.
    pub fn fakestore() -> Self {
        Self::new("https", "fakestoreapi.com").with_pathname("/img/**")
    }

    /// Check a parsed URL, reporting the first component that fails.
    fn check(&self, url: &Url) -> AllowlistResult<()> {
        if !url.scheme().eq_ignore_ascii_case(&self.protocol) {
            return Err(AllowlistError::ProtocolNotAllowed(url.scheme().to_string()));
        }

        let host = url.host_str().unwrap_or_default().to_lowercase();
        if !matches_host(&host, &self.hostname.to_lowercase()) {
            return Err(AllowlistError::HostNotAllowed(host));
        }

        if url.port() != self.port {
            let port = url.port().map(|p| p.to_string()).unwrap_or_default();
            return Err(AllowlistError::PortNotAllowed(port));
        }

        if !matches_path(url.path(), &self.pathname) {
            return Err(AllowlistError::PathNotAllowed(url.path().to_string()));
        }

        Ok(())
    }
}

/// The set of image sources the storefront will render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageAllowlist {
    patterns: Vec<RemotePattern>,
}

impl Default for ImageAllowlist {
    fn default() -> Self {
        Self {
            patterns: vec![RemotePattern::fakestore()],
        }
    }
}

impl ImageAllowlist {
    /// An allowlist that rejects everything.
    pub fn empty() -> Self {
        Self {
            patterns: Vec::new(),
        }
    }

    pub fn from_patterns(patterns: Vec<RemotePattern>) -> Self {
        Self { patterns }
    }

    pub fn allow(mut self, pattern: RemotePattern) -> Self {
        self.patterns.push(pattern);
        self
    }

    /// Check an image URL against every pattern.
    ///
    /// On rejection the error comes from the pattern that got furthest
    /// (protocol, then host, then port, then path).
    pub fn check(&self, url: &str) -> AllowlistResult<()> {
        let parsed = Url::parse(url)
            .map_err(|e| AllowlistError::InvalidUrl(format!("{}: {}", url, e)))?;

        let mut best: Option<AllowlistError> = None;
        for pattern in &self.patterns {
            match pattern.check(&parsed) {
                Ok(()) => return Ok(()),
                Err(e) => {
                    if best.as_ref().map_or(true, |b| depth(&e) > depth(b)) {
                        best = Some(e);
                    }
                }
            }
        }

        Err(best.unwrap_or_else(|| {
            AllowlistError::HostNotAllowed(parsed.host_str().unwrap_or_default().to_string())
        }))
    }

    pub fn is_allowed(&self, url: &str) -> bool {
        self.check(url).is_ok()
    }

    /// The URL itself when allowed, otherwise the withheld placeholder.
    pub fn display<'a>(&self, url: &'a str) -> &'a str {
        if self.is_allowed(url) {
            url
        } else {
            tracing::debug!(url, "Image withheld");
            WITHHELD
        }
    }
}

fn depth(e: &AllowlistError) -> u8 {
    match e {
        AllowlistError::InvalidUrl(_) => 0,
        AllowlistError::ProtocolNotAllowed(_) => 1,
        AllowlistError::HostNotAllowed(_) => 2,
        AllowlistError::PortNotAllowed(_) => 3,
        AllowlistError::PathNotAllowed(_) => 4,
    }
}

fn matches_host(host: &str, pattern: &str) -> bool {
    match pattern.strip_prefix("*.") {
        // "*.example.com" matches subdomains, not the apex
        Some(suffix) => host
            .strip_suffix(suffix)
            .is_some_and(|prefix| prefix.len() > 1 && prefix.ends_with('.')),
        None => host == pattern,
    }
}

fn matches_path(path: &str, pattern: &str) -> bool {
    let mut path_parts = path.trim_start_matches('/').split('/');
    let mut pattern_parts = pattern.trim_start_matches('/').split('/');

    loop {
        match (pattern_parts.next(), path_parts.next()) {
            (Some("**"), _) => return true,
            (Some("*"), Some(segment)) if !segment.is_empty() => {}
            (Some(expected), Some(segment)) if expected == segment => {}
            (None, None) => return true,
            _ => return false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_allows_fakestore_images() {
        let allowlist = ImageAllowlist::default();
        assert!(allowlist.is_allowed("https://fakestoreapi.com/img/81fPKd-2AYL._AC_SL1500_.jpg"));
        assert!(allowlist.is_allowed("https://fakestoreapi.com/img/nested/a.png"));
    }

    #[test]
    fn test_default_rejects_by_component() {
        let allowlist = ImageAllowlist::default();

        assert!(matches!(
            allowlist.check("http://fakestoreapi.com/img/a.jpg"),
            Err(AllowlistError::ProtocolNotAllowed(_))
        ));
        assert!(matches!(
            allowlist.check("https://evil.example/img/a.jpg"),
            Err(AllowlistError::HostNotAllowed(_))
        ));
        assert!(matches!(
            allowlist.check("https://fakestoreapi.com:8443/img/a.jpg"),
            Err(AllowlistError::PortNotAllowed(_))
        ));
        assert!(matches!(
            allowlist.check("https://fakestoreapi.com/products/1"),
            Err(AllowlistError::PathNotAllowed(_))
        ));
        assert!(matches!(
            allowlist.check("not a url"),
            Err(AllowlistError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_explicit_default_port_is_default() {
        // The URL parser drops the scheme's default port.
        assert!(ImageAllowlist::default().is_allowed("https://fakestoreapi.com:443/img/a.jpg"));
    }

    #[test]
    fn test_wildcard_host() {
        let allowlist =
            ImageAllowlist::empty().allow(RemotePattern::new("https", "*.cdn.example.com"));

        assert!(allowlist.is_allowed("https://eu.cdn.example.com/a.jpg"));
        assert!(!allowlist.is_allowed("https://cdn.example.com/a.jpg"));
        assert!(!allowlist.is_allowed("https://evilcdn.example.com/a.jpg"));
    }

    #[test]
    fn test_single_segment_glob() {
        let allowlist = ImageAllowlist::empty().allow(
            RemotePattern::new("http", "localhost")
                .with_port(3000)
                .with_pathname("/img/*/thumb.jpg"),
        );

        assert!(allowlist.is_allowed("http://localhost:3000/img/42/thumb.jpg"));
        assert!(!allowlist.is_allowed("http://localhost:3000/img/42/43/thumb.jpg"));
        assert!(!allowlist.is_allowed("http://localhost/img/42/thumb.jpg"));
    }

    #[test]
    fn test_empty_allowlist_rejects() {
        assert!(!ImageAllowlist::empty().is_allowed("https://fakestoreapi.com/img/a.jpg"));
    }

    #[test]
    fn test_display_withholds() {
        let allowlist = ImageAllowlist::default();
        assert_eq!(
            allowlist.display("https://fakestoreapi.com/img/a.jpg"),
            "https://fakestoreapi.com/img/a.jpg"
        );
        assert_eq!(allowlist.display("https://other.example/a.jpg"), WITHHELD);
    }

    #[test]
    fn test_pattern_deserializes_without_port() {
        let pattern: RemotePattern = serde_json::from_str(
            r#"{"protocol": "https", "hostname": "fakestoreapi.com", "pathname": "/img/**"}"#,
        )
        .unwrap();
        assert_eq!(pattern, RemotePattern::fakestore());
    }
}
