//! CLI configuration.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use shop_data::{ImageAllowlist, RemotePattern, DEFAULT_BASE_URL};

/// File names searched for, in order, in each directory.
pub const CONFIG_NAMES: [&str; 3] = ["shop.toml", ".shop.toml", "shop.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShopConfig {
    /// Remote catalog settings.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Image source settings.
    #[serde(default)]
    pub images: ImagesConfig,
}

impl ShopConfig {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if is_json(path) {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = if is_json(path) {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }

    /// The image allowlist these settings describe.
    pub fn image_allowlist(&self) -> ImageAllowlist {
        ImageAllowlist::from_patterns(self.images.remote_patterns.clone())
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().map_or(false, |e| e == "json")
}

/// Remote catalog settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Base URL of the catalog API.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Image source settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImagesConfig {
    /// Allowed image sources. An empty list withholds every image.
    #[serde(default = "default_remote_patterns")]
    pub remote_patterns: Vec<RemotePattern>,
}

fn default_remote_patterns() -> Vec<RemotePattern> {
    vec![RemotePattern::fakestore()]
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self {
            remote_patterns: default_remote_patterns(),
        }
    }
}

/// Generate a default shop.toml config file.
pub fn generate_default_config() -> String {
    format!(
        r#"# Storefront configuration

[catalog]
base_url = "{base_url}"

# Product images are only shown when they match one of these sources.
[[images.remote_patterns]]
protocol = "https"
hostname = "fakestoreapi.com"
pathname = "/img/**"

# [[images.remote_patterns]]
# protocol = "http"
# hostname = "localhost"
# port = 3000
# pathname = "/static/*/**"
"#,
        base_url = DEFAULT_BASE_URL
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_config_matches_defaults() {
        let parsed: ShopConfig = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(parsed, ShopConfig::default());
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let parsed: ShopConfig = toml::from_str("").unwrap();
        assert_eq!(parsed.catalog.base_url, "https://fakestoreapi.com");
        assert_eq!(parsed.images.remote_patterns, vec![RemotePattern::fakestore()]);
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let parsed: ShopConfig = toml::from_str(
            r#"
            theme = "dark"

            [catalog]
            base_url = "http://localhost:8080"
            timeout = 5
            "#,
        )
        .unwrap();
        assert_eq!(parsed.catalog.base_url, "http://localhost:8080");
    }

    #[test]
    fn test_empty_patterns_withhold_everything() {
        let parsed: ShopConfig = toml::from_str("[images]\nremote_patterns = []\n").unwrap();
        assert!(!parsed
            .image_allowlist()
            .is_allowed("https://fakestoreapi.com/img/a.jpg"));
    }

    #[test]
    fn test_save_and_load_both_formats() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = ShopConfig::default();
        config.catalog.base_url = "http://localhost:3000".to_string();
        config
            .images
            .remote_patterns
            .push(RemotePattern::new("http", "localhost").with_port(3000));

        for name in ["shop.toml", "shop.json"] {
            let path = dir.path().join(name);
            config.save(&path).unwrap();
            assert_eq!(ShopConfig::load(&path).unwrap(), config, "{}", name);
        }
    }

    #[test]
    fn test_load_reports_path() {
        let err = ShopConfig::load(Path::new("/nonexistent/shop.toml")).unwrap_err();
        assert!(format!("{:#}", err).contains("/nonexistent/shop.toml"));
    }
}
