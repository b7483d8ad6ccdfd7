//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use shop_data::{CatalogClient, ImageAllowlist};
use tracing::warn;

use crate::config::{ShopConfig, CONFIG_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// Effective configuration.
    pub config: ShopConfig,
    /// File the configuration came from, if any.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from the config file and command-line overrides.
    pub fn load(config_path: Option<&str>, base_url: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (mut config, config_path) = match config_path {
            Some(path) => {
                let path = PathBuf::from(path);
                (ShopConfig::load(&path)?, Some(path))
            }
            None => match find_config(&cwd) {
                Some((path, config)) => (config, Some(path)),
                None => (ShopConfig::default(), None),
            },
        };

        if let Some(path) = &config_path {
            output.debug(&format!("Using config: {}", path.display()));
        }

        if let Some(url) = base_url {
            config.catalog.base_url = url.to_string();
        }

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Catalog client for the configured base URL.
    pub fn client(&self) -> Result<CatalogClient> {
        CatalogClient::with_base_url(&self.config.catalog.base_url)
            .with_context(|| format!("Bad catalog base URL: {}", self.config.catalog.base_url))
    }

    /// Image allowlist from the configuration.
    pub fn images(&self) -> ImageAllowlist {
        self.config.image_allowlist()
    }
}

/// Find a config file in `start` or its parents.
///
/// Files that fail to parse are skipped with a warning.
fn find_config(start: &Path) -> Option<(PathBuf, ShopConfig)> {
    let mut current = start.to_path_buf();
    loop {
        for name in &CONFIG_NAMES {
            let config_path = current.join(name);
            if config_path.exists() {
                match ShopConfig::load(&config_path) {
                    Ok(config) => return Some((config_path, config)),
                    Err(e) => warn!(path = %config_path.display(), error = %e, "Skipping config"),
                }
            }
        }

        if !current.pop() {
            break;
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_config_in_parent() {
        let root = tempfile::tempdir().unwrap();
        let nested = root.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(
            root.path().join(".shop.toml"),
            "[catalog]\nbase_url = \"http://localhost:9000\"\n",
        )
        .unwrap();

        let (path, config) = find_config(&nested).unwrap();
        assert_eq!(path, root.path().join(".shop.toml"));
        assert_eq!(config.catalog.base_url, "http://localhost:9000");
    }

    #[test]
    fn test_find_config_prefers_shop_toml() {
        let root = tempfile::tempdir().unwrap();
        std::fs::write(root.path().join("shop.json"), r#"{"catalog": {"base_url": "http://json"}}"#)
            .unwrap();
        std::fs::write(root.path().join("shop.toml"), "[catalog]\nbase_url = \"http://toml\"\n")
            .unwrap();

        let (_, config) = find_config(root.path()).unwrap();
        assert_eq!(config.catalog.base_url, "http://toml");
    }

    #[test]
    fn test_find_config_skips_broken_file() {
        let root = tempfile::tempdir().unwrap();
        std::fs::write(root.path().join("shop.toml"), "[catalog\n").unwrap();
        std::fs::write(root.path().join("shop.json"), r#"{"catalog": {"base_url": "http://json"}}"#)
            .unwrap();

        let (path, config) = find_config(root.path()).unwrap();
        assert_eq!(path, root.path().join("shop.json"));
        assert_eq!(config.catalog.base_url, "http://json");
    }

    #[test]
    fn test_base_url_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shop.toml");
        ShopConfig::default().save(&path).unwrap();

        let ctx = Context::load(
            path.to_str(),
            Some("http://localhost:3000"),
            Output::new(0, true),
        )
        .unwrap();
        assert_eq!(ctx.config.catalog.base_url, "http://localhost:3000");
        assert_eq!(ctx.config_path.as_deref(), Some(path.as_path()));
        assert!(ctx.client().is_ok());
    }
}
