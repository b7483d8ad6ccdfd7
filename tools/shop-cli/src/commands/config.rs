//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, ShopConfig};
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx).await,
        ConfigCommand::Init { force } => init_config(force, ctx).await,
    }
}

async fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(none, using defaults)"),
    }

    ctx.output.info("");
    ctx.output.info("[catalog]");
    ctx.output.kv("base_url", &ctx.config.catalog.base_url);

    ctx.output.info("");
    ctx.output.info("[images]");
    if ctx.config.images.remote_patterns.is_empty() {
        ctx.output.list_item("(no image sources allowed)");
    }
    for pattern in &ctx.config.images.remote_patterns {
        let port = pattern.port.map(|p| format!(":{}", p)).unwrap_or_default();
        ctx.output.list_item(&format!(
            "{}://{}{}{}",
            pattern.protocol, pattern.hostname, port, pattern.pathname
        ));
    }

    Ok(())
}

async fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join("shop.toml");

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    // Keep the commented template unless overrides (e.g. --base-url) changed something.
    if ctx.config == ShopConfig::default() {
        fs::write(&config_path, generate_default_config())?;
    } else {
        ctx.config.save(&config_path)?;
    }

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}
