use super::AppContext;
use anyhow::{Context, Result};
use colored::Colorize;

const REDACTED: &str = "********";

pub fn show(ctx: &AppContext) -> Result<()> {
    let path = ctx
        .config_service
        .config_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(no config directory)".to_string());
    println!("{} {}", "Config file:".bold(), path);

    let mut config = ctx.config.clone();
    if config.data_source.anon_key.is_some() {
        config.data_source.anon_key = Some(REDACTED.to_string());
    }
    let rendered = toml::to_string_pretty(&config).context("Failed to render configuration")?;
    println!("{}", rendered);
    Ok(())
}
