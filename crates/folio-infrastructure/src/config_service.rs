//! Configuration service implementation.
//!
//! This module provides a ConfigService that loads the root configuration
//! from the configuration file (~/.config/folio/config.toml) and applies
//! `FOLIO_*` environment overrides on top.

use crate::paths::FolioPaths;
use folio_core::config::FolioConfig;
use folio_core::{FolioError, Result};
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

pub const ENV_PORTFOLIO_ID: &str = "FOLIO_PORTFOLIO_ID";
pub const ENV_SUPABASE_URL: &str = "FOLIO_SUPABASE_URL";
pub const ENV_SUPABASE_ANON_KEY: &str = "FOLIO_SUPABASE_ANON_KEY";
pub const ENV_TUNNEL_BASE_URL: &str = "FOLIO_TUNNEL_BASE_URL";

/// Configuration service that loads and caches the root configuration.
///
/// A missing config file is not an error: defaults plus environment
/// overrides are used. A file that exists but does not parse is.
#[derive(Debug, Clone)]
pub struct ConfigService {
    /// Explicit config file; `None` means the platform default location.
    path: Option<PathBuf>,
    /// Cached configuration loaded from file.
    config: Arc<RwLock<Option<FolioConfig>>>,
}

impl ConfigService {
    /// Creates a service reading the platform default config file.
    pub fn new() -> Self {
        Self {
            path: None,
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Creates a service reading `path` instead of the default location.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// The config file this service reads, if one can be determined.
    pub fn config_path(&self) -> Option<PathBuf> {
        self.path
            .clone()
            .or_else(|| FolioPaths::config_file().ok())
    }

    /// Gets the configuration, loading it on first access.
    pub fn get_config(&self) -> Result<FolioConfig> {
        {
            let read_lock = self
                .config
                .read()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            if let Some(ref cached) = *read_lock {
                return Ok(cached.clone());
            }
        }

        let loaded = self.load(|key| std::env::var(key).ok())?;

        {
            let mut write_lock = self
                .config
                .write()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            *write_lock = Some(loaded.clone());
        }

        Ok(loaded)
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        let mut write_lock = self
            .config
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *write_lock = None;
    }

    /// Loads the file (if present) and applies overrides from `lookup`.
    pub fn load<F>(&self, lookup: F) -> Result<FolioConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let from_file = match self.config_path() {
            Some(path) => Self::read_file(&path)?,
            None => {
                tracing::debug!("[ConfigService] No config directory, using defaults");
                None
            }
        };
        let mut config = from_file.unwrap_or_default();
        apply_env_overrides(&mut config, lookup);
        config.theme = config.theme.sanitized();
        Ok(config)
    }

    fn read_file(path: &Path) -> Result<Option<FolioConfig>> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("[ConfigService] {} not found, using defaults", path.display());
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let config = toml::from_str(&content).map_err(|e| {
            FolioError::config(format!("Invalid config file {}: {}", path.display(), e))
        })?;
        tracing::debug!("[ConfigService] Loaded {}", path.display());
        Ok(Some(config))
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new()
    }
}

/// Applies `FOLIO_*` overrides. Blank values are ignored.
pub fn apply_env_overrides<F>(config: &mut FolioConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

    if let Some(id) = get(ENV_PORTFOLIO_ID) {
        config.default_profile_id = Some(id);
    }
    if let Some(url) = get(ENV_SUPABASE_URL) {
        config.data_source.url = Some(url);
    }
    if let Some(key) = get(ENV_SUPABASE_ANON_KEY) {
        config.data_source.anon_key = Some(key);
    }
    if let Some(url) = get(ENV_TUNNEL_BASE_URL) {
        config.tunnel.base_url = Some(url);
    }

    let theme = &mut config.theme;
    let colours: [(&str, &mut String); 7] = [
        ("FOLIO_THEME_PRIMARY", &mut theme.primary),
        ("FOLIO_THEME_SECONDARY", &mut theme.secondary),
        ("FOLIO_THEME_ACCENT", &mut theme.accent),
        ("FOLIO_THEME_BACKGROUND", &mut theme.background),
        ("FOLIO_THEME_TEXT", &mut theme.text),
        ("FOLIO_THEME_TEXT_LIGHT", &mut theme.text_light),
        ("FOLIO_THEME_BORDER", &mut theme.border),
    ];
    for (key, slot) in colours {
        if let Some(value) = get(key) {
            *slot = value;
        }
    }
}
