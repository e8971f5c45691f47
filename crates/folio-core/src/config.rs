//! Application configuration model.
//!
//! `FolioConfig` is built once at startup (see `folio_infrastructure::ConfigService`)
//! and handed by reference to whatever needs it. Nothing here is global state.

use serde::{Deserialize, Serialize};

/// Default page size for the projects list.
pub const DEFAULT_PROJECTS_PAGE_SIZE: usize = 2;
/// Default page size for skills within one category.
pub const DEFAULT_SKILLS_PAGE_SIZE: usize = 3;
/// Default page size for the work experience list.
pub const DEFAULT_WORK_EXPERIENCES_PAGE_SIZE: usize = 3;

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    /// External profile identifier used when a caller does not name one.
    pub default_profile_id: Option<String>,
    pub data_source: DataSourceConfig,
    pub tunnel: TunnelConfig,
    pub pagination: PaginationConfig,
    pub theme: ThemeConfig,
}

impl FolioConfig {
    /// Returns the default profile identifier, treating an empty string as unset.
    pub fn default_profile_id(&self) -> Option<&str> {
        self.default_profile_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }
}

/// Connection settings for the PostgREST data API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataSourceConfig {
    /// Project URL, e.g. `https://xyz.supabase.co`
    pub url: Option<String>,
    /// Public (anon) API key
    pub anon_key: Option<String>,
    pub timeout_secs: u64,
}

impl Default for DataSourceConfig {
    fn default() -> Self {
        Self {
            url: None,
            anon_key: None,
            timeout_secs: 10,
        }
    }
}

/// Settings for the tunnel status endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TunnelConfig {
    /// Site that serves `/api/tunnel-status/{id}`
    pub base_url: Option<String>,
    pub timeout_secs: u64,
}

impl Default for TunnelConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout_secs: 5,
        }
    }
}

/// Page sizes for each paginated list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationConfig {
    pub projects: usize,
    pub skills: usize,
    pub work_experiences: usize,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            projects: DEFAULT_PROJECTS_PAGE_SIZE,
            skills: DEFAULT_SKILLS_PAGE_SIZE,
            work_experiences: DEFAULT_WORK_EXPERIENCES_PAGE_SIZE,
        }
    }
}

/// Colour palette shared by every rendered section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub background: String,
    pub text: String,
    pub text_light: String,
    pub border: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            primary: "#8B7355".to_string(),
            secondary: "#A67C52".to_string(),
            accent: "#D4A76A".to_string(),
            background: "#FAF3E0".to_string(),
            text: "#5D4037".to_string(),
            text_light: "#795548".to_string(),
            border: "#BCAAA4".to_string(),
        }
    }
}

impl ThemeConfig {
    /// Replaces every colour that is not a valid `#rrggbb` value with its default.
    pub fn sanitized(self) -> Self {
        let defaults = Self::default();
        let pick = |value: String, fallback: String| {
            if Rgb::from_hex(&value).is_some() {
                value
            } else {
                fallback
            }
        };
        Self {
            primary: pick(self.primary, defaults.primary),
            secondary: pick(self.secondary, defaults.secondary),
            accent: pick(self.accent, defaults.accent),
            background: pick(self.background, defaults.background),
            text: pick(self.text, defaults.text),
            text_light: pick(self.text_light, defaults.text_light),
            border: pick(self.border, defaults.border),
        }
    }

    pub fn primary_rgb(&self) -> Rgb {
        Rgb::from_hex(&self.primary).unwrap_or(Rgb::BLACK)
    }

    pub fn text_light_rgb(&self) -> Rgb {
        Rgb::from_hex(&self.text_light).unwrap_or(Rgb::BLACK)
    }

    pub fn accent_rgb(&self) -> Rgb {
        Rgb::from_hex(&self.accent).unwrap_or(Rgb::BLACK)
    }
}

/// An 8-bit RGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    /// Parses `#rrggbb` (the leading `#` is optional, hex digits are case-insensitive).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
        Some(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }
}
