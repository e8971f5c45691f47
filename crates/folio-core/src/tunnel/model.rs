use serde::{Deserialize, Serialize};

/// Liveness reported by the tunnel status endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OnlineStatus {
    Up,
    Down,
    #[default]
    #[serde(other)]
    Unknown,
}

impl OnlineStatus {
    pub fn is_up(self) -> bool {
        matches!(self, Self::Up)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Unknown => "unknown",
        }
    }
}

/// Status of one tunnel, fetched fresh for every page load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TunnelStatus {
    pub id: String,
    #[serde(default)]
    pub web_url: String,
    #[serde(default)]
    pub online_status: OnlineStatus,
}
