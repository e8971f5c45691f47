//! Tunnel status source trait.

use super::model::TunnelStatus;
use crate::error::Result;
use async_trait::async_trait;

/// Queries the liveness of a single tunnel.
///
/// Any error (transport failure, non-success response, undecodable body)
/// means "status unavailable" to callers; it is never fatal to a page.
#[async_trait]
pub trait TunnelStatusSource: Send + Sync {
    /// Fetches the current status of `tunnel_id`.
    async fn get_status(&self, tunnel_id: &str) -> Result<TunnelStatus>;
}
