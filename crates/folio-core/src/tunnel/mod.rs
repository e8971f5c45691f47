//! Tunnel domain module.
//!
//! A tunnel is an independently reachable deployment of a personal project
//! whose online state is checked out-of-band.

mod model;
mod source;

pub use model::{OnlineStatus, TunnelStatus};
pub use source::TunnelStatusSource;
