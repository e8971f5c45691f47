pub mod config_service;
pub mod http_tunnel_status_source;
pub mod json_portfolio_repository;
pub mod paths;
pub mod postgrest;
pub mod supabase_portfolio_repository;

pub use crate::config_service::ConfigService;
pub use crate::http_tunnel_status_source::HttpTunnelStatusSource;
pub use crate::json_portfolio_repository::{JsonPortfolioRepository, PortfolioDocument};
pub use crate::postgrest::PostgrestClient;
pub use crate::supabase_portfolio_repository::SupabasePortfolioRepository;
