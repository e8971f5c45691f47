//! Application layer for Folio.
//!
//! Coordinates the data gateway, best-effort tunnel enrichment and the
//! per-list controllers that together make up one portfolio page load.

pub mod enrichment;
pub mod gateway;
pub mod page;
pub mod settle;

pub use enrichment::StatusEnrichmentService;
pub use gateway::PortfolioGateway;
pub use page::{PortfolioPage, PortfolioPageUseCase, SkillCategoryList};
pub use settle::settle_all;
