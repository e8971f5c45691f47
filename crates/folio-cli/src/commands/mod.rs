pub mod config;
pub mod page;
pub mod tunnel;

use crate::render::Palette;
use anyhow::Result;
use clap::Args;
use folio_application::{PortfolioGateway, PortfolioPageUseCase, StatusEnrichmentService};
use folio_core::config::FolioConfig;
use folio_core::portfolio::PortfolioRepository;
use folio_infrastructure::{
    ConfigService, HttpTunnelStatusSource, JsonPortfolioRepository, PostgrestClient,
    SupabasePortfolioRepository,
};
use std::path::PathBuf;
use std::sync::Arc;

/// Where the portfolio comes from.
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// External profile identifier (defaults to the configured one)
    #[arg(long)]
    pub profile: Option<String>,

    /// Read a JSON export instead of the data API
    #[arg(long, value_name = "FILE")]
    pub data: Option<PathBuf>,
}

impl SourceArgs {
    pub fn profile_id(&self) -> Option<&str> {
        self.profile.as_deref()
    }
}

/// Configuration resolved once at startup and shared by every command.
pub struct AppContext {
    pub config_service: ConfigService,
    pub config: FolioConfig,
    pub palette: Palette,
}

impl AppContext {
    pub fn load(config_path: Option<PathBuf>) -> Result<Self> {
        let config_service = match config_path {
            Some(path) => ConfigService::with_path(path),
            None => ConfigService::new(),
        };
        let config = config_service.get_config()?;
        let palette = Palette::from_theme(&config.theme);

        Ok(Self {
            config_service,
            config,
            palette,
        })
    }

    async fn repository(&self, source: &SourceArgs) -> Result<Arc<dyn PortfolioRepository>> {
        match &source.data {
            Some(path) => {
                tracing::debug!("[Folio] Using offline data from {}", path.display());
                Ok(Arc::new(JsonPortfolioRepository::load(path).await?))
            }
            None => {
                let client = PostgrestClient::from_config(&self.config.data_source)?;
                Ok(Arc::new(SupabasePortfolioRepository::new(client)))
            }
        }
    }

    pub async fn gateway(&self, source: &SourceArgs) -> Result<PortfolioGateway> {
        let repository = self.repository(source).await?;
        Ok(PortfolioGateway::new(
            repository,
            self.config.default_profile_id().map(str::to_string),
        ))
    }

    /// Tunnel enrichment, or a pass-through service when no endpoint is configured.
    pub fn enrichment(&self) -> StatusEnrichmentService {
        match HttpTunnelStatusSource::from_config(&self.config.tunnel) {
            Ok(source) => StatusEnrichmentService::new(Arc::new(source)),
            Err(e) => {
                tracing::debug!("[Folio] Tunnel status disabled: {}", e);
                StatusEnrichmentService::disabled()
            }
        }
    }

    pub async fn page_use_case(&self, source: &SourceArgs) -> Result<PortfolioPageUseCase> {
        Ok(PortfolioPageUseCase::new(
            self.gateway(source).await?,
            self.enrichment(),
            self.config.pagination,
        ))
    }
}
