//! Best-effort tunnel status enrichment for projects.

use crate::settle::settle_all;
use folio_core::project::{EnrichedProject, Project};
use folio_core::tunnel::{TunnelStatus, TunnelStatusSource};
use folio_core::Result;
use std::sync::Arc;
use std::time::Duration;

/// Attaches live tunnel status to the projects that reference a tunnel.
///
/// Lookups run concurrently and never fail the batch: a project whose lookup
/// fails or times out is returned without status. The output always has the
/// same length and order as the input.
#[derive(Clone)]
pub struct StatusEnrichmentService {
    source: Option<Arc<dyn TunnelStatusSource>>,
    item_timeout: Option<Duration>,
}

impl StatusEnrichmentService {
    pub fn new(source: Arc<dyn TunnelStatusSource>) -> Self {
        Self {
            source: Some(source),
            item_timeout: None,
        }
    }

    /// A service that passes every project through without status.
    pub fn disabled() -> Self {
        Self {
            source: None,
            item_timeout: None,
        }
    }

    /// Bounds each individual lookup.
    pub fn with_timeout(mut self, item_timeout: Duration) -> Self {
        self.item_timeout = Some(item_timeout);
        self
    }

    pub fn is_enabled(&self) -> bool {
        self.source.is_some()
    }

    pub async fn enrich(&self, projects: Vec<Project>) -> Vec<EnrichedProject> {
        let Some(source) = self.source.as_ref() else {
            return projects.into_iter().map(EnrichedProject::bare).collect();
        };

        let lookups = projects.iter().map(|project| {
            let source = Arc::clone(source);
            let tunnel_id = project.tunnel_id().map(str::to_string);
            async move {
                match tunnel_id {
                    Some(id) => source.get_status(&id).await.map(Some),
                    None => Ok(None),
                }
            }
        });
        let outcomes: Vec<Result<Option<TunnelStatus>>> =
            settle_all(lookups, self.item_timeout).await;

        let enriched: Vec<EnrichedProject> = projects
            .into_iter()
            .zip(outcomes)
            .map(|(project, outcome)| match outcome {
                Ok(status) => EnrichedProject::new(project, status),
                Err(e) => {
                    tracing::warn!(
                        "[Enrichment] Tunnel status for project '{}' ({}) unavailable: {}",
                        project.project_name,
                        project.tunnel_id().unwrap_or_default(),
                        e
                    );
                    EnrichedProject::bare(project)
                }
            })
            .collect();

        tracing::debug!(
            "[Enrichment] {} of {} projects carry tunnel status",
            enriched.iter().filter(|p| p.tunnel_status.is_some()).count(),
            enriched.len()
        );
        enriched
    }
}
