//! One portfolio page load: gateway, enrichment and per-list state.

use crate::enrichment::StatusEnrichmentService;
use crate::gateway::PortfolioGateway;
use folio_core::config::PaginationConfig;
use folio_core::list::ListController;
use folio_core::portfolio::{PortfolioSnapshot, Skill, SkillGroups, WorkExperience};
use folio_core::project::EnrichedProject;
use folio_core::Result;

/// Skills of one category with their own pagination.
#[derive(Debug, Clone)]
pub struct SkillCategoryList {
    pub category: String,
    pub list: ListController<Skill>,
}

/// Everything the presentation layer needs for one page.
///
/// The snapshot stays as fetched; the projects list holds the enriched copies.
#[derive(Debug, Clone)]
pub struct PortfolioPage {
    pub snapshot: PortfolioSnapshot,
    pub projects: ListController<EnrichedProject>,
    pub skills: Vec<SkillCategoryList>,
    pub work_experiences: ListController<WorkExperience>,
}

impl PortfolioPage {
    /// Builds independent list controllers over a snapshot and its enriched projects.
    pub fn new(
        snapshot: PortfolioSnapshot,
        enriched_projects: Vec<EnrichedProject>,
        pagination: &PaginationConfig,
    ) -> Self {
        let projects = ListController::with_filter(
            enriched_projects,
            pagination.projects,
            EnrichedProject::filter_key,
        );
        let skills = SkillGroups::from_skills(snapshot.skills.iter().cloned())
            .into_iter()
            .map(|group| SkillCategoryList {
                category: group.category,
                list: ListController::new(group.skills, pagination.skills),
            })
            .collect();
        let work_experiences = ListController::new(
            snapshot.work_experiences.clone(),
            pagination.work_experiences,
        );

        Self {
            snapshot,
            projects,
            skills,
            work_experiences,
        }
    }

    pub fn skill_category(&self, category: &str) -> Option<&SkillCategoryList> {
        self.skills.iter().find(|group| group.category == category)
    }

    pub fn skill_category_mut(&mut self, category: &str) -> Option<&mut SkillCategoryList> {
        self.skills.iter_mut().find(|group| group.category == category)
    }
}

/// Loads a [`PortfolioPage`].
#[derive(Clone)]
pub struct PortfolioPageUseCase {
    gateway: PortfolioGateway,
    enrichment: StatusEnrichmentService,
    pagination: PaginationConfig,
}

impl PortfolioPageUseCase {
    pub fn new(
        gateway: PortfolioGateway,
        enrichment: StatusEnrichmentService,
        pagination: PaginationConfig,
    ) -> Self {
        Self {
            gateway,
            enrichment,
            pagination,
        }
    }

    pub fn gateway(&self) -> &PortfolioGateway {
        &self.gateway
    }

    /// Fetches the snapshot, then enriches its projects.
    ///
    /// Fails only when the snapshot cannot be fetched; enrichment problems
    /// leave the affected projects without status.
    pub async fn load(&self, profile_id: Option<&str>) -> Result<PortfolioPage> {
        let snapshot = self.gateway.fetch_portfolio(profile_id).await?;
        let enriched = self.enrichment.enrich(snapshot.projects.clone()).await;
        Ok(PortfolioPage::new(snapshot, enriched, &self.pagination))
    }

    /// Re-queries tunnel status and hands the new projects to the list,
    /// keeping its filter and re-clamping its page.
    pub async fn refresh_tunnels(&self, page: &mut PortfolioPage) {
        let enriched = self.enrichment.enrich(page.snapshot.projects.clone()).await;
        page.projects.set_items(enriched);
    }
}
