//! Data access gateway.
//!
//! Resolves a profile and assembles its `PortfolioSnapshot` from a
//! `PortfolioRepository`. The six child collections are fetched concurrently
//! and the aggregate is all-or-nothing: one failing collection fails the
//! whole snapshot.

use folio_core::portfolio::{PortfolioRepository, PortfolioSnapshot, Profile, SkillGroups};
use folio_core::project::Project;
use folio_core::{FolioError, Result};
use std::future::Future;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Read-only entry point to portfolio data.
#[derive(Clone)]
pub struct PortfolioGateway {
    repository: Arc<dyn PortfolioRepository>,
    /// Profile used when the caller does not name one; resolved once at startup.
    default_profile_id: Option<String>,
}

impl PortfolioGateway {
    /// Creates a gateway.
    ///
    /// # Arguments
    ///
    /// * `repository` - Source of portfolio records
    /// * `default_profile_id` - Fallback external profile id (blank means none)
    pub fn new(repository: Arc<dyn PortfolioRepository>, default_profile_id: Option<String>) -> Self {
        Self {
            repository,
            default_profile_id: default_profile_id.filter(|id| !id.trim().is_empty()),
        }
    }

    /// Picks the explicit id when it is non-blank, else the configured default.
    pub fn resolve_profile_id(&self, profile_id: Option<&str>) -> Result<String> {
        profile_id
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .or(self.default_profile_id.as_deref())
            .map(str::to_string)
            .ok_or_else(|| FolioError::config("Portfolio ID not found in configuration"))
    }

    /// Looks up the single active profile for `external_id`.
    ///
    /// Zero or several matches are both reported as `NotFound`.
    pub async fn find_profile(&self, external_id: &str) -> Result<Profile> {
        let mut profiles = self.repository.find_active_profiles(external_id).await?;
        match profiles.len() {
            1 => Ok(profiles.remove(0)),
            count => {
                tracing::warn!(
                    "[Gateway] Expected one active profile for '{}', found {}",
                    external_id,
                    count
                );
                Err(FolioError::not_found("profile", external_id))
            }
        }
    }

    /// Fetches the complete snapshot for a profile.
    ///
    /// # Errors
    ///
    /// - `Config` when no profile id can be resolved
    /// - `NotFound` when there is not exactly one active profile
    /// - `AggregateFetch` when any child collection fails
    pub async fn fetch_portfolio(&self, profile_id: Option<&str>) -> Result<PortfolioSnapshot> {
        let external_id = self.resolve_profile_id(profile_id)?;
        let profile = self.find_profile(&external_id).await?;
        let id = profile.id.as_str();
        let repo = &self.repository;

        tracing::debug!("[Gateway] Fetching collections for profile {}", id);

        let (work_experiences, educations, skills, languages, projects, certifications) = tokio::try_join!(
            collect("work experiences", repo.list_work_experiences(id)),
            collect("educations", repo.list_educations(id)),
            collect("skills", repo.list_skills(id)),
            collect("languages", repo.list_languages(id)),
            collect("projects", repo.list_projects(id)),
            collect("certifications", repo.list_certifications(id)),
        )
        .inspect_err(|e| tracing::error!("[Gateway] Portfolio '{}' failed: {}", external_id, e))?;

        tracing::info!(
            "[Gateway] Loaded portfolio '{}': {} projects, {} skills, {} work experiences",
            external_id,
            projects.len(),
            skills.len(),
            work_experiences.len()
        );

        Ok(PortfolioSnapshot {
            profile,
            work_experiences,
            educations,
            skills,
            languages,
            projects,
            certifications,
        })
    }

    /// Same as [`fetch_portfolio`](Self::fetch_portfolio), abandoning every
    /// in-flight query once `cancel` fires.
    pub async fn fetch_portfolio_cancellable(
        &self,
        profile_id: Option<&str>,
        cancel: &CancellationToken,
    ) -> Result<PortfolioSnapshot> {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                tracing::debug!("[Gateway] Portfolio fetch cancelled");
                Err(FolioError::Cancelled)
            }
            result = self.fetch_portfolio(profile_id) => result,
        }
    }

    /// Skills of a profile grouped by category.
    pub async fn skills_by_category(&self, profile_id: Option<&str>) -> Result<SkillGroups> {
        let external_id = self.resolve_profile_id(profile_id)?;
        let profile = self.find_profile(&external_id).await?;
        let skills = collect("skills", self.repository.list_skills(&profile.id)).await?;
        Ok(SkillGroups::from_skills(skills))
    }

    /// Featured projects of a profile, newest first.
    pub async fn featured_projects(&self, profile_id: Option<&str>) -> Result<Vec<Project>> {
        let external_id = self.resolve_profile_id(profile_id)?;
        let profile = self.find_profile(&external_id).await?;
        self.featured_projects_of(&profile).await
    }

    /// Featured projects of an already resolved profile.
    pub async fn featured_projects_of(&self, profile: &Profile) -> Result<Vec<Project>> {
        collect(
            "featured projects",
            self.repository.list_featured_projects(&profile.id),
        )
        .await
    }
}

/// Tags a child collection failure with the collection's name.
async fn collect<T>(collection: &'static str, query: impl Future<Output = Result<T>>) -> Result<T> {
    query
        .await
        .map_err(|e| FolioError::aggregate(collection, e))
}
