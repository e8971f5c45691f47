//! Portfolio repository trait.
//!
//! Defines the read-only interface to the store that holds portfolio data.

use super::model::{Certification, Education, Language, Profile, Skill, WorkExperience};
use crate::error::Result;
use crate::project::Project;
use async_trait::async_trait;

/// An abstract, read-only source of portfolio records.
///
/// This trait decouples the gateway from the concrete store (a PostgREST API,
/// a JSON document on disk, a test double).
///
/// # Implementation Notes
///
/// Every `list_*` method is scoped to an internal profile id and must return
/// rows in the collection's order (see [`super::ordering`]). Implementations
/// report failures as errors; an empty collection is `Ok(vec![])`.
#[async_trait]
pub trait PortfolioRepository: Send + Sync {
    /// Finds profiles whose external id matches and that are active.
    ///
    /// # Returns
    ///
    /// - `Ok(Vec<Profile>)`: every matching row (callers expect exactly one)
    /// - `Err(_)`: Error occurred during retrieval
    async fn find_active_profiles(&self, external_id: &str) -> Result<Vec<Profile>>;

    /// Work experiences, newest `start_date` first.
    async fn list_work_experiences(&self, profile_id: &str) -> Result<Vec<WorkExperience>>;

    /// Educations, newest `start_year` first.
    async fn list_educations(&self, profile_id: &str) -> Result<Vec<Education>>;

    /// Skills, ascending by `category`.
    async fn list_skills(&self, profile_id: &str) -> Result<Vec<Skill>>;

    /// Languages in source order.
    async fn list_languages(&self, profile_id: &str) -> Result<Vec<Language>>;

    /// Projects, newest `start_date` first.
    async fn list_projects(&self, profile_id: &str) -> Result<Vec<Project>>;

    /// Featured projects only, newest `start_date` first.
    async fn list_featured_projects(&self, profile_id: &str) -> Result<Vec<Project>>;

    /// Certifications, newest `issue_date` first.
    async fn list_certifications(&self, profile_id: &str) -> Result<Vec<Certification>>;
}
