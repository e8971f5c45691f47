//! JSON-file-backed PortfolioRepository implementation.
//!
//! Serves a portfolio export offline. The document mirrors the remote tables:
//!
//! ```text
//! {
//!   "profiles":         [ ... ],
//!   "work_experiences": [ ... ],
//!   "educations":       [ ... ],
//!   "skills":           [ ... ],
//!   "languages":        [ ... ],
//!   "projects":         [ ... ],
//!   "certifications":   [ ... ]
//! }
//! ```
//!
//! Rows are filtered by `profile_id` and sorted with the same rules the
//! remote source applies.

use async_trait::async_trait;
use folio_core::portfolio::ordering;
use folio_core::portfolio::{
    Certification, Education, Language, PortfolioRepository, Profile, Skill, WorkExperience,
};
use folio_core::project::Project;
use folio_core::{FolioError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Every table of a portfolio export.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioDocument {
    pub profiles: Vec<Profile>,
    pub work_experiences: Vec<WorkExperience>,
    pub educations: Vec<Education>,
    pub skills: Vec<Skill>,
    pub languages: Vec<Language>,
    pub projects: Vec<Project>,
    pub certifications: Vec<Certification>,
}

#[derive(Debug, Clone)]
pub struct JsonPortfolioRepository {
    document: PortfolioDocument,
}

impl JsonPortfolioRepository {
    pub fn new(document: PortfolioDocument) -> Self {
        Self { document }
    }

    /// Reads and parses the document at `path`.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            FolioError::io(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let document: PortfolioDocument = serde_json::from_str(&content)?;
        tracing::debug!(
            "[JsonPortfolio] Loaded {} profiles from {}",
            document.profiles.len(),
            path.display()
        );
        Ok(Self::new(document))
    }

    fn owned_by<T, F>(rows: &[T], profile_id: &str, owner: F) -> Vec<T>
    where
        T: Clone,
        F: Fn(&T) -> &str,
    {
        rows.iter()
            .filter(|row| owner(*row) == profile_id)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl PortfolioRepository for JsonPortfolioRepository {
    async fn find_active_profiles(&self, external_id: &str) -> Result<Vec<Profile>> {
        Ok(self
            .document
            .profiles
            .iter()
            .filter(|profile| profile.id_profile == external_id && profile.is_active)
            .cloned()
            .collect())
    }

    async fn list_work_experiences(&self, profile_id: &str) -> Result<Vec<WorkExperience>> {
        let mut rows = Self::owned_by(&self.document.work_experiences, profile_id, |row| {
            row.profile_id.as_str()
        });
        ordering::sort_work_experiences(&mut rows);
        Ok(rows)
    }

    async fn list_educations(&self, profile_id: &str) -> Result<Vec<Education>> {
        let mut rows =
            Self::owned_by(&self.document.educations, profile_id, |row| row.profile_id.as_str());
        ordering::sort_educations(&mut rows);
        Ok(rows)
    }

    async fn list_skills(&self, profile_id: &str) -> Result<Vec<Skill>> {
        let mut rows =
            Self::owned_by(&self.document.skills, profile_id, |row| row.profile_id.as_str());
        ordering::sort_skills(&mut rows);
        Ok(rows)
    }

    async fn list_languages(&self, profile_id: &str) -> Result<Vec<Language>> {
        Ok(Self::owned_by(&self.document.languages, profile_id, |row| {
            row.profile_id.as_str()
        }))
    }

    async fn list_projects(&self, profile_id: &str) -> Result<Vec<Project>> {
        let mut rows =
            Self::owned_by(&self.document.projects, profile_id, |row| row.profile_id.as_str());
        ordering::sort_projects(&mut rows);
        Ok(rows)
    }

    async fn list_featured_projects(&self, profile_id: &str) -> Result<Vec<Project>> {
        let mut rows = self.list_projects(profile_id).await?;
        rows.retain(|project| project.featured);
        Ok(rows)
    }

    async fn list_certifications(&self, profile_id: &str) -> Result<Vec<Certification>> {
        let mut rows = Self::owned_by(&self.document.certifications, profile_id, |row| {
            row.profile_id.as_str()
        });
        ordering::sort_certifications(&mut rows);
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const DOCUMENT: &str = r#"{
        "profiles": [
            {"id": "p-1", "id_profile": "jane", "full_name": "Jane Doe"},
            {"id": "p-2", "id_profile": "old", "full_name": "Old", "is_active": false}
        ],
        "work_experiences": [
            {"id": "w-old", "profile_id": "p-1", "company_name": "A", "position": "Dev", "start_date": "2018-01-01"},
            {"id": "w-new", "profile_id": "p-1", "company_name": "B", "position": "Lead", "start_date": "2022-06-01", "is_current": true},
            {"id": "w-other", "profile_id": "p-2", "company_name": "C", "position": "Dev", "start_date": "2023-01-01"}
        ],
        "projects": [
            {"id": "a", "profile_id": "p-1", "project_name": "A", "project_type": "Web", "start_date": "2021-01-01", "featured": true},
            {"id": "b", "profile_id": "p-1", "project_name": "B", "project_type": "Mobile", "start_date": "2023-01-01"},
            {"id": "c", "profile_id": "p-1", "project_name": "C", "project_type": "Game", "start_date": "2022-01-01", "featured": true}
        ]
    }"#;

    async fn repository() -> (TempDir, JsonPortfolioRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("portfolio.json");
        std::fs::write(&path, DOCUMENT).unwrap();
        let repo = JsonPortfolioRepository::load(&path).await.unwrap();
        (temp_dir, repo)
    }

    #[tokio::test]
    async fn test_only_active_profiles_match() {
        let (_dir, repo) = repository().await;
        assert_eq!(repo.find_active_profiles("jane").await.unwrap().len(), 1);
        assert!(repo.find_active_profiles("old").await.unwrap().is_empty());
        assert!(repo.find_active_profiles("nobody").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_collections_are_scoped_and_sorted() {
        let (_dir, repo) = repository().await;

        let work = repo.list_work_experiences("p-1").await.unwrap();
        let ids: Vec<&str> = work.iter().map(|w| w.id.as_str()).collect();
        assert_eq!(ids, vec!["w-new", "w-old"]);

        let projects = repo.list_projects("p-1").await.unwrap();
        let ids: Vec<&str> = projects.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c", "a"]);

        let featured = repo.list_featured_projects("p-1").await.unwrap();
        let ids: Vec<&str> = featured.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a"]);

        assert!(repo.list_skills("p-1").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = JsonPortfolioRepository::load(temp_dir.path().join("missing.json"))
            .await
            .unwrap_err();
        assert!(matches!(err, FolioError::Io { .. }));
    }
}
