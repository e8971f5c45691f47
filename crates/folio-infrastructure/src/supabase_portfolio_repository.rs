//! PostgREST-backed PortfolioRepository implementation.

use crate::postgrest::{PostgrestClient, TableQuery};
use async_trait::async_trait;
use folio_core::Result;
use folio_core::portfolio::ordering::{
    CERTIFICATION_ORDER, EDUCATION_ORDER, PROJECT_ORDER, SKILL_ORDER, WORK_EXPERIENCE_ORDER,
};
use folio_core::portfolio::{
    Certification, Education, Language, PortfolioRepository, Profile, Skill, WorkExperience,
};
use folio_core::project::Project;

pub const PROFILES_TABLE: &str = "portfolio_profiles";
pub const WORK_EXPERIENCES_TABLE: &str = "portfolio_work_experiences";
pub const EDUCATIONS_TABLE: &str = "portfolio_educations";
pub const SKILLS_TABLE: &str = "portfolio_skills";
pub const LANGUAGES_TABLE: &str = "portfolio_languages";
pub const PROJECTS_TABLE: &str = "portfolio_projects";
pub const CERTIFICATIONS_TABLE: &str = "portfolio_certifications";

/// Reads portfolio tables through the Supabase REST API.
///
/// Tables:
/// ```text
/// portfolio_profiles          (id_profile, is_active)
/// portfolio_work_experiences  (profile_id) order start_date.desc
/// portfolio_educations        (profile_id) order start_year.desc
/// portfolio_skills            (profile_id) order category.asc
/// portfolio_languages         (profile_id)
/// portfolio_projects          (profile_id[, featured]) order start_date.desc
/// portfolio_certifications    (profile_id) order issue_date.desc
/// ```
#[derive(Clone)]
pub struct SupabasePortfolioRepository {
    client: PostgrestClient,
}

impl SupabasePortfolioRepository {
    pub fn new(client: PostgrestClient) -> Self {
        Self { client }
    }

    fn by_profile(table: &'static str, profile_id: &str) -> TableQuery {
        TableQuery::new(table).eq("profile_id", profile_id)
    }
}

#[async_trait]
impl PortfolioRepository for SupabasePortfolioRepository {
    async fn find_active_profiles(&self, external_id: &str) -> Result<Vec<Profile>> {
        let query = TableQuery::new(PROFILES_TABLE)
            .eq("id_profile", external_id)
            .eq("is_active", true);
        self.client.select(&query).await
    }

    async fn list_work_experiences(&self, profile_id: &str) -> Result<Vec<WorkExperience>> {
        let query = Self::by_profile(WORK_EXPERIENCES_TABLE, profile_id).order(WORK_EXPERIENCE_ORDER);
        self.client.select(&query).await
    }

    async fn list_educations(&self, profile_id: &str) -> Result<Vec<Education>> {
        let query = Self::by_profile(EDUCATIONS_TABLE, profile_id).order(EDUCATION_ORDER);
        self.client.select(&query).await
    }

    async fn list_skills(&self, profile_id: &str) -> Result<Vec<Skill>> {
        let query = Self::by_profile(SKILLS_TABLE, profile_id).order(SKILL_ORDER);
        self.client.select(&query).await
    }

    async fn list_languages(&self, profile_id: &str) -> Result<Vec<Language>> {
        let query = Self::by_profile(LANGUAGES_TABLE, profile_id);
        self.client.select(&query).await
    }

    async fn list_projects(&self, profile_id: &str) -> Result<Vec<Project>> {
        let query = Self::by_profile(PROJECTS_TABLE, profile_id).order(PROJECT_ORDER);
        self.client.select(&query).await
    }

    async fn list_featured_projects(&self, profile_id: &str) -> Result<Vec<Project>> {
        let query = Self::by_profile(PROJECTS_TABLE, profile_id)
            .eq("featured", true)
            .order(PROJECT_ORDER);
        self.client.select(&query).await
    }

    async fn list_certifications(&self, profile_id: &str) -> Result<Vec<Certification>> {
        let query = Self::by_profile(CERTIFICATIONS_TABLE, profile_id).order(CERTIFICATION_ORDER);
        self.client.select(&query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};
    use std::time::Duration;

    fn repository(url: String) -> SupabasePortfolioRepository {
        let client = PostgrestClient::new(url, "anon-key", Duration::from_secs(5)).unwrap();
        SupabasePortfolioRepository::new(client)
    }

    #[tokio::test]
    async fn test_find_active_profiles_sends_filters_and_auth() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/rest/v1/portfolio_profiles")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("select".into(), "*".into()),
                Matcher::UrlEncoded("id_profile".into(), "eq.jane".into()),
                Matcher::UrlEncoded("is_active".into(), "eq.true".into()),
            ]))
            .match_header("apikey", "anon-key")
            .match_header("authorization", "Bearer anon-key")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"[{"id":"p-1","id_profile":"jane","full_name":"Jane Doe"}]"#)
            .create_async()
            .await;

        let profiles = repository(server.url())
            .find_active_profiles("jane")
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(profiles.len(), 1);
        assert_eq!(profiles[0].id, "p-1");
    }

    #[tokio::test]
    async fn test_list_projects_orders_newest_first() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/rest/v1/portfolio_projects")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("profile_id".into(), "eq.p-1".into()),
                Matcher::UrlEncoded("order".into(), "start_date.desc".into()),
            ]))
            .with_status(200)
            .with_body(
                r#"[{"id":"a","profile_id":"p-1","project_name":"A","project_type":"Web",
                     "category":"personal","id_tunnel":"t1","start_date":"2024-02-01"}]"#,
            )
            .create_async()
            .await;

        let projects = repository(server.url()).list_projects("p-1").await.unwrap();

        mock.assert_async().await;
        assert_eq!(projects[0].id_tunnel.as_deref(), Some("t1"));
    }

    #[tokio::test]
    async fn test_featured_projects_filter() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/rest/v1/portfolio_projects")
            .match_query(Matcher::UrlEncoded("featured".into(), "eq.true".into()))
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;

        let projects = repository(server.url())
            .list_featured_projects("p-1")
            .await
            .unwrap();

        mock.assert_async().await;
        assert!(projects.is_empty());
    }

    #[tokio::test]
    async fn test_error_status_is_http_error() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/rest/v1/portfolio_skills")
            .match_query(Matcher::Any)
            .with_status(500)
            .with_body("relation does not exist")
            .create_async()
            .await;

        let err = repository(server.url()).list_skills("p-1").await.unwrap_err();
        assert_eq!(
            err,
            folio_core::FolioError::http(500, "relation does not exist")
        );
    }
}
