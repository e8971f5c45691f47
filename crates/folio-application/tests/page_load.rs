//! End-to-end page load over the offline JSON source and a mock tunnel endpoint.

use folio_application::{PortfolioGateway, PortfolioPageUseCase, StatusEnrichmentService};
use folio_core::config::PaginationConfig;
use folio_core::tunnel::OnlineStatus;
use folio_infrastructure::{HttpTunnelStatusSource, JsonPortfolioRepository, PortfolioDocument};
use mockito::Server;
use std::sync::Arc;
use std::time::Duration;

const DOCUMENT: &str = r#"{
    "profiles": [
        {"id": "p-1", "id_profile": "jane", "full_name": "Jane Doe", "phone": "+62 812 3456"}
    ],
    "skills": [
        {"id": "s1", "profile_id": "p-1", "skill_name": "Rust", "category": "Backend", "proficiency_level": "Expert"},
        {"id": "s2", "profile_id": "p-1", "skill_name": "Figma", "proficiency_level": "Beginner"}
    ],
    "projects": [
        {"id": "a", "profile_id": "p-1", "project_name": "Alpha", "project_type": "Web", "start_date": "2024-03-01"},
        {"id": "b", "profile_id": "p-1", "project_name": "Beta", "project_type": "Web", "start_date": "2024-02-01", "id_tunnel": "t1"},
        {"id": "c", "profile_id": "p-1", "project_name": "Gamma", "project_type": "Mobile", "start_date": "2024-01-01", "id_tunnel": "t2"}
    ]
}"#;

fn gateway() -> PortfolioGateway {
    let document: PortfolioDocument = serde_json::from_str(DOCUMENT).unwrap();
    PortfolioGateway::new(
        Arc::new(JsonPortfolioRepository::new(document)),
        Some("jane".to_string()),
    )
}

#[tokio::test]
async fn test_page_load_with_partial_tunnel_failure() {
    let mut server = Server::new_async().await;
    let up = server
        .mock("GET", "/api/tunnel-status/t1")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id":"t1","web_url":"https://t1.example.com","online_status":"up"}"#)
        .create_async()
        .await;
    let failing = server
        .mock("GET", "/api/tunnel-status/t2")
        .with_status(500)
        .create_async()
        .await;

    let source = HttpTunnelStatusSource::new(server.url(), Duration::from_secs(5)).unwrap();
    let use_case = PortfolioPageUseCase::new(
        gateway(),
        StatusEnrichmentService::new(Arc::new(source)),
        PaginationConfig::default(),
    );

    let mut page = use_case.load(None).await.unwrap();
    up.assert_async().await;
    failing.assert_async().await;

    let projects = page.projects.items();
    let ids: Vec<&str> = projects.iter().map(|p| p.project.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b", "c"]);

    // a: no tunnel, passes through untouched
    assert!(projects[0].tunnel_status.is_none());
    assert!(!projects[0].is_tunnel_down());
    assert_eq!(projects[0].project, page.snapshot.projects[0]);

    // b: tunnel up
    assert_eq!(
        projects[1].tunnel_status.as_ref().map(|s| s.online_status),
        Some(OnlineStatus::Up)
    );
    assert!(!projects[1].is_tunnel_down());
    assert_eq!(projects[1].web_url(), Some("https://t1.example.com"));

    // c: lookup failed
    assert!(projects[2].tunnel_status.is_none());
    assert!(projects[2].is_tunnel_down());
    let phone = page.snapshot.profile.phone.clone().unwrap();
    assert!(
        projects[2]
            .tunnel_request_url(&phone)
            .unwrap()
            .starts_with("https://wa.me/628123456?text=")
    );

    assert_eq!(page.projects.total_pages(), 2);
    page.projects.go_to_page(2);
    page.projects.apply_filter("Mobile");
    assert_eq!(page.projects.current_page(), 1);
    assert_eq!(page.projects.filtered_len(), 1);

    let categories: Vec<&str> = page.skills.iter().map(|g| g.category.as_str()).collect();
    assert_eq!(categories, vec!["Backend", "Other"]);
}

#[tokio::test]
async fn test_page_load_without_tunnel_endpoint() {
    let use_case = PortfolioPageUseCase::new(
        gateway(),
        StatusEnrichmentService::disabled(),
        PaginationConfig::default(),
    );

    let page = use_case.load(Some("jane")).await.unwrap();
    assert_eq!(page.projects.items().len(), 3);
    assert!(page.projects.items().iter().all(|p| p.tunnel_status.is_none()));
}

#[tokio::test]
async fn test_unknown_profile_has_no_page() {
    let use_case = PortfolioPageUseCase::new(
        gateway(),
        StatusEnrichmentService::disabled(),
        PaginationConfig::default(),
    );

    let err = use_case.load(Some("someone-else")).await.unwrap_err();
    assert!(err.is_not_found());
}
