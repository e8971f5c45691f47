//! Project domain model and its enriched form.

use crate::tunnel::TunnelStatus;
use chrono::NaiveDate;
use reqwest::Url;
use serde::{Deserialize, Serialize};

/// Kind of project; doubles as the projects list filter key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectType {
    Web,
    Mobile,
    Desktop,
    #[serde(other)]
    Other,
}

impl ProjectType {
    pub const ALL: [ProjectType; 4] = [Self::Web, Self::Mobile, Self::Desktop, Self::Other];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Web => "Web",
            Self::Mobile => "Mobile",
            Self::Desktop => "Desktop",
            Self::Other => "Other",
        }
    }

    /// Filter keys offered to the user, starting with "all".
    pub fn filter_options() -> Vec<&'static str> {
        std::iter::once(crate::list::ALL_FILTER)
            .chain(Self::ALL.iter().map(|kind| kind.as_str()))
            .collect()
    }
}

impl std::fmt::Display for ProjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectCategory {
    Work,
    #[default]
    Personal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub profile_id: String,
    pub project_name: String,
    pub project_type: ProjectType,
    #[serde(default)]
    pub category: ProjectCategory,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub project_url: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    /// Reference to an externally hosted deployment whose status can be checked
    #[serde(default)]
    pub id_tunnel: Option<String>,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub is_ongoing: bool,
    #[serde(default)]
    pub client_name: Option<String>,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Project {
    /// The tunnel id, if any. Only an empty string counts as absent; any
    /// other value is passed to the status source as stored.
    pub fn tunnel_id(&self) -> Option<&str> {
        self.id_tunnel.as_deref().filter(|id| !id.is_empty())
    }

    pub fn has_tunnel(&self) -> bool {
        self.tunnel_id().is_some()
    }
}

/// A project plus the tunnel status attached during enrichment.
///
/// `tunnel_status` is `None` both for projects without a tunnel and for
/// projects whose status query failed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedProject {
    #[serde(flatten)]
    pub project: Project,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tunnel_status: Option<TunnelStatus>,
}

impl EnrichedProject {
    pub fn new(project: Project, tunnel_status: Option<TunnelStatus>) -> Self {
        Self {
            project,
            tunnel_status,
        }
    }

    /// A project that was not (or could not be) enriched.
    pub fn bare(project: Project) -> Self {
        Self::new(project, None)
    }

    /// Key the projects list filters on.
    pub fn filter_key(&self) -> &str {
        self.project.project_type.as_str()
    }

    /// True when the project has a tunnel that is not confirmed up.
    pub fn is_tunnel_down(&self) -> bool {
        self.project.has_tunnel()
            && !self
                .tunnel_status
                .as_ref()
                .is_some_and(|status| status.online_status.is_up())
    }

    /// Tunnel URL when known, otherwise the project's own URL.
    pub fn web_url(&self) -> Option<&str> {
        self.tunnel_status
            .as_ref()
            .map(|status| status.web_url.as_str())
            .filter(|url| !url.is_empty())
            .or_else(|| {
                self.project
                    .project_url
                    .as_deref()
                    .filter(|url| !url.is_empty())
            })
    }

    pub fn has_web_url(&self) -> bool {
        self.web_url().is_some()
    }

    pub fn is_personal_completed(&self) -> bool {
        self.project.category == ProjectCategory::Personal && !self.project.is_ongoing
    }

    pub fn is_work_project(&self) -> bool {
        self.project.category == ProjectCategory::Work
    }

    /// WhatsApp link asking the owner to start this project's tunnel.
    ///
    /// Returns `None` when `phone` holds no digits.
    pub fn tunnel_request_url(&self, phone: &str) -> Option<String> {
        let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
        if digits.is_empty() {
            return None;
        }
        let message = format!(
            "Hi, can you please start the tunnel for the \"{}\" project?",
            self.project.project_name
        );
        let mut url = Url::parse(&format!("https://wa.me/{}", digits)).ok()?;
        url.query_pairs_mut().append_pair("text", &message);
        Some(url.to_string())
    }
}

impl From<Project> for EnrichedProject {
    fn from(project: Project) -> Self {
        Self::bare(project)
    }
}

/// `"1 project"` / `"3 projects"`.
pub fn project_count_label(count: usize) -> String {
    if count == 1 {
        "1 project".to_string()
    } else {
        format!("{} projects", count)
    }
}

/// Message shown when a filter matches nothing.
pub fn empty_filter_message(active_filter: &str) -> String {
    if active_filter == crate::list::ALL_FILTER {
        "No projects have been added yet".to_string()
    } else {
        format!("No {} projects found", active_filter.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tunnel::OnlineStatus;

    fn project(id: &str, tunnel: Option<&str>) -> Project {
        Project {
            id: id.to_string(),
            profile_id: "p".to_string(),
            project_name: format!("Project {}", id),
            project_type: ProjectType::Web,
            category: ProjectCategory::Personal,
            description: None,
            technologies: vec!["rust".to_string()],
            project_url: None,
            github_url: None,
            image_url: None,
            id_tunnel: tunnel.map(str::to_string),
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: None,
            is_ongoing: false,
            client_name: None,
            role: "Author".to_string(),
            featured: false,
            created_at: None,
            updated_at: None,
        }
    }

    fn status(online_status: OnlineStatus, web_url: &str) -> TunnelStatus {
        TunnelStatus {
            id: "t1".to_string(),
            web_url: web_url.to_string(),
            online_status,
        }
    }

    #[test]
    fn test_tunnel_down_rules() {
        assert!(!EnrichedProject::bare(project("a", None)).is_tunnel_down());
        assert!(EnrichedProject::bare(project("b", Some("t1"))).is_tunnel_down());
        assert!(
            !EnrichedProject::new(project("c", Some("t1")), Some(status(OnlineStatus::Up, "")))
                .is_tunnel_down()
        );
        assert!(
            EnrichedProject::new(project("d", Some("t1")), Some(status(OnlineStatus::Down, "")))
                .is_tunnel_down()
        );
        assert!(
            EnrichedProject::new(
                project("e", Some("t1")),
                Some(status(OnlineStatus::Unknown, ""))
            )
            .is_tunnel_down()
        );
    }

    #[test]
    fn test_empty_tunnel_id_is_absent() {
        let p = project("a", Some(""));
        assert_eq!(p.tunnel_id(), None);
        assert!(!p.has_tunnel());
        assert!(!EnrichedProject::bare(p).is_tunnel_down());
    }

    #[test]
    fn test_whitespace_tunnel_id_is_kept() {
        let p = project("a", Some("  "));
        assert_eq!(p.tunnel_id(), Some("  "));
        assert!(p.has_tunnel());
        assert!(EnrichedProject::bare(p).is_tunnel_down());
    }

    #[test]
    fn test_web_url_prefers_tunnel() {
        let mut p = project("a", Some("t1"));
        p.project_url = Some("https://a.example.com".to_string());

        let bare = EnrichedProject::bare(p.clone());
        assert_eq!(bare.web_url(), Some("https://a.example.com"));

        let enriched = EnrichedProject::new(
            p.clone(),
            Some(status(OnlineStatus::Up, "https://t1.example.com")),
        );
        assert_eq!(enriched.web_url(), Some("https://t1.example.com"));

        let empty_tunnel_url = EnrichedProject::new(p, Some(status(OnlineStatus::Up, "")));
        assert_eq!(empty_tunnel_url.web_url(), Some("https://a.example.com"));

        assert!(!EnrichedProject::bare(project("b", None)).has_web_url());
    }

    #[test]
    fn test_category_flags() {
        let mut p = project("a", None);
        assert!(EnrichedProject::bare(p.clone()).is_personal_completed());

        p.is_ongoing = true;
        assert!(!EnrichedProject::bare(p.clone()).is_personal_completed());

        p.category = ProjectCategory::Work;
        let work = EnrichedProject::bare(p);
        assert!(work.is_work_project());
        assert!(!work.is_personal_completed());
    }

    #[test]
    fn test_tunnel_request_url() {
        let enriched = EnrichedProject::bare(project("a", Some("t1")));
        let url = enriched.tunnel_request_url("+62 812-3456").unwrap();
        assert!(url.starts_with("https://wa.me/628123456?text=Hi%2C+can+you+please+start"));
        assert!(url.contains("%22Project+a%22"));
        assert_eq!(enriched.tunnel_request_url("n/a"), None);
    }

    #[test]
    fn test_unknown_project_type_decodes_as_other() {
        let kind: ProjectType = serde_json::from_str("\"Game\"").unwrap();
        assert_eq!(kind, ProjectType::Other);
        assert_eq!(
            ProjectType::filter_options(),
            vec!["all", "Web", "Mobile", "Desktop", "Other"]
        );
    }

    #[test]
    fn test_enriched_project_serializes_flat() {
        let enriched = EnrichedProject::new(
            project("a", Some("t1")),
            Some(status(OnlineStatus::Up, "https://t1.example.com")),
        );
        let value = serde_json::to_value(&enriched).unwrap();
        assert_eq!(value["id"], "a");
        assert_eq!(value["tunnel_status"]["online_status"], "up");
    }

    #[test]
    fn test_labels() {
        assert_eq!(project_count_label(1), "1 project");
        assert_eq!(project_count_label(0), "0 projects");
        assert_eq!(empty_filter_message("all"), "No projects have been added yet");
        assert_eq!(empty_filter_message("Web"), "No web projects found");
    }
}
