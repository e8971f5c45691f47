//! Portfolio domain models.
//!
//! Field names follow the column names of the backing tables so rows decode
//! without any renaming.

use crate::project::Project;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Label used when a date range is still open.
pub const PRESENT_LABEL: &str = "Present";

/// The person the portfolio belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Internal row id, the key every child collection references
    pub id: String,
    /// External identifier used to look the profile up
    pub id_profile: String,
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub linkedin_url: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkExperience {
    pub id: String,
    pub profile_id: String,
    pub company_name: String,
    pub position: String,
    #[serde(default)]
    pub employment_type: String,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub is_current: bool,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl WorkExperience {
    /// `"Jan 2021 – Present"` or `"Jan 2021 – Mar 2023"`.
    pub fn period_label(&self) -> String {
        let start = self.start_date.format("%b %Y");
        match (self.is_current, self.end_date) {
            (false, Some(end)) => format!("{} – {}", start, end.format("%b %Y")),
            _ => format!("{} – {}", start, PRESENT_LABEL),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub id: String,
    pub profile_id: String,
    pub institution_name: String,
    pub degree: String,
    #[serde(default)]
    pub field_of_study: String,
    pub start_year: i32,
    #[serde(default)]
    pub end_year: Option<i32>,
    #[serde(default)]
    pub is_current: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Education {
    /// `"2019 – Present"` while studying, otherwise `"2015 – 2019"`.
    pub fn period_label(&self) -> String {
        match (self.is_current, self.end_year) {
            (false, Some(end)) => format!("{} – {}", self.start_year, end),
            (false, None) => format!("{} –", self.start_year),
            (true, _) => format!("{} – {}", self.start_year, PRESENT_LABEL),
        }
    }

    pub fn status_label(&self) -> &'static str {
        if self.is_current {
            "Studying"
        } else {
            "Completed"
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillProficiency {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl SkillProficiency {
    /// Fill ratio for progress bars, in percent.
    pub fn percent(self) -> u8 {
        match self {
            Self::Beginner => 25,
            Self::Intermediate => 50,
            Self::Advanced => 75,
            Self::Expert => 100,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
            Self::Expert => "Expert",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub id: String,
    pub profile_id: String,
    pub skill_name: String,
    #[serde(default)]
    pub category: Option<String>,
    pub proficiency_level: SkillProficiency,
    #[serde(default)]
    pub years_of_experience: Option<u32>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Skill {
    /// Category used for grouping; blank or missing categories become "Other".
    pub fn category_or_other(&self) -> &str {
        match self.category.as_deref().map(str::trim) {
            Some(category) if !category.is_empty() => category,
            _ => super::skill_groups::OTHER_CATEGORY,
        }
    }

    /// `"1 year"`, `"4 years"`, or `None` when unknown or zero.
    pub fn experience_label(&self) -> Option<String> {
        match self.years_of_experience {
            None | Some(0) => None,
            Some(1) => Some("1 year".to_string()),
            Some(years) => Some(format!("{} years", years)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LanguageProficiency {
    Native,
    Fluent,
    Intermediate,
    Beginner,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Language {
    pub id: String,
    pub profile_id: String,
    pub language_name: String,
    pub proficiency_level: LanguageProficiency,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certification {
    pub id: String,
    pub profile_id: String,
    pub certification_name: String,
    pub issuing_organization: String,
    pub issue_date: NaiveDate,
    #[serde(default)]
    pub expiry_date: Option<NaiveDate>,
    #[serde(default)]
    pub credential_id: Option<String>,
    #[serde(default)]
    pub credential_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Certification {
    /// Whether the certification has lapsed as of `today`.
    pub fn is_expired(&self, today: NaiveDate) -> bool {
        self.expiry_date.is_some_and(|expiry| expiry < today)
    }
}

/// Everything fetched for one profile in one request.
///
/// Built by the gateway and never modified afterwards; enrichment results are
/// kept alongside, not written back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSnapshot {
    pub profile: Profile,
    pub work_experiences: Vec<WorkExperience>,
    pub educations: Vec<Education>,
    pub skills: Vec<Skill>,
    pub languages: Vec<Language>,
    pub projects: Vec<Project>,
    pub certifications: Vec<Certification>,
}

impl PortfolioSnapshot {
    pub fn profile_id(&self) -> &str {
        &self.profile.id
    }
}
