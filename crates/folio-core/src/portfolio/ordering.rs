//! Sort rules for each portfolio collection.
//!
//! Remote sources push these down as query parameters; in-memory sources
//! apply them with the functions below. All sorts are stable.

use super::model::{Certification, Education, Skill, WorkExperience};
use crate::project::Project;
use std::cmp::{Ordering, Reverse};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }
}

/// A single-column ordering rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOrder {
    pub column: &'static str,
    pub direction: Direction,
}

impl SortOrder {
    const fn desc(column: &'static str) -> Self {
        Self {
            column,
            direction: Direction::Descending,
        }
    }

    const fn asc(column: &'static str) -> Self {
        Self {
            column,
            direction: Direction::Ascending,
        }
    }
}

pub const WORK_EXPERIENCE_ORDER: SortOrder = SortOrder::desc("start_date");
pub const EDUCATION_ORDER: SortOrder = SortOrder::desc("start_year");
pub const SKILL_ORDER: SortOrder = SortOrder::asc("category");
pub const PROJECT_ORDER: SortOrder = SortOrder::desc("start_date");
pub const CERTIFICATION_ORDER: SortOrder = SortOrder::desc("issue_date");

pub fn sort_work_experiences(items: &mut [WorkExperience]) {
    items.sort_by_key(|item| Reverse(item.start_date));
}

pub fn sort_educations(items: &mut [Education]) {
    items.sort_by_key(|item| Reverse(item.start_year));
}

/// Ascending by category; skills without a category sort last, matching the
/// default NULL placement of an ascending SQL order.
pub fn sort_skills(items: &mut [Skill]) {
    items.sort_by(|a, b| match (&a.category, &b.category) {
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}

pub fn sort_projects(items: &mut [Project]) {
    items.sort_by_key(|item| Reverse(item.start_date));
}

pub fn sort_certifications(items: &mut [Certification]) {
    items.sort_by_key(|item| Reverse(item.issue_date));
}
