//! Portfolio domain module.
//!
//! # Module Structure
//!
//! - `model`: Profile and its child records, plus the `PortfolioSnapshot` aggregate
//! - `ordering`: Per-collection sort rules
//! - `repository`: Read-only repository trait
//! - `skill_groups`: Skills partitioned by category
//!
//! # Usage
//!
//! ```ignore
//! use folio_core::portfolio::{PortfolioRepository, PortfolioSnapshot, SkillGroups};
//! ```

mod model;
pub mod ordering;
pub mod repository;
mod skill_groups;

// Re-export public API
pub use model::{
    Certification, Education, Language, LanguageProficiency, PRESENT_LABEL, PortfolioSnapshot,
    Profile, Skill, SkillProficiency, WorkExperience,
};
pub use repository::PortfolioRepository;
pub use skill_groups::{OTHER_CATEGORY, SkillGroup, SkillGroups};
