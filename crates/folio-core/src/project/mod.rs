//! Project domain module.
//!
//! # Module Structure
//!
//! - `model`: `Project`, `ProjectType`, `ProjectCategory` and `EnrichedProject`
//!   with the derived display predicates (`is_tunnel_down`, `has_web_url`, ...)

mod model;

pub use model::{
    EnrichedProject, Project, ProjectCategory, ProjectType, empty_filter_message,
    project_count_label,
};
