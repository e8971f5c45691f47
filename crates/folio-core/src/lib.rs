pub mod config;
pub mod error;
pub mod list;
pub mod portfolio;
pub mod project;
pub mod tunnel;

// Re-export common error type
pub use error::{FolioError, Result};
