// Shared building blocks for the skill-radar binary and its tests
pub mod catalog;
pub mod config;
pub mod domain;
pub mod logging;
pub mod radar;
pub mod settings;

pub use catalog::{CatalogError, SkillCatalog};
pub use domain::{SkillCategory, SkillEntry, Theme};
