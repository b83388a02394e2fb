pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command, ProfileArgs};

pub use config::{AdvisorConfig, HttpCatalogSource, LocalCatalogSource, Settings};
pub use core::advisor::{Advice, AdvisorEngine, CourseMatch, Recommendation};
pub use core::catalog::Catalog;
pub use domain::model::{Course, MatchLevel, Profile};
pub use utils::error::{AdvisorError, Result};
