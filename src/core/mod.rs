pub mod advisor;
pub mod catalog;
pub mod classifier;
pub mod discovery;
pub mod reasoning;
pub mod resolver;
pub mod scorer;
pub mod selector;

pub use crate::domain::model::{Course, MatchResult, Profile, Selection};
pub use crate::domain::ports::{CatalogSource, ConfigProvider};
pub use crate::utils::error::Result;
