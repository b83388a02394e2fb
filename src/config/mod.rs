pub mod cli;
pub mod remote;
pub mod toml_config;

use crate::core::{CatalogSource, ConfigProvider};
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[cfg(feature = "cli")]
use clap::{Args, Parser, Subcommand};

pub use cli::LocalCatalogSource;
pub use remote::HttpCatalogSource;
pub use toml_config::AdvisorConfig;

pub const DEFAULT_CATALOG_SOURCE: &str = "data/course_data.csv";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;
pub const DEFAULT_ALTERNATIVE_GAP: u8 = 20;
pub const DEFAULT_SKILLS_PREVIEW: usize = 5;

/// 依位置選擇目錄來源：http(s) 走 reqwest，其餘視為本地檔案
pub fn catalog_source_for(location: &str, timeout: Duration) -> Result<Box<dyn CatalogSource>> {
    let location = location.trim();
    if validation::is_remote_location(location) {
        Ok(Box::new(HttpCatalogSource::new(location, timeout)?))
    } else {
        Ok(Box::new(LocalCatalogSource::new(location)))
    }
}

/// 合併後的執行設定（配置檔 + 命令列覆寫）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub catalog_source: String,
    pub timeout_seconds: u64,
    pub alternative_gap: u8,
    pub skills_preview: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            catalog_source: DEFAULT_CATALOG_SOURCE.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            alternative_gap: DEFAULT_ALTERNATIVE_GAP,
            skills_preview: DEFAULT_SKILLS_PREVIEW,
        }
    }
}

impl Settings {
    pub fn from_provider(provider: &dyn ConfigProvider) -> Self {
        Self {
            catalog_source: provider.catalog_source().to_string(),
            timeout_seconds: provider.timeout_seconds(),
            alternative_gap: provider.alternative_gap(),
            skills_preview: provider.skills_preview(),
        }
    }

    pub fn with_catalog_source(mut self, source: Option<&str>) -> Self {
        if let Some(source) = source {
            self.catalog_source = source.to_string();
        }
        self
    }

    pub fn open_catalog_source(&self) -> Result<Box<dyn CatalogSource>> {
        catalog_source_for(
            &self.catalog_source,
            Duration::from_secs(self.timeout_seconds),
        )
    }
}

impl ConfigProvider for Settings {
    fn catalog_source(&self) -> &str {
        &self.catalog_source
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }

    fn alternative_gap(&self) -> u8 {
        self.alternative_gap
    }

    fn skills_preview(&self) -> usize {
        self.skills_preview
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validation::validate_catalog_location("catalog", &self.catalog_source)?;
        validation::validate_range("timeout_seconds", self.timeout_seconds, 1, 300)?;
        validation::validate_range("alternative_gap", self.alternative_gap, 0, 100)?;
        validation::validate_positive_number("skills_preview", self.skills_preview, 1)?;
        Ok(())
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "course-advisor")]
#[command(about = "Recommends ICTAK courses from a learner profile")]
pub struct CliConfig {
    /// Catalog CSV path or http(s) URL (overrides the config file)
    #[arg(long, global = true)]
    pub catalog: Option<String>,

    /// TOML configuration file
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[arg(long, global = true, help = "Print results as JSON")]
    pub json: bool,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List every course in the catalog
    List,
    /// Compare duration, fees, level and salary across courses
    Compare,
    /// Look up a course by (possibly misspelled) name
    Info {
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },
    /// Recommend a course for a learner profile
    Recommend(ProfileArgs),
    /// Full skills list and program highlights for a course
    Details {
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },
    /// Career paths and salary ranges for a course
    Careers {
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },
    /// Show the clarifying questions for undecided learners
    Discover {
        #[arg(long)]
        experience: Option<String>,
    },
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Args)]
pub struct ProfileArgs {
    #[arg(long)]
    pub interest: Option<String>,

    #[arg(long)]
    pub role: Option<String>,

    #[arg(long)]
    pub experience: Option<String>,

    #[arg(long)]
    pub goal: Option<String>,
}

#[cfg(feature = "cli")]
impl ProfileArgs {
    pub fn to_profile(&self) -> crate::core::Profile {
        crate::core::Profile {
            interest: self.interest.clone(),
            career_role: self.role.clone(),
            experience: self.experience.clone(),
            goal: self.goal.clone(),
        }
    }
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 載入配置檔（若有）並套用 `--catalog` 覆寫
    pub fn resolve_settings(&self) -> Result<Settings> {
        let settings = match &self.config {
            Some(path) => {
                let file_config = AdvisorConfig::from_file(path)?;
                file_config.validate()?;
                Settings::from_provider(&file_config)
            }
            None => Settings::default(),
        };

        let settings = settings.with_catalog_source(self.catalog.as_deref());
        settings.validate()?;
        Ok(settings)
    }
}
