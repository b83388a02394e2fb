use crate::config::{
    DEFAULT_ALTERNATIVE_GAP, DEFAULT_CATALOG_SOURCE, DEFAULT_SKILLS_PREVIEW,
    DEFAULT_TIMEOUT_SECONDS,
};
use crate::core::ConfigProvider;
use crate::utils::error::{AdvisorError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdvisorConfig {
    #[serde(default)]
    pub catalog: CatalogConfig,
    pub presentation: Option<PresentationConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub source: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PresentationConfig {
    pub alternative_gap: Option<u8>,
    pub skills_preview: Option<usize>,
}

impl AdvisorConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| AdvisorError::ConfigError {
            message: format!(
                "Cannot read config file {}: {}",
                path.as_ref().display(),
                e
            ),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| AdvisorError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${COURSE_CATALOG_URL})，未設定的變數保留原文
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| AdvisorError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    fn presentation(&self) -> PresentationConfig {
        self.presentation.clone().unwrap_or_default()
    }
}

impl ConfigProvider for AdvisorConfig {
    fn catalog_source(&self) -> &str {
        self.catalog
            .source
            .as_deref()
            .unwrap_or(DEFAULT_CATALOG_SOURCE)
    }

    fn timeout_seconds(&self) -> u64 {
        self.catalog.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS)
    }

    fn alternative_gap(&self) -> u8 {
        self.presentation()
            .alternative_gap
            .unwrap_or(DEFAULT_ALTERNATIVE_GAP)
    }

    fn skills_preview(&self) -> usize {
        self.presentation()
            .skills_preview
            .unwrap_or(DEFAULT_SKILLS_PREVIEW)
    }
}

impl Validate for AdvisorConfig {
    fn validate(&self) -> Result<()> {
        // 來源可省略，由 --catalog 或預設值補上
        if let Some(source) = &self.catalog.source {
            validation::validate_catalog_location("catalog.source", source)?;
        }

        if let Some(timeout) = self.catalog.timeout_seconds {
            validation::validate_range("catalog.timeout_seconds", timeout, 1, 300)?;
        }

        if let Some(presentation) = &self.presentation {
            if let Some(gap) = presentation.alternative_gap {
                validation::validate_range("presentation.alternative_gap", gap, 0, 100)?;
            }
            if let Some(preview) = presentation.skills_preview {
                validation::validate_positive_number("presentation.skills_preview", preview, 1)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let config = AdvisorConfig::from_toml_str(
            r#"
[catalog]
source = "https://cdn.example.com/course_data.csv"
timeout_seconds = 5

[presentation]
alternative_gap = 15
skills_preview = 3
"#,
        )
        .unwrap();

        assert_eq!(
            config.catalog_source(),
            "https://cdn.example.com/course_data.csv"
        );
        assert_eq!(config.timeout_seconds(), 5);
        assert_eq!(config.alternative_gap(), 15);
        assert_eq!(config.skills_preview(), 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_defaults_apply_when_sections_missing() {
        let config = AdvisorConfig::from_toml_str("[catalog]\nsource = \"courses.csv\"\n").unwrap();
        assert_eq!(config.timeout_seconds(), DEFAULT_TIMEOUT_SECONDS);
        assert_eq!(config.alternative_gap(), DEFAULT_ALTERNATIVE_GAP);
        assert_eq!(config.skills_preview(), DEFAULT_SKILLS_PREVIEW);
    }

    #[test]
    fn test_presentation_only_config_is_valid() {
        let config =
            AdvisorConfig::from_toml_str("[presentation]\nalternative_gap = 10\n").unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.catalog_source(), DEFAULT_CATALOG_SOURCE);
        assert_eq!(config.alternative_gap(), 10);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("ADVISOR_TEST_CATALOG_URL", "https://test.example.com/c.csv");

        let config = AdvisorConfig::from_toml_str(
            "[catalog]\nsource = \"${ADVISOR_TEST_CATALOG_URL}\"\n",
        )
        .unwrap();
        assert_eq!(config.catalog_source(), "https://test.example.com/c.csv");

        std::env::remove_var("ADVISOR_TEST_CATALOG_URL");
    }

    #[test]
    fn test_unset_variable_is_left_in_place() {
        let config =
            AdvisorConfig::from_toml_str("[catalog]\nsource = \"${ADVISOR_TEST_UNSET_VAR}\"\n")
                .unwrap();
        assert_eq!(config.catalog_source(), "${ADVISOR_TEST_UNSET_VAR}");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_errors() {
        let bad_source =
            AdvisorConfig::from_toml_str("[catalog]\nsource = \"courses.json\"\n").unwrap();
        assert!(matches!(
            bad_source.validate(),
            Err(AdvisorError::InvalidConfigValueError { .. })
        ));

        let bad_gap = AdvisorConfig::from_toml_str(
            "[catalog]\nsource = \"courses.csv\"\n[presentation]\nalternative_gap = 150\n",
        )
        .unwrap();
        assert!(matches!(
            bad_gap.validate(),
            Err(AdvisorError::InvalidConfigValueError { .. })
        ));

        assert!(AdvisorConfig::from_toml_str("[catalog\nsource = 1").is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[catalog]\nsource = \"data/course_data.csv\"\n")
            .unwrap();

        let config = AdvisorConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.catalog_source(), "data/course_data.csv");
    }

    #[test]
    fn test_missing_file_is_config_error() {
        assert!(matches!(
            AdvisorConfig::from_file("/nonexistent/advisor.toml"),
            Err(AdvisorError::ConfigError { .. })
        ));
    }
}
