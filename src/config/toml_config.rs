use crate::core::estimator::EstimatorSettings;
use crate::core::export::ExportFormat;
use crate::domain::model::{AgeRange, CampaignRequest, Objective, Tone};
use crate::domain::ports::RequestSource;
use crate::utils::error::{CampaignError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_one_of, validate_path, validate_positive_number,
    validate_range, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Lowest base CPC that still rounds to a non-zero cost per click.
pub const MIN_BASE_CPC: f64 = 0.01;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub campaign: CampaignSection,
    pub estimator: Option<EstimatorSection>,
    pub output: Option<OutputSection>,
}

/// Request fields as written by hand; enums stay strings until
/// [`RequestSource::campaign_request`] parses them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampaignSection {
    pub name: String,
    pub industry: String,
    pub product: String,
    pub region: String,
    pub objective: Option<String>,
    pub daily_budget: f64,
    pub age_range: Option<String>,
    pub tone: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimatorSection {
    pub base_cpc: Option<f64>,
    pub projection_days: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSection {
    pub format: Option<String>,
    pub path: Option<String>,
}

impl TomlConfig {
    /// Load a campaign from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CampaignError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parse a campaign from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CampaignError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replace `${VAR}` with the environment value; unknown variables stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CampaignError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn estimator_settings(&self) -> EstimatorSettings {
        let defaults = EstimatorSettings::default();
        match &self.estimator {
            Some(section) => EstimatorSettings {
                base_cpc: section.base_cpc.unwrap_or(defaults.base_cpc),
                projection_days: section.projection_days.unwrap_or(defaults.projection_days),
            },
            None => defaults,
        }
    }

    pub fn output_format(&self) -> Result<ExportFormat> {
        self.output
            .as_ref()
            .and_then(|o| o.format.as_deref())
            .map(str::parse::<ExportFormat>)
            .unwrap_or(Ok(ExportFormat::Text))
    }

    pub fn output_path(&self) -> Option<&str> {
        self.output.as_ref().and_then(|o| o.path.as_deref())
    }

    /// Check value ranges and that every enum label parses.
    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("campaign.region", &self.campaign.region)?;

        if let Some(section) = &self.estimator {
            if let Some(base_cpc) = section.base_cpc {
                if base_cpc.is_nan() {
                    return Err(CampaignError::InvalidConfigValueError {
                        field: "estimator.base_cpc".to_string(),
                        value: base_cpc.to_string(),
                        reason: "Value must be a number".to_string(),
                    });
                }
                validate_range("estimator.base_cpc", base_cpc, MIN_BASE_CPC, 100.0)?;
            }
            if let Some(days) = section.projection_days {
                validate_positive_number("estimator.projection_days", days, 1)?;
            }
        }

        if let Some(output) = &self.output {
            if let Some(format) = &output.format {
                validate_one_of("output.format", &format.to_lowercase(), &ExportFormat::NAMES)?;
            }
            if let Some(path) = &output.path {
                validate_path("output.path", path)?;
            }
        }

        self.campaign_request().map(|_| ())
    }
}

impl RequestSource for TomlConfig {
    fn campaign_request(&self) -> Result<CampaignRequest> {
        let section = &self.campaign;
        Ok(CampaignRequest {
            name: section.name.clone(),
            industry: section.industry.clone(),
            product: section.product.clone(),
            region: section.region.clone(),
            objective: match &section.objective {
                Some(label) => label.parse::<Objective>()?,
                None => Objective::default(),
            },
            daily_budget: section.daily_budget,
            age_range: match &section.age_range {
                Some(label) => label.parse::<AgeRange>()?,
                None => AgeRange::default(),
            },
            tone: section
                .tone
                .as_deref()
                .map(Tone::parse_or_default)
                .unwrap_or_default(),
        })
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[campaign]
name = "IVF Turkey 2025"
industry = "Health/Medical"
product = "IVF"
region = "Francophone Africa"
daily_budget = 80
tone = "Émotionnel"
age_range = "35-45"

[estimator]
projection_days = 7

[output]
format = "json"
path = "./exports"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        let request = config.campaign_request().unwrap();

        assert_eq!(request.name, "IVF Turkey 2025");
        assert_eq!(request.tone, Tone::Emotional);
        assert_eq!(request.age_range, AgeRange::From35To45);
        assert_eq!(request.objective, Objective::LeadGeneration);
        assert_eq!(config.estimator_settings().projection_days, 7);
        assert_eq!(config.estimator_settings().base_cpc, 0.50);
        assert_eq!(config.output_format().unwrap(), ExportFormat::Json);
        assert_eq!(config.output_path(), Some("./exports"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TEST_CAMPAIGN_PRODUCT", "Coaching");

        let toml_content = r#"
[campaign]
name = "Coaching push"
industry = "Services"
product = "${TEST_CAMPAIGN_PRODUCT}"
region = "Europe"
daily_budget = 25.5
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.campaign.product, "Coaching");
        assert_eq!(config.output_format().unwrap(), ExportFormat::Text);

        std::env::remove_var("TEST_CAMPAIGN_PRODUCT");
    }

    #[test]
    fn test_config_validation() {
        let toml_content = r#"
[campaign]
name = "x"
industry = "Tourism"
product = "Hospitality"
region = "Europe"
daily_budget = 10

[estimator]
projection_days = 0
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_base_cpc_below_minimum_is_rejected() {
        let toml_content = r#"
[campaign]
name = "x"
industry = "Tourism"
product = "Hospitality"
region = "Europe"
daily_budget = 10

[estimator]
base_cpc = 0.005
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(matches!(
            config.validate(),
            Err(CampaignError::InvalidConfigValueError { ref field, .. }) if field == "estimator.base_cpc"
        ));

        let at_minimum = toml_content.replace("0.005", "0.01");
        let config = TomlConfig::from_toml_str(&at_minimum).unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unknown_output_format_is_rejected() {
        let toml_content = r#"
[campaign]
name = "x"
industry = "Tourism"
product = "Hospitality"
region = "Europe"
daily_budget = 10

[output]
format = "pdf"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(matches!(
            config.validate(),
            Err(CampaignError::InvalidConfigValueError { .. })
        ));
    }

    #[test]
    fn test_missing_section_is_config_error() {
        let err = TomlConfig::from_toml_str("[output]\nformat = \"json\"\n").unwrap_err();
        assert!(matches!(err, CampaignError::ConfigError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[campaign]
name = "file-test"
industry = "E-commerce"
product = "Home"
region = "Middle East"
daily_budget = 40
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.campaign.name, "file-test");
    }
}
