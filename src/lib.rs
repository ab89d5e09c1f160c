pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::{storage::LocalStorage, toml_config::TomlConfig};

pub use crate::core::ad_copy::select_ad_copy;
pub use crate::core::audience::build_audience;
pub use crate::core::estimator::{estimate_performance, EstimatorSettings};
pub use crate::core::export::{ExportFormat, Exporter};
pub use crate::core::generator::CampaignGenerator;
pub use crate::core::keywords::select_keywords;
pub use crate::domain::model::{
    AdCopy, AgeRange, AudienceTargeting, CampaignRequest, CampaignResult, Demographics,
    Objective, PerformanceEstimate, Tone,
};
pub use crate::domain::ports::{RequestSource, Storage};
pub use crate::utils::error::{CampaignError, DomainError, Result};
