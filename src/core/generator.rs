use crate::core::ad_copy::render_ad_copy;
use crate::core::audience::build_audience;
use crate::core::estimator::{estimate_performance_with, EstimatorSettings};
use crate::core::keywords::select_keywords;
use crate::domain::model::{CampaignRequest, CampaignResult};
use crate::utils::error::Result;
use crate::utils::validation::validate_required;
use chrono::{Local, NaiveDate};

/// Runs the four generation steps for one request and bundles the output.
#[derive(Debug, Clone, Default)]
pub struct CampaignGenerator {
    settings: EstimatorSettings,
}

impl CampaignGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: EstimatorSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &EstimatorSettings {
        &self.settings
    }

    /// Daily budget times the projection window.
    pub fn projected_budget(&self, request: &CampaignRequest) -> f64 {
        request.daily_budget * f64::from(self.settings.projection_days)
    }

    pub fn generate(&self, request: &CampaignRequest) -> Result<CampaignResult> {
        self.generate_on(request, Local::now().date_naive())
    }

    /// Same as [`generate`](Self::generate) with an explicit date for the
    /// urgency offer deadline.
    pub fn generate_on(&self, request: &CampaignRequest, today: NaiveDate) -> Result<CampaignResult> {
        validate_required("name", &request.name)?;
        validate_required("industry", &request.industry)?;
        validate_required("product", &request.product)?;

        tracing::info!(
            campaign = %request.name,
            industry = %request.industry,
            product = %request.product,
            "generating campaign"
        );

        let keywords = select_keywords(&request.product, &request.industry);
        tracing::debug!("selected {} keywords", keywords.len());

        let ad_copy = render_ad_copy(&request.product, request.tone, today);
        tracing::debug!(tone = %request.tone, "ad copy rendered");

        let targeting = build_audience(&request.industry, &request.region, request.age_range);
        tracing::debug!(
            "targeting {} countries",
            targeting.demographics.countries.len()
        );

        let estimate = estimate_performance_with(
            &self.settings,
            self.projected_budget(request),
            &request.industry,
        )?;

        tracing::info!(
            impressions = estimate.impressions,
            clicks = estimate.clicks,
            conversions = estimate.conversions,
            "campaign generated"
        );

        Ok(CampaignResult {
            request: request.clone(),
            keywords,
            ad_copy,
            targeting,
            estimate,
        })
    }
}
