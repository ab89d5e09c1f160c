use crate::domain::catalog::Industry;
use crate::domain::model::PerformanceEstimate;
use crate::utils::error::DomainError;
use serde::{Deserialize, Serialize};

/// Per-industry coefficients applied to the base cost per click.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Multipliers {
    pub cpc: f64,
    pub ctr: f64,
    pub conversion: f64,
}

pub const DEFAULT_MULTIPLIERS: Multipliers = Multipliers {
    cpc: 1.0,
    ctr: 1.0,
    conversion: 0.10,
};

pub fn multipliers_for(industry: &str) -> Multipliers {
    match Industry::from_name(industry) {
        Some(Industry::Health) => Multipliers {
            cpc: 2.5,
            ctr: 1.8,
            conversion: 0.12,
        },
        Some(Industry::Tourism) => Multipliers {
            cpc: 1.2,
            ctr: 2.1,
            conversion: 0.08,
        },
        Some(Industry::ECommerce) => Multipliers {
            cpc: 0.8,
            ctr: 1.5,
            conversion: 0.15,
        },
        Some(Industry::Services) => Multipliers {
            cpc: 1.5,
            ctr: 1.3,
            conversion: 0.10,
        },
        None => DEFAULT_MULTIPLIERS,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EstimatorSettings {
    /// Cost per click before the industry multiplier.
    pub base_cpc: f64,
    /// Days of daily budget the aggregator projects over.
    pub projection_days: u32,
}

impl Default for EstimatorSettings {
    fn default() -> Self {
        Self {
            base_cpc: 0.50,
            projection_days: 30,
        }
    }
}

/// Estimate with the default settings.
pub fn estimate_performance(
    budget: f64,
    industry: &str,
) -> Result<PerformanceEstimate, DomainError> {
    estimate_performance_with(&EstimatorSettings::default(), budget, industry)
}

/// Linear estimator. Each step floors or rounds exactly once so results
/// stay reproducible:
///
/// ```text
/// cpc         = round2(base_cpc * m.cpc)
/// clicks      = floor(budget / cpc)
/// ctr         = round2(m.ctr)
/// impressions = floor(clicks / (ctr / 100))
/// conversions = floor(clicks * m.conversion)
/// cost/conv   = round2(budget / max(conversions, 1))
/// ```
pub fn estimate_performance_with(
    settings: &EstimatorSettings,
    budget: f64,
    industry: &str,
) -> Result<PerformanceEstimate, DomainError> {
    if !budget.is_finite() {
        return Err(DomainError::NonFiniteBudget { budget });
    }
    if budget <= 0.0 {
        return Err(DomainError::NonPositiveBudget { budget });
    }

    let m = multipliers_for(industry);

    let cpc = round2(settings.base_cpc * m.cpc);
    if !(cpc > 0.0) {
        return Err(DomainError::ZeroCostPerClick {
            industry: industry.to_string(),
        });
    }
    let clicks = (budget / cpc).floor();

    let ctr = round2(m.ctr);
    if !(ctr > 0.0) {
        return Err(DomainError::ZeroClickThroughRate {
            industry: industry.to_string(),
        });
    }
    let impressions = (clicks / (ctr / 100.0)).floor();
    let conversions = (clicks * m.conversion).floor();
    let cost_per_conversion = round2(budget / conversions.max(1.0));

    tracing::debug!(
        industry,
        budget,
        cpc,
        clicks,
        conversions,
        "performance estimated"
    );

    Ok(PerformanceEstimate {
        impressions: to_count(impressions, budget)?,
        clicks: to_count(clicks, budget)?,
        ctr,
        cpc,
        conversions: to_count(conversions, budget)?,
        cost_per_conversion,
    })
}

/// Counts must fit a `u64`; `as` would saturate silently.
fn to_count(value: f64, budget: f64) -> Result<u64, DomainError> {
    if value >= u64::MAX as f64 {
        return Err(DomainError::EstimateOutOfRange { budget });
    }
    Ok(value as u64)
}

/// Round to two decimals on the exact decimal value of `value`, ties to
/// even. Scaling by 100 first would round twice (`21.99 / 2` must stay
/// `10.99`).
pub fn round2(value: f64) -> f64 {
    format!("{:.2}", value).parse().unwrap_or(value)
}
