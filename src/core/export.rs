use crate::domain::model::CampaignResult;
use crate::domain::ports::Storage;
use crate::utils::error::{CampaignError, Result};
use std::fmt::Write as _;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// Full human-readable report.
    #[default]
    Text,
    /// Short "copy configuration" block.
    Config,
    Json,
    Csv,
}

impl ExportFormat {
    pub const NAMES: [&'static str; 4] = ["text", "config", "json", "csv"];

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Text | ExportFormat::Config => "txt",
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = CampaignError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(ExportFormat::Text),
            "config" => Ok(ExportFormat::Config),
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            other => Err(CampaignError::InvalidConfigValueError {
                field: "format".to_string(),
                value: other.to_string(),
                reason: format!("Valid formats: {}", Self::NAMES.join(", ")),
            }),
        }
    }
}

pub fn render(result: &CampaignResult, format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Text => Ok(render_report(result)),
        ExportFormat::Config => Ok(render_config_text(result)),
        ExportFormat::Json => to_json(result),
        ExportFormat::Csv => to_csv(result),
    }
}

/// The short block users paste into the ads manager by hand.
pub fn render_config_text(result: &CampaignResult) -> String {
    format!(
        "Campaign: {}\nProduct: {}\nBudget: {}€/day\nHeadline: {}\nKeywords: {}\n",
        result.request.name,
        result.request.product,
        result.request.daily_budget,
        result.ad_copy.headline,
        result.keywords.join(", ")
    )
}

pub fn render_report(result: &CampaignResult) -> String {
    let req = &result.request;
    let est = &result.estimate;
    let demo = &result.targeting.demographics;
    let mut out = String::new();

    // writeln! into a String cannot fail
    let _ = writeln!(out, "📣 {} ({} / {})", req.name, req.industry, req.product);
    let _ = writeln!(
        out,
        "   Objective: {} | Tone: {} | Budget: {}€/day",
        req.objective, req.tone, req.daily_budget
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "📊 Estimated performance");
    let _ = writeln!(out, "   Impressions: {}", thousands(est.impressions));
    let _ = writeln!(out, "   Clicks: {}", thousands(est.clicks));
    let _ = writeln!(out, "   CTR: {}%", est.ctr);
    let _ = writeln!(out, "   CPC: {:.2}€", est.cpc);
    let _ = writeln!(out, "   Conversions: {}", est.conversions);
    let _ = writeln!(out, "   Cost per conversion: {:.2}€", est.cost_per_conversion);
    let _ = writeln!(out);
    let _ = writeln!(out, "📝 Ad copy");
    let _ = writeln!(out, "   Headline: {}", result.ad_copy.headline);
    let _ = writeln!(out, "   Primary text: {}", result.ad_copy.primary_text);
    let _ = writeln!(out, "   Description: {}", result.ad_copy.description);
    let _ = writeln!(out);
    let _ = writeln!(out, "🔑 Keywords: {}", result.keywords.join(", "));
    let _ = writeln!(out);
    let _ = writeln!(out, "🎯 Targeting");
    let _ = writeln!(out, "   Countries: {}", demo.countries.join(", "));
    let _ = writeln!(out, "   Languages: {}", demo.languages.join(", "));
    let _ = writeln!(out, "   Age range: {}", demo.age_range);
    let _ = writeln!(out, "   Interests: {}", result.targeting.interests.join(", "));
    let _ = writeln!(out, "   Behaviors: {}", result.targeting.behaviors.join(", "));
    let _ = writeln!(out, "   Exclusions: {}", result.targeting.exclusions.join(", "));
    out
}

pub fn to_json(result: &CampaignResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// Flat `field,value` rows; list fields are joined with `; `.
pub fn to_csv(result: &CampaignResult) -> Result<String> {
    let req = &result.request;
    let est = &result.estimate;
    let demo = &result.targeting.demographics;

    let rows: Vec<(&str, String)> = vec![
        ("name", req.name.clone()),
        ("industry", req.industry.clone()),
        ("product", req.product.clone()),
        ("region", req.region.clone()),
        ("objective", req.objective.to_string()),
        ("daily_budget", req.daily_budget.to_string()),
        ("age_range", req.age_range.to_string()),
        ("tone", req.tone.to_string()),
        ("keywords", result.keywords.join("; ")),
        ("headline", result.ad_copy.headline.clone()),
        ("primary_text", result.ad_copy.primary_text.clone()),
        ("description", result.ad_copy.description.clone()),
        ("countries", demo.countries.join("; ")),
        ("languages", demo.languages.join("; ")),
        ("interests", result.targeting.interests.join("; ")),
        ("behaviors", result.targeting.behaviors.join("; ")),
        ("exclusions", result.targeting.exclusions.join("; ")),
        ("impressions", est.impressions.to_string()),
        ("clicks", est.clicks.to_string()),
        ("ctr", est.ctr.to_string()),
        ("cpc", est.cpc.to_string()),
        ("conversions", est.conversions.to_string()),
        ("cost_per_conversion", est.cost_per_conversion.to_string()),
    ];

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["field", "value"])?;
    for (field, value) in &rows {
        writer.write_record([*field, value.as_str()])?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| CampaignError::IoError(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| CampaignError::ConfigError {
        message: format!("CSV output is not UTF-8: {}", e),
    })
}

/// `1234567` -> `1,234,567`
pub fn thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Slug used for exported file names.
pub fn file_stem(name: &str) -> String {
    let slug: String = name
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect();
    let slug = slug
        .split('-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-");
    if slug.is_empty() {
        "campaign".to_string()
    } else {
        slug
    }
}

/// Writes rendered campaigns through a [`Storage`] backend.
pub struct Exporter<S: Storage> {
    storage: S,
}

impl<S: Storage> Exporter<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn export(&self, result: &CampaignResult, format: ExportFormat) -> Result<String> {
        let body = render(result, format)?;
        let file_name = format!(
            "{}.{}",
            file_stem(&result.request.name),
            format.extension()
        );
        let path = self.storage.write_file(&file_name, body.as_bytes())?;
        tracing::info!("campaign exported to {}", path);
        Ok(path)
    }
}
