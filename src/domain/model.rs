use crate::utils::error::{CampaignError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Named copy style selecting which canned ad-copy variant is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Tone {
    #[default]
    Professional,
    Emotional,
    Urgency,
}

impl Tone {
    pub const ALL: [Tone; 3] = [Tone::Professional, Tone::Emotional, Tone::Urgency];

    pub fn label(&self) -> &'static str {
        match self {
            Tone::Professional => "Professional",
            Tone::Emotional => "Emotional",
            Tone::Urgency => "Urgency",
        }
    }

    /// Case-insensitive, French labels accepted.
    pub fn parse(label: &str) -> Option<Tone> {
        match label.trim().to_lowercase().as_str() {
            "professional" | "professionnel" => Some(Tone::Professional),
            "emotional" | "émotionnel" | "emotionnel" => Some(Tone::Emotional),
            "urgency" | "urgence" => Some(Tone::Urgency),
            _ => None,
        }
    }

    pub fn parse_or_default(label: &str) -> Tone {
        Tone::parse(label).unwrap_or_default()
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Tone {
    type Err = CampaignError;

    fn from_str(s: &str) -> Result<Self> {
        // Unknown tones fall back instead of failing
        Ok(Tone::parse_or_default(s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AgeRange {
    #[serde(rename = "18-25")]
    From18To25,
    #[default]
    #[serde(rename = "25-35")]
    From25To35,
    #[serde(rename = "35-45")]
    From35To45,
    #[serde(rename = "45-55")]
    From45To55,
    #[serde(rename = "55+")]
    Over55,
}

impl AgeRange {
    pub const ALL: [AgeRange; 5] = [
        AgeRange::From18To25,
        AgeRange::From25To35,
        AgeRange::From35To45,
        AgeRange::From45To55,
        AgeRange::Over55,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AgeRange::From18To25 => "18-25",
            AgeRange::From25To35 => "25-35",
            AgeRange::From35To45 => "35-45",
            AgeRange::From45To55 => "45-55",
            AgeRange::Over55 => "55+",
        }
    }
}

impl fmt::Display for AgeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AgeRange {
    type Err = CampaignError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        AgeRange::ALL
            .into_iter()
            .find(|range| range.label() == trimmed)
            .ok_or_else(|| {
                CampaignError::validation(
                    "age_range",
                    format!(
                        "'{}' is not one of {}",
                        s,
                        AgeRange::ALL.map(|r| r.label()).join(", ")
                    ),
                )
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Objective {
    #[default]
    LeadGeneration,
    WebsiteTraffic,
    Conversions,
    Awareness,
}

impl Objective {
    pub const ALL: [Objective; 4] = [
        Objective::LeadGeneration,
        Objective::WebsiteTraffic,
        Objective::Conversions,
        Objective::Awareness,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Objective::LeadGeneration => "Lead generation",
            Objective::WebsiteTraffic => "Website traffic",
            Objective::Conversions => "Conversions",
            Objective::Awareness => "Awareness",
        }
    }
}

impl fmt::Display for Objective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Objective {
    type Err = CampaignError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| c.is_alphanumeric())
            .collect();
        match normalized.as_str() {
            "leadgeneration" | "leads" => Ok(Objective::LeadGeneration),
            "websitetraffic" | "traffic" => Ok(Objective::WebsiteTraffic),
            "conversions" => Ok(Objective::Conversions),
            "awareness" => Ok(Objective::Awareness),
            _ => Err(CampaignError::validation(
                "objective",
                format!("unknown objective '{}'", s),
            )),
        }
    }
}

/// One form submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignRequest {
    pub name: String,
    pub industry: String,
    pub product: String,
    pub region: String,
    #[serde(default)]
    pub objective: Objective,
    pub daily_budget: f64,
    #[serde(default)]
    pub age_range: AgeRange,
    #[serde(default)]
    pub tone: Tone,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdCopy {
    pub headline: String,
    pub primary_text: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Demographics {
    pub age_range: AgeRange,
    pub countries: Vec<String>,
    pub languages: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudienceTargeting {
    pub demographics: Demographics,
    pub interests: Vec<String>,
    pub behaviors: Vec<String>,
    pub exclusions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceEstimate {
    pub impressions: u64,
    pub clicks: u64,
    /// Percentage, e.g. `1.5` means 1.5%.
    pub ctr: f64,
    pub cpc: f64,
    pub conversions: u64,
    pub cost_per_conversion: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignResult {
    pub request: CampaignRequest,
    pub keywords: Vec<String>,
    pub ad_copy: AdCopy,
    pub targeting: AudienceTargeting,
    pub estimate: PerformanceEstimate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tone_parse_accepts_french_labels() {
        assert_eq!(Tone::parse("Urgence"), Some(Tone::Urgency));
        assert_eq!(Tone::parse("Émotionnel"), Some(Tone::Emotional));
        assert_eq!(Tone::parse("professional"), Some(Tone::Professional));
        assert_eq!(Tone::parse("Sarcastic"), None);
        assert_eq!(Tone::parse_or_default("Sarcastic"), Tone::Professional);
    }

    #[test]
    fn test_age_range_round_trips_labels() {
        for range in AgeRange::ALL {
            assert_eq!(range.label().parse::<AgeRange>().unwrap(), range);
        }
        assert!("60-70".parse::<AgeRange>().is_err());
    }

    #[test]
    fn test_objective_parsing() {
        assert_eq!(
            "Lead generation".parse::<Objective>().unwrap(),
            Objective::LeadGeneration
        );
        assert_eq!(
            "website-traffic".parse::<Objective>().unwrap(),
            Objective::WebsiteTraffic
        );
        assert!("world domination".parse::<Objective>().is_err());
    }

    #[test]
    fn test_age_range_serializes_as_label() {
        let json = serde_json::to_string(&AgeRange::Over55).unwrap();
        assert_eq!(json, "\"55+\"");
    }
}
