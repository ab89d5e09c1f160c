use crate::domain::catalog::{self, Industry};
use crate::domain::model::{AgeRange, AudienceTargeting, Demographics};

pub const DEFAULT_COUNTRY: &str = "France";
pub const BEHAVIORS: [&str; 3] = ["frequent travelers", "online shoppers", "mobile users"];
pub const EXCLUSIONS: [&str; 2] = ["competitors", "industry employees"];

/// Regions whose name carries this marker also get Arabic-language targeting.
const AFRICA_MARKER: &str = "Africa";

pub fn build_audience(industry: &str, region: &str, age_range: AgeRange) -> AudienceTargeting {
    let countries = catalog::countries_for(region)
        .map(|list| list.iter().map(|c| c.to_string()).collect())
        .unwrap_or_else(|| vec![DEFAULT_COUNTRY.to_string()]);

    AudienceTargeting {
        demographics: Demographics {
            age_range,
            countries,
            languages: languages_for(region),
        },
        interests: interests_for(industry),
        behaviors: strings(&BEHAVIORS),
        exclusions: strings(&EXCLUSIONS),
    }
}

fn languages_for(region: &str) -> Vec<String> {
    if region.contains(AFRICA_MARKER) {
        strings(&["French", "Arabic"])
    } else {
        strings(&["French"])
    }
}

fn interests_for(industry: &str) -> Vec<String> {
    match Industry::from_name(industry) {
        Some(Industry::Health) => strings(&["Health & fitness", "Medical care", "Wellness"]),
        Some(Industry::Tourism) => strings(&["Travel", "Holidays", "Discovery"]),
        Some(Industry::ECommerce) => strings(&["Online shopping", "Fashion", "Technology"]),
        Some(Industry::Services) => {
            strings(&["Personal development", "Professional training"])
        }
        None => strings(&["General interests"]),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{regions, E_COMMERCE, FRANCOPHONE_AFRICA};

    #[test]
    fn test_francophone_africa_adds_arabic() {
        let audience = build_audience(E_COMMERCE, FRANCOPHONE_AFRICA, AgeRange::From18To25);
        assert_eq!(audience.demographics.languages, vec!["French", "Arabic"]);
        assert_eq!(audience.demographics.countries[0], "Morocco");
        assert_eq!(audience.demographics.age_range, AgeRange::From18To25);
    }

    #[test]
    fn test_other_regions_are_french_only() {
        for region in regions().filter(|r| *r != FRANCOPHONE_AFRICA) {
            let audience = build_audience(E_COMMERCE, region, AgeRange::default());
            assert!(!audience.demographics.languages.contains(&"Arabic".to_string()));
        }
        let unknown = build_audience(E_COMMERCE, "Atlantis", AgeRange::default());
        assert_eq!(unknown.demographics.languages, vec!["French"]);
    }

    #[test]
    fn test_unknown_region_and_industry_fall_back() {
        let audience = build_audience("Mining", "Atlantis", AgeRange::Over55);
        assert_eq!(audience.demographics.countries, vec!["France"]);
        assert_eq!(audience.interests, vec!["General interests"]);
    }

    #[test]
    fn test_behaviors_and_exclusions_are_constant() {
        let a = build_audience("Tourism", "Europe", AgeRange::From35To45);
        let b = build_audience("Nothing", "Nowhere", AgeRange::From45To55);
        assert_eq!(a.behaviors, b.behaviors);
        assert_eq!(a.exclusions, vec!["competitors", "industry employees"]);
        assert_eq!(b.behaviors.len(), 3);
    }
}
