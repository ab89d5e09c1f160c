//! Static lookup data: industries, regions and the showcase template library.
//!
//! Every table is an ordered `const` slice so listings keep the order the
//! form presents them in.

use serde::Serialize;

pub const HEALTH: &str = "Health/Medical";
pub const TOURISM: &str = "Tourism";
pub const E_COMMERCE: &str = "E-commerce";
pub const SERVICES: &str = "Services";

pub const FRANCOPHONE_AFRICA: &str = "Francophone Africa";
pub const EUROPE: &str = "Europe";
pub const MIDDLE_EAST: &str = "Middle East";

/// Industry name -> products offered in that industry.
pub const INDUSTRY_CATALOG: &[(&str, &[&str])] = &[
    (HEALTH, &["IVF", "Cosmetic surgery", "Dental", "Ophthalmology"]),
    (TOURISM, &["Package tours", "Hospitality", "Restaurants"]),
    (E_COMMERCE, &["Fashion", "Electronics", "Home"]),
    (SERVICES, &["Consulting", "Training", "Coaching"]),
];

/// Region group -> countries it covers.
pub const REGION_CATALOG: &[(&str, &[&str])] = &[
    (
        FRANCOPHONE_AFRICA,
        &["Morocco", "Algeria", "Tunisia", "Senegal", "Ivory Coast"],
    ),
    (EUROPE, &["France", "Belgium", "Switzerland", "Canada"]),
    (MIDDLE_EAST, &["Lebanon", "United Arab Emirates", "Qatar"]),
];

/// Industries we have dedicated tables for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Industry {
    Health,
    Tourism,
    ECommerce,
    Services,
}

impl Industry {
    /// Exact match on the catalog name; anything else is "unknown" and
    /// callers fall back to their generic tables.
    pub fn from_name(name: &str) -> Option<Industry> {
        match name {
            HEALTH => Some(Industry::Health),
            TOURISM => Some(Industry::Tourism),
            E_COMMERCE => Some(Industry::ECommerce),
            SERVICES => Some(Industry::Services),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Industry::Health => HEALTH,
            Industry::Tourism => TOURISM,
            Industry::ECommerce => E_COMMERCE,
            Industry::Services => SERVICES,
        }
    }
}

pub fn industries() -> impl Iterator<Item = &'static str> {
    INDUSTRY_CATALOG.iter().map(|(name, _)| *name)
}

pub fn regions() -> impl Iterator<Item = &'static str> {
    REGION_CATALOG.iter().map(|(name, _)| *name)
}

pub fn products_for(industry: &str) -> Option<&'static [&'static str]> {
    INDUSTRY_CATALOG
        .iter()
        .find(|(name, _)| *name == industry)
        .map(|(_, products)| *products)
}

pub fn countries_for(region: &str) -> Option<&'static [&'static str]> {
    REGION_CATALOG
        .iter()
        .find(|(name, _)| *name == region)
        .map(|(_, countries)| *countries)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateEntry {
    pub name: &'static str,
    pub industry: &'static str,
    pub performance: &'static str,
    pub description: &'static str,
}

pub const TEMPLATE_LIBRARY: &[TemplateEntry] = &[
    TemplateEntry {
        name: "IVF Turkey - Emotional approach",
        industry: HEALTH,
        performance: "CTR: 3.2%",
        description: "Template tuned for IVF services in Turkey",
    },
    TemplateEntry {
        name: "E-commerce Fashion - Flash sale",
        industry: E_COMMERCE,
        performance: "CTR: 2.8%",
        description: "Template for time-limited promotions",
    },
    TemplateEntry {
        name: "Professional Training - B2B",
        industry: SERVICES,
        performance: "CTR: 1.9%",
        description: "Template for professional training services",
    },
];

pub fn find_template(name: &str) -> Option<&'static TemplateEntry> {
    TEMPLATE_LIBRARY
        .iter()
        .find(|t| t.name.eq_ignore_ascii_case(name.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order_is_stable() {
        let names: Vec<&str> = industries().collect();
        assert_eq!(names, vec![HEALTH, TOURISM, E_COMMERCE, SERVICES]);

        let regions: Vec<&str> = regions().collect();
        assert_eq!(regions, vec![FRANCOPHONE_AFRICA, EUROPE, MIDDLE_EAST]);
    }

    #[test]
    fn test_catalog_lookups() {
        assert_eq!(products_for(E_COMMERCE).unwrap()[0], "Fashion");
        assert_eq!(countries_for(EUROPE).unwrap().len(), 4);
        assert!(products_for("Agriculture").is_none());
        assert!(countries_for("Antarctica").is_none());
    }

    #[test]
    fn test_every_catalog_industry_has_a_table() {
        for name in industries() {
            let industry = Industry::from_name(name).unwrap();
            assert_eq!(industry.name(), name);
        }
    }

    #[test]
    fn test_find_template_is_case_insensitive() {
        let entry = find_template("professional training - b2b").unwrap();
        assert_eq!(entry.industry, SERVICES);
        assert!(find_template("unknown").is_none());
    }
}
