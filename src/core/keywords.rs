use crate::domain::catalog::Industry;

/// Keyword phrases for a product, picked by industry.
///
/// Unknown industries get a three-phrase generic list built from the raw
/// product string. Never returns an empty list.
pub fn select_keywords(product: &str, industry: &str) -> Vec<String> {
    let p = product;
    match Industry::from_name(industry) {
        Some(Industry::Health) => vec![
            format!("{p} pas cher"),
            format!("{p} Turquie"),
            format!("prix {p}"),
            format!("meilleure clinique {p}"),
            format!("{p} tout compris"),
            format!("{p} tourisme médical"),
            format!("{p} traitement à l'étranger"),
        ],
        Some(Industry::Tourism) => vec![
            format!("{p} promotion"),
            format!("voyage {p}"),
            format!("séjour {p}"),
            format!("{p} pas cher"),
            format!("vacances {p}"),
            format!("réservation {p}"),
        ],
        Some(Industry::ECommerce) => vec![
            format!("{p} en ligne"),
            format!("acheter {p}"),
            format!("{p} livraison"),
            format!("{p} qualité"),
            format!("boutique en ligne {p}"),
        ],
        Some(Industry::Services) => vec![
            format!("{p} professionnel"),
            format!("expert {p}"),
            format!("formation {p}"),
            format!("consultant {p}"),
            format!("{p} service personnalisé"),
        ],
        None => vec![p.to_string(), format!("service {p}"), format!("{p} qualité")],
    }
}
