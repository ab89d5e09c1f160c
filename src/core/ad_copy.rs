use crate::domain::model::{AdCopy, Tone};
use chrono::{Days, Local, NaiveDate};

/// How long an urgency offer stays valid.
pub const URGENCY_OFFER_DAYS: u64 = 7;

/// Ad copy for `product` in the given tone, dated from today's local date.
///
/// Unknown tones render the Professional copy. `industry` is accepted for
/// call-site symmetry with the other selectors; the copy tables are keyed
/// by tone only.
pub fn select_ad_copy(product: &str, industry: &str, tone: &str) -> AdCopy {
    select_ad_copy_on(product, industry, tone, Local::now().date_naive())
}

pub fn select_ad_copy_on(product: &str, _industry: &str, tone: &str, today: NaiveDate) -> AdCopy {
    render_ad_copy(product, Tone::parse_or_default(tone), today)
}

pub fn render_ad_copy(product: &str, tone: Tone, today: NaiveDate) -> AdCopy {
    let p = product;
    match tone {
        Tone::Professional => AdCopy {
            headline: format!("🏆 {p} - Excellence et Expertise Reconnues"),
            primary_text: format!(
                "Découvrez notre {p} de qualité supérieure. Équipe d'experts, résultats garantis."
            ),
            description: "Plus de 1000 clients satisfaits. Devis gratuit sous 24h.".to_string(),
        },
        Tone::Emotional => AdCopy {
            headline: format!("💖 Réalisez Votre Rêve avec {p}"),
            primary_text: format!(
                "Votre bonheur nous tient à cœur. {p} personnalisé selon vos besoins."
            ),
            description: "Accompagnement complet de A à Z. Équipe bienveillante à votre écoute."
                .to_string(),
        },
        Tone::Urgency => AdCopy {
            headline: format!("⚡ Offre Limitée - {p} -50%"),
            primary_text: format!(
                "Profitez de cette promotion exceptionnelle sur {p}. Places limitées!"
            ),
            description: format!(
                "Réservez maintenant. Offre valable jusqu'au {}",
                offer_deadline(today)
            ),
        },
    }
}

/// `today + 7 days` as `DD/MM/YYYY`.
pub fn offer_deadline(today: NaiveDate) -> String {
    today
        .checked_add_days(Days::new(URGENCY_OFFER_DAYS))
        .unwrap_or(today)
        .format("%d/%m/%Y")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_urgency_deadline_crosses_month_and_year() {
        let copy = select_ad_copy_on("Dental", "Health/Medical", "Urgency", date(2025, 12, 28));
        assert!(copy.description.ends_with("04/01/2026"));
        assert_eq!(copy.headline, "⚡ Offre Limitée - Dental -50%");
    }

    #[test]
    fn test_urgency_uses_today_plus_seven() {
        let before = offer_deadline(Local::now().date_naive());
        let copy = select_ad_copy("X", "Tourism", "Urgency");
        let after = offer_deadline(Local::now().date_naive());
        // the local date may roll over between the reads
        assert!(
            copy.description.ends_with(&before) || copy.description.ends_with(&after),
            "{}",
            copy.description
        );
    }

    #[test]
    fn test_unknown_tone_matches_professional() {
        let today = date(2025, 6, 1);
        let fallback = select_ad_copy_on("Coaching", "Services", "Whimsical", today);
        let professional = select_ad_copy_on("Coaching", "Services", "Professional", today);
        assert_eq!(fallback, professional);
    }

    #[test]
    fn test_emotional_copy_mentions_product() {
        let copy = render_ad_copy("Hospitality", Tone::Emotional, date(2025, 1, 1));
        assert!(copy.headline.contains("Hospitality"));
        assert!(copy.primary_text.contains("Hospitality"));
        assert!(!copy.description.is_empty());
    }
}
