//! Synthetic daily performance series used by the analysis view.
//!
//! Independent of the generator; values follow fixed sawtooth formulas.

use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyPerformance {
    pub date: NaiveDate,
    pub impressions: u64,
    pub clicks: u64,
    pub conversions: u64,
    pub cost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistorySummary {
    pub days: usize,
    pub impressions: u64,
    pub clicks: u64,
    pub conversions: u64,
    pub cost: f64,
}

pub fn default_window() -> (NaiveDate, NaiveDate) {
    // Both constants are valid calendar dates.
    let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap_or_default();
    let end = NaiveDate::from_ymd_opt(2025, 6, 8).unwrap_or_default();
    (start, end)
}

/// One row per day from `start` to `end`, both inclusive.
pub fn synthetic_history(start: NaiveDate, end: NaiveDate) -> Vec<DailyPerformance> {
    start
        .iter_days()
        .take_while(|date| *date <= end)
        .enumerate()
        .map(|(i, date)| {
            let i = i as u64;
            DailyPerformance {
                date,
                impressions: 1000 + i * 50 + (i % 7) * 200,
                clicks: 50 + i * 2 + (i % 7) * 10,
                conversions: 2 + i % 5,
                cost: 25.0 + i as f64 * 1.5 + (i % 3) as f64 * 5.0,
            }
        })
        .collect()
}

pub fn summarize(rows: &[DailyPerformance]) -> HistorySummary {
    HistorySummary {
        days: rows.len(),
        impressions: rows.iter().map(|r| r.impressions).sum(),
        clicks: rows.iter().map(|r| r.clicks).sum(),
        conversions: rows.iter().map(|r| r.conversions).sum(),
        cost: rows.iter().map(|r| r.cost).sum(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_window_has_159_days() {
        let (start, end) = default_window();
        let rows = synthetic_history(start, end);
        assert_eq!(rows.len(), 159);
        assert_eq!(rows.first().unwrap().date, start);
        assert_eq!(rows.last().unwrap().date, end);
    }

    #[test]
    fn test_first_rows_follow_formulas() {
        let (start, end) = default_window();
        let rows = synthetic_history(start, end);

        assert_eq!(rows[0].impressions, 1000);
        assert_eq!(rows[0].clicks, 50);
        assert_eq!(rows[0].conversions, 2);
        assert_eq!(rows[0].cost, 25.0);

        // i = 8: 8 % 7 = 1, 8 % 5 = 3, 8 % 3 = 2
        assert_eq!(rows[8].impressions, 1000 + 400 + 200);
        assert_eq!(rows[8].clicks, 50 + 16 + 10);
        assert_eq!(rows[8].conversions, 5);
        assert_eq!(rows[8].cost, 25.0 + 12.0 + 10.0);
    }

    #[test]
    fn test_summary_totals() {
        let (start, _) = default_window();
        let end = start + chrono::Duration::days(2);
        let summary = summarize(&synthetic_history(start, end));
        assert_eq!(summary.days, 3);
        assert_eq!(summary.impressions, 1000 + 1250 + 1500);
        assert_eq!(summary.clicks, 50 + 62 + 74);
        assert_eq!(summary.conversions, 2 + 3 + 4);
        assert_eq!(summary.cost, 25.0 + 31.5 + 38.0);
    }

    #[test]
    fn test_inverted_window_is_empty() {
        let (start, end) = default_window();
        assert!(synthetic_history(end, start).is_empty());
    }
}
