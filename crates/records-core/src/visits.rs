//! Monthly visit aggregation over a patient's encounter history.
//!
//! A visit is a distinct calendar date with at least one encounter; two
//! same-day encounters count once.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::dates::{month_key, parse_encounter_date};
use crate::models::Encounter;

/// Number of distinct visit dates within one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyVisitSummary {
    /// Month key in `YYYY-MM` form.
    pub month: String,
    /// Count of distinct encounter dates within the month.
    pub visits: u32,
}

/// Group a patient's encounters into per-month visit counts.
///
/// Encounters with a missing or unparsable `date` are skipped; the
/// operation never fails. Input order is irrelevant. Output is one summary
/// per month with at least one visit, ascending by month key (`YYYY-MM`
/// lexicographic order equals chronological order).
pub fn summarize_visits_by_month(encounters: &[Encounter]) -> Vec<MonthlyVisitSummary> {
    // Distinct dates per month; both maps ordered so output order falls out.
    let mut dates_by_month: BTreeMap<String, BTreeSet<NaiveDate>> = BTreeMap::new();

    for encounter in encounters {
        let Some(raw) = encounter.date.as_deref() else {
            continue;
        };
        let Some(date) = parse_encounter_date(raw) else {
            continue;
        };
        dates_by_month.entry(month_key(date)).or_default().insert(date);
    }

    dates_by_month
        .into_iter()
        .map(|(month, dates)| MonthlyVisitSummary {
            month,
            visits: dates.len() as u32,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_encounter(date: Option<&str>, encounter_type: Option<&str>) -> Encounter {
        Encounter {
            date: date.map(str::to_string),
            encounter_type: encounter_type.map(str::to_string),
            ..Encounter::default()
        }
    }

    fn summary(month: &str, visits: u32) -> MonthlyVisitSummary {
        MonthlyVisitSummary {
            month: month.to_string(),
            visits,
        }
    }

    // ── Grouping and deduplication ────────────────────────────────────────────

    #[test]
    fn test_same_day_encounters_count_once() {
        let encounters = vec![
            make_encounter(Some("2025-12-04"), Some("consultation")),
            make_encounter(Some("2025-12-04"), Some("oct-scan")),
            make_encounter(Some("2025-12-05"), Some("follow-up")),
        ];
        assert_eq!(
            summarize_visits_by_month(&encounters),
            vec![summary("2025-12", 2)]
        );
    }

    #[test]
    fn test_months_are_separate_and_ascending() {
        let encounters = vec![
            make_encounter(Some("2025-12-04"), None),
            make_encounter(Some("2025-10-15"), None),
        ];
        assert_eq!(
            summarize_visits_by_month(&encounters),
            vec![summary("2025-10", 1), summary("2025-12", 1)]
        );
    }

    #[test]
    fn test_year_boundary_keeps_months_apart() {
        let encounters = vec![
            make_encounter(Some("2026-01-01"), None),
            make_encounter(Some("2025-12-31"), None),
        ];
        assert_eq!(
            summarize_visits_by_month(&encounters),
            vec![summary("2025-12", 1), summary("2026-01", 1)]
        );
    }

    #[test]
    fn test_datetime_and_date_forms_dedupe_to_one_visit() {
        let encounters = vec![
            make_encounter(Some("2025-12-04"), None),
            make_encounter(Some("2025-12-04T10:30:00Z"), None),
        ];
        assert_eq!(
            summarize_visits_by_month(&encounters),
            vec![summary("2025-12", 1)]
        );
    }

    // ── Degraded input ────────────────────────────────────────────────────────

    #[test]
    fn test_missing_date_is_skipped() {
        let encounters = vec![make_encounter(None, Some("follow-up"))];
        assert_eq!(summarize_visits_by_month(&encounters), vec![]);
    }

    #[test]
    fn test_unparsable_date_is_skipped() {
        let encounters = vec![
            make_encounter(Some("not-a-date"), None),
            make_encounter(Some("2025-12-05"), None),
        ];
        assert_eq!(
            summarize_visits_by_month(&encounters),
            vec![summary("2025-12", 1)]
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(summarize_visits_by_month(&[]), vec![]);
    }

    // ── Properties ────────────────────────────────────────────────────────────

    #[test]
    fn test_input_order_does_not_matter() {
        let mut encounters = vec![
            make_encounter(Some("2025-12-05"), None),
            make_encounter(Some("2025-10-15"), None),
            make_encounter(Some("2025-12-04"), None),
            make_encounter(Some("2025-12-04"), None),
        ];
        let forward = summarize_visits_by_month(&encounters);
        encounters.reverse();
        let backward = summarize_visits_by_month(&encounters);
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_total_visits_equals_distinct_valid_dates() {
        let encounters = vec![
            make_encounter(Some("2025-10-15"), None),
            make_encounter(Some("2025-12-04"), None),
            make_encounter(Some("2025-12-04"), None),
            make_encounter(Some("2025-12-05"), None),
            make_encounter(Some("bogus"), None),
            make_encounter(None, None),
        ];
        let total: u32 = summarize_visits_by_month(&encounters)
            .iter()
            .map(|s| s.visits)
            .sum();
        // Distinct valid dates: 2025-10-15, 2025-12-04, 2025-12-05.
        assert_eq!(total, 3);
    }

    #[test]
    fn test_no_duplicate_month_keys() {
        let encounters = vec![
            make_encounter(Some("2025-12-01"), None),
            make_encounter(Some("2025-12-15"), None),
            make_encounter(Some("2025-12-31"), None),
        ];
        let summaries = summarize_visits_by_month(&encounters);
        assert_eq!(summaries, vec![summary("2025-12", 3)]);
    }

    #[test]
    fn test_aggregation_is_idempotent() {
        let encounters = vec![
            make_encounter(Some("2025-10-15"), None),
            make_encounter(Some("2025-12-04"), None),
        ];
        assert_eq!(
            summarize_visits_by_month(&encounters),
            summarize_visits_by_month(&encounters)
        );
    }

    // ── Serialized shape ──────────────────────────────────────────────────────

    #[test]
    fn test_summary_serializes_as_month_and_visits() {
        let json = serde_json::to_string(&summary("2025-12", 2)).unwrap();
        assert_eq!(json, r#"{"month":"2025-12","visits":2}"#);
    }
}
