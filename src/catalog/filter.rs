//! Filter evaluator: decides which events satisfy a [`FilterCriteria`].
//!
//! Pure and side-effect free apart from logging, so it can be called
//! repeatedly from any task without coordination.

use chrono::Datelike;

use crate::domain::{Event, FilterCriteria, Sport};

/// Returns `true` if `event` satisfies every active predicate of `criteria`.
///
/// Predicates: title contains the search term, location contains the
/// location term (both case-insensitive), sport is selected, start date
/// falls in the selected month, start date falls in the selected year. The
/// year predicate is always evaluated. Only the start date is consulted.
///
/// An event whose start date cannot be parsed fails the date predicates
/// and is logged; it never aborts evaluation.
#[must_use]
pub fn matches(event: &Event, criteria: &FilterCriteria) -> bool {
    contains_folded(&event.title, &criteria.search_term)
        && contains_folded(&event.location, &criteria.location)
        && matches_sport(event.sport, criteria)
        && matches_date(event, criteria)
}

/// Applies [`matches`] to every event, preserving input order.
///
/// Returns a new vector; the input is left untouched. No matches yields an
/// empty vector.
#[must_use]
pub fn filter_events(events: &[Event], criteria: &FilterCriteria) -> Vec<Event> {
    events
        .iter()
        .filter(|event| matches(event, criteria))
        .cloned()
        .collect()
}

fn contains_folded(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn matches_sport(sport: Sport, criteria: &FilterCriteria) -> bool {
    criteria.selected_sports.is_empty()
        || (sport != Sport::Unlisted && criteria.selected_sports.contains(&sport))
}

fn matches_date(event: &Event, criteria: &FilterCriteria) -> bool {
    let start = match event.start() {
        Ok(start) => start,
        Err(err) => {
            tracing::warn!(event_id = %event.id, error = %err, "excluding event from date filters");
            return false;
        }
    };

    let month_ok = criteria
        .selected_month
        .is_none_or(|month| start.month0() == u32::from(month));
    month_ok && start.year() == criteria.selected_year
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(id: &str, title: &str, sport: Sport, start: &str, location: &str) -> Event {
        Event::new(id, title, sport, start, start, location)
    }

    fn scenario_events() -> Vec<Event> {
        vec![
            event("1", "Wimbledon 2025", Sport::Tenis, "2025-07-01", "Londres"),
            event("2", "Copa Mundial", Sport::Futbol, "2025-06-10", "Nueva York"),
        ]
    }

    fn titles(events: &[Event]) -> Vec<&str> {
        events.iter().map(|e| e.title.as_str()).collect()
    }

    #[test]
    fn sport_selection_keeps_only_selected() {
        let criteria = FilterCriteria::for_year(2025).with_sports([Sport::Tenis]);
        let filtered = filter_events(&scenario_events(), &criteria);
        assert_eq!(titles(&filtered), vec!["Wimbledon 2025"]);
    }

    #[test]
    fn search_term_is_case_insensitive() {
        let criteria = FilterCriteria::for_year(2025).with_search_term("copa");
        let filtered = filter_events(&scenario_events(), &criteria);
        assert_eq!(titles(&filtered), vec!["Copa Mundial"]);
    }

    #[test]
    fn location_term_matches_substring() {
        let criteria = FilterCriteria::for_year(2025).with_location("LOND");
        let filtered = filter_events(&scenario_events(), &criteria);
        assert_eq!(titles(&filtered), vec!["Wimbledon 2025"]);
    }

    #[test]
    fn year_only_criteria_keep_that_year_in_order() {
        let events = vec![
            event("1", "A", Sport::Golf, "2025-03-01", "x"),
            event("2", "B", Sport::Golf, "2024-03-01", "x"),
            event("3", "C", Sport::Rugby, "2025-11-20", "x"),
            event("4", "D", Sport::Rugby, "2026-01-02", "x"),
        ];
        let filtered = filter_events(&events, &FilterCriteria::for_year(2025));
        assert_eq!(titles(&filtered), vec!["A", "C"]);
    }

    #[test]
    fn month_uses_start_date_only() {
        let mut spanning = event("1", "Tour", Sport::Atletismo, "2025-05-30", "Paris");
        spanning.end_date = "2025-06-02".to_string();

        let june = FilterCriteria::for_year(2025).with_month(Some(5));
        let may = FilterCriteria::for_year(2025).with_month(Some(4));
        assert!(!matches(&spanning, &june));
        assert!(matches(&spanning, &may));
    }

    #[test]
    fn year_is_always_enforced() {
        let old = event("1", "Copa", Sport::Futbol, "2019-06-10", "Madrid");
        assert!(!matches(&old, &FilterCriteria::for_year(2025)));
    }

    #[test]
    fn malformed_date_fails_closed() {
        let broken = event("1", "Copa", Sport::Futbol, "10/06/2025", "Madrid");
        assert!(!matches(&broken, &FilterCriteria::for_year(2025)));
    }

    #[test]
    fn unlisted_sport_never_matches_a_selection() {
        let odd = event("1", "Cricket Cup", Sport::Unlisted, "2025-02-02", "Leeds");
        let any = FilterCriteria::for_year(2025);
        let selected = any.clone().with_sports([Sport::Unlisted]);
        assert!(matches(&odd, &any));
        assert!(!matches(&odd, &selected));
    }

    #[test]
    fn filtering_is_idempotent() {
        let criteria = FilterCriteria::for_year(2025)
            .with_sports([Sport::Tenis, Sport::Futbol])
            .with_search_term("o");
        let once = filter_events(&scenario_events(), &criteria);
        let twice = filter_events(&once, &criteria);
        assert_eq!(once, twice);
    }

    #[test]
    fn no_match_is_empty_not_error() {
        let criteria = FilterCriteria::for_year(2025).with_search_term("olimpiadas");
        assert!(filter_events(&scenario_events(), &criteria).is_empty());
    }
}
