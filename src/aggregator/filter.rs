//! Category filtering, applied once before every view.

use crate::classifier::Category;
use crate::parser::schema::Event;
use log::debug;

/// Keep events whose category is in `selected`
///
/// **Public** - `None` keeps everything; an empty selection keeps nothing.
/// Input order is preserved and the input is left untouched.
pub fn filter_by_categories(events: &[Event], selected: Option<&[Category]>) -> Vec<Event> {
    let filtered: Vec<Event> = match selected {
        None => events.to_vec(),
        Some(categories) => events
            .iter()
            .filter(|event| categories.contains(&event.category))
            .cloned()
            .collect(),
    };

    debug!("Category filter kept {} of {} events", filtered.len(), events.len());

    filtered
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn events() -> Vec<Event> {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        vec![
            Event::new("1", "A", Category::Sports, date),
            Event::new("2", "B", Category::CrisisWar, date),
            Event::new("3", "C", Category::Sports, date),
        ]
    }

    #[test]
    fn test_no_selection_keeps_all() {
        assert_eq!(filter_by_categories(&events(), None).len(), 3);
    }

    #[test]
    fn test_selection_membership() {
        let filtered = filter_by_categories(&events(), Some(&[Category::Sports]));
        let ids: Vec<&str> = filtered.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn test_empty_selection_keeps_nothing() {
        assert!(filter_by_categories(&events(), Some(&[])).is_empty());
    }
}
