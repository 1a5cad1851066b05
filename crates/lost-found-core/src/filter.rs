//! Filter/Search Engine
//!
//! Narrows the catalog to the items matching the search box and both
//! selectors. Every call recomputes from its inputs.

use crate::domain::{CategoryFilter, Item, StatusFilter};

/// Current state of the three filter controls
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Free text, matched case-insensitively against name, description and location
    pub search: String,
    pub category: CategoryFilter,
    pub status: StatusFilter,
}

impl FilterCriteria {
    pub fn matches(&self, item: &Item) -> bool {
        matches_search(item, &self.search)
            && matches_category(item, self.category)
            && matches_status(item, self.status)
    }
}

/// Empty term matches everything, even items with empty text fields.
pub fn matches_search(item: &Item, term: &str) -> bool {
    term.is_empty() || contains_folded(item, &term.to_lowercase())
}

pub fn matches_category(item: &Item, filter: CategoryFilter) -> bool {
    filter.matches(item.category)
}

pub fn matches_status(item: &Item, filter: StatusFilter) -> bool {
    filter.matches(item.status)
}

/// Items satisfying all three predicates, in catalog order
pub fn filter_items<'a>(items: &'a [Item], criteria: &FilterCriteria) -> Vec<&'a Item> {
    // Fold the needle once for the whole scan
    let needle = criteria.search.to_lowercase();
    items
        .iter()
        .filter(|item| needle.is_empty() || contains_folded(item, &needle))
        .filter(|item| matches_category(item, criteria.category))
        .filter(|item| matches_status(item, criteria.status))
        .collect()
}

fn contains_folded(item: &Item, needle: &str) -> bool {
    [&item.name, &item.description, &item.location]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, Status};
    use chrono::NaiveDate;

    fn make_item(id: u32, name: &str, description: &str, location: &str, category: Category, status: Status) -> Item {
        Item {
            id,
            category,
            name: name.to_string(),
            description: description.to_string(),
            location: location.to_string(),
            date: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            status,
            image: None,
        }
    }

    fn sample() -> Vec<Item> {
        vec![
            make_item(1, "AirPods Pro", "case included", "Library 3F", Category::Electronics, Status::Found),
            make_item(2, "Leather wallet", "", "Cafeteria", Category::Wallet, Status::Lost),
            make_item(3, "Car keys", "five keys on a RING", "Parking B2", Category::Keyring, Status::Found),
        ]
    }

    fn ids(items: &[&Item]) -> Vec<u32> {
        items.iter().map(|i| i.id).collect()
    }

    #[test]
    fn test_default_criteria_keeps_everything() {
        let items = sample();
        let criteria = FilterCriteria::default();
        assert_eq!(ids(&filter_items(&items, &criteria)), vec![1, 2, 3]);
    }

    #[test]
    fn test_search_is_case_insensitive_across_fields() {
        let items = sample();
        let by = |term: &str| {
            let criteria = FilterCriteria { search: term.to_string(), ..Default::default() };
            ids(&filter_items(&items, &criteria))
        };
        assert_eq!(by("airpods"), vec![1]);
        assert_eq!(by("ring"), vec![3]); // description only
        assert_eq!(by("CAFETERIA"), vec![2]); // location only
        assert_eq!(by("keys"), vec![3]);
        assert!(by("umbrella").is_empty());
    }

    #[test]
    fn test_search_is_not_trimmed() {
        let items = sample();
        let criteria = FilterCriteria { search: " pro".to_string(), ..Default::default() };
        assert_eq!(ids(&filter_items(&items, &criteria)), vec![1]);
        let criteria = FilterCriteria { search: "pro ".to_string(), ..Default::default() };
        assert!(filter_items(&items, &criteria).is_empty());
    }

    #[test]
    fn test_empty_search_matches_empty_fields() {
        let item = make_item(9, "x", "", "y", Category::Card, Status::Lost);
        assert!(matches_search(&item, ""));
    }

    #[test]
    fn test_predicates_are_anded() {
        let items = sample();
        let criteria = FilterCriteria {
            search: "k".to_string(),
            category: CategoryFilter::Only(Category::Keyring),
            status: StatusFilter::Only(Status::Lost),
        };
        assert!(filter_items(&items, &criteria).is_empty());

        let found = FilterCriteria { status: StatusFilter::Only(Status::Found), ..Default::default() };
        assert_eq!(ids(&filter_items(&items, &found)), vec![1, 3]);
        let wallets = FilterCriteria { category: CategoryFilter::Only(Category::Wallet), ..Default::default() };
        assert_eq!(ids(&filter_items(&items, &wallets)), vec![2]);
    }

    #[test]
    fn test_matches_agrees_with_filter_items() {
        let items = sample();
        let criteria = FilterCriteria { search: "A".to_string(), ..Default::default() };
        let expected: Vec<u32> = items.iter().filter(|i| criteria.matches(i)).map(|i| i.id).collect();
        assert_eq!(ids(&filter_items(&items, &criteria)), expected);
    }
}
