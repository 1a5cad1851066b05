//! Item Catalog
//!
//! Owns every registered item, newest first, and the id counter.

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::domain::{Category, Item, ItemDraft, ItemId, Status};
use crate::error::{CatalogError, Result};
use crate::filter::{filter_items, FilterCriteria};

/// Ordered item collection with monotonic id assignment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<Item>,
    /// `None` once the last id has been handed out
    next_id: Option<ItemId>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    pub fn new() -> Self {
        Self { items: Vec::new(), next_id: Some(1) }
    }

    /// Build a catalog from pre-existing items, kept in the given order.
    ///
    /// New ids continue above the largest seeded id. A seed that already
    /// holds the largest possible id leaves no room and is rejected.
    pub fn from_items(items: Vec<Item>) -> Result<Self> {
        let mut seen = HashSet::new();
        for item in &items {
            if !seen.insert(item.id) {
                return Err(CatalogError::DuplicateId(item.id));
            }
            stored_fields_present(item)?;
        }
        let next_id = match items.iter().map(|item| item.id).max() {
            Some(max) => max.checked_add(1).ok_or(CatalogError::IdSpaceExhausted)?,
            None => 1,
        };
        Ok(Self { items, next_id: Some(next_id) })
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Validate a draft and insert it at the front.
    ///
    /// Nothing changes when validation fails or no id is left.
    pub fn register(&mut self, draft: ItemDraft, date: NaiveDate) -> Result<ItemId> {
        if let Err(err) = draft.validate() {
            log::warn!("[CATALOG] Rejected registration: {}", err);
            return Err(err.into());
        }

        let Some(id) = self.next_id else {
            log::error!("[CATALOG] Rejected registration: no ids left");
            return Err(CatalogError::IdSpaceExhausted);
        };
        self.next_id = id.checked_add(1);
        let item = draft.into_item(id, date);
        log::info!("[CATALOG] Registered item {} ({}, {})", id, item.category, item.status);
        self.items.insert(0, item);
        Ok(id)
    }

    /// Flip lost/found on one item, returning the new status.
    ///
    /// An unknown id is a no-op.
    pub fn toggle_status(&mut self, id: ItemId) -> Option<Status> {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.status = item.status.toggled();
                log::debug!("[CATALOG] Item {} is now {}", id, item.status);
                Some(item.status)
            }
            None => {
                log::debug!("[CATALOG] Toggle ignored, no item {}", id);
                None
            }
        }
    }

    /// Per-category totals over the whole collection
    pub fn tally(&self) -> CategoryTally {
        let mut tally = CategoryTally::default();
        for item in &self.items {
            tally.counts[item.category.index()] += 1;
        }
        tally
    }

    pub fn filtered(&self, criteria: &FilterCriteria) -> Vec<&Item> {
        filter_items(&self.items, criteria)
    }
}

fn stored_fields_present(item: &Item) -> Result<()> {
    let draft = ItemDraft {
        name: item.name.clone(),
        location: item.location.clone(),
        ..Default::default()
    };
    draft.validate().map_err(CatalogError::from)
}

/// Item count per category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryTally {
    counts: [usize; 5],
}

impl CategoryTally {
    pub fn count(&self, category: Category) -> usize {
        self.counts[category.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 16).unwrap()
    }

    fn draft(name: &str, location: &str, category: Category) -> ItemDraft {
        ItemDraft {
            category,
            name: name.to_string(),
            location: location.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_register_prepends_with_fresh_id() {
        let mut catalog = Catalog::new();
        let first = catalog.register(draft("Umbrella", "Gym", Category::Electronics), today()).unwrap();
        let second = catalog.register(draft("Keys", "Lobby", Category::Keyring), today()).unwrap();

        assert_ne!(first, second);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.items()[0].id, second);
        assert_eq!(catalog.items()[0].date, today());
        assert_eq!(catalog.items()[1].id, first);
    }

    #[test]
    fn test_register_rejects_blank_required_fields() {
        let mut catalog = Catalog::new();
        catalog.register(draft("Umbrella", "Gym", Category::Electronics), today()).unwrap();
        let before = catalog.clone();

        assert!(catalog.register(draft("   ", "Gym", Category::Card), today()).is_err());
        assert!(catalog.register(draft("Card", "", Category::Card), today()).is_err());
        assert_eq!(catalog, before);
    }

    #[test]
    fn test_register_keeps_text_as_typed() {
        let mut catalog = Catalog::new();
        let id = catalog.register(draft(" Keys ", "Lobby", Category::Keyring), today()).unwrap();
        assert_eq!(catalog.get(id).unwrap().name, " Keys ");
    }

    #[test]
    fn test_toggle_flips_only_target() {
        let mut catalog = Catalog::new();
        let a = catalog.register(draft("A", "X", Category::Wallet), today()).unwrap();
        let b = catalog.register(draft("B", "Y", Category::Card), today()).unwrap();

        assert_eq!(catalog.toggle_status(a), Some(Status::Found));
        assert_eq!(catalog.get(a).unwrap().status, Status::Found);
        assert_eq!(catalog.get(b).unwrap().status, Status::Lost);
        assert_eq!(catalog.toggle_status(a), Some(Status::Lost));
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let mut catalog = Catalog::new();
        catalog.register(draft("A", "X", Category::Wallet), today()).unwrap();
        let before = catalog.clone();
        assert_eq!(catalog.toggle_status(99), None);
        assert_eq!(catalog, before);
    }

    #[test]
    fn test_tally_counts_whole_collection() {
        let mut catalog = Catalog::new();
        for _ in 0..3 {
            catalog.register(draft("Lipstick", "Restroom", Category::Cosmetics), today()).unwrap();
        }
        let tally = catalog.tally();
        assert_eq!(tally.count(Category::Cosmetics), 3);
        assert_eq!(tally.count(Category::Wallet), 0);
        assert_eq!(Catalog::new().tally(), CategoryTally::default());
    }

    #[test]
    fn test_from_items_continues_ids_above_seed() {
        let mut seed = Catalog::new();
        seed.register(draft("A", "X", Category::Wallet), today()).unwrap();
        seed.register(draft("B", "Y", Category::Wallet), today()).unwrap();
        let mut items = seed.items().to_vec();
        items[0].id = 7;

        let mut catalog = Catalog::from_items(items).unwrap();
        let id = catalog.register(draft("C", "Z", Category::Card), today()).unwrap();
        assert_eq!(id, 8);
    }

    #[test]
    fn test_from_items_rejects_duplicates() {
        let mut seed = Catalog::new();
        seed.register(draft("A", "X", Category::Wallet), today()).unwrap();
        let item = seed.items()[0].clone();
        let result = Catalog::from_items(vec![item.clone(), item]);
        assert!(matches!(result, Err(CatalogError::DuplicateId(1))));
    }

    #[test]
    fn test_from_items_rejects_seed_at_max_id() {
        let mut seed = Catalog::new();
        seed.register(draft("A", "X", Category::Wallet), today()).unwrap();
        seed.register(draft("B", "Y", Category::Wallet), today()).unwrap();
        let mut items = seed.items().to_vec();
        items[0].id = ItemId::MAX;
        assert!(matches!(Catalog::from_items(items), Err(CatalogError::IdSpaceExhausted)));
    }

    #[test]
    fn test_register_stops_after_last_id() {
        let mut seed = Catalog::new();
        seed.register(draft("A", "X", Category::Wallet), today()).unwrap();
        let mut items = seed.items().to_vec();
        items[0].id = ItemId::MAX - 1;

        let mut catalog = Catalog::from_items(items).unwrap();
        let last = catalog.register(draft("B", "Y", Category::Card), today()).unwrap();
        assert_eq!(last, ItemId::MAX);

        let before = catalog.clone();
        let result = catalog.register(draft("C", "Z", Category::Card), today());
        assert!(matches!(result, Err(CatalogError::IdSpaceExhausted)));
        assert_eq!(catalog, before);
    }

    #[test]
    fn test_blank_draft_reports_validation_before_exhaustion() {
        let mut seed = Catalog::new();
        seed.register(draft("A", "X", Category::Wallet), today()).unwrap();
        let mut items = seed.items().to_vec();
        items[0].id = ItemId::MAX - 1;
        let mut catalog = Catalog::from_items(items).unwrap();
        catalog.register(draft("B", "Y", Category::Card), today()).unwrap();

        let result = catalog.register(draft("", "Z", Category::Card), today());
        assert!(matches!(result, Err(CatalogError::Validation(_))));
    }

    #[test]
    fn test_from_items_rejects_blank_location() {
        let mut seed = Catalog::new();
        seed.register(draft("A", "X", Category::Wallet), today()).unwrap();
        let mut item = seed.items()[0].clone();
        item.location.clear();
        assert!(matches!(Catalog::from_items(vec![item]), Err(CatalogError::Validation(_))));
    }
}
