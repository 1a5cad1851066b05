//! Item Entity
//!
//! A registered lost-or-found record and the draft it is created from.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Category, Status};
use crate::error::{RequiredField, ValidationError};

/// Catalog-assigned identifier
pub type ItemId = u32;

/// A lost-or-found record
///
/// Only `status` changes after registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub category: Category,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub location: String,
    /// Registration day, serialized as `YYYY-MM-DD`
    pub date: NaiveDate,
    pub status: Status,
    /// Data URI (or plain URL for bundled demo items)
    #[serde(default)]
    pub image: Option<String>,
}

/// Uncommitted item data held by the registration form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemDraft {
    pub category: Category,
    pub name: String,
    pub description: String,
    pub location: String,
    pub status: Status,
    pub image: Option<String>,
}

impl ItemDraft {
    /// Check required fields. Whitespace-only counts as missing.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let missing: Vec<RequiredField> = [
            (RequiredField::Name, &self.name),
            (RequiredField::Location, &self.location),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { missing })
        }
    }

    pub(crate) fn into_item(self, id: ItemId, date: NaiveDate) -> Item {
        Item {
            id,
            category: self.category,
            name: self.name,
            description: self.description,
            location: self.location,
            date,
            status: self.status,
            image: self.image,
        }
    }
}
