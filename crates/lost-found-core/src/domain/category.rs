//! Item Categories
//!
//! Closed set of physical item kinds plus the `all` filter sentinel.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Static display metadata for a category (or the `all` sentinel)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryMeta {
    pub label: &'static str,
    pub glyph: &'static str,
    /// Card background colour (CSS hex)
    pub accent: &'static str,
}

const ALL_META: CategoryMeta = CategoryMeta { label: "전체", glyph: "📦", accent: "#F3F4F6" };
const WALLET_META: CategoryMeta = CategoryMeta { label: "지갑", glyph: "👛", accent: "#FFE4B5" };
const ELECTRONICS_META: CategoryMeta = CategoryMeta { label: "전자기기", glyph: "🎧", accent: "#B5E7FF" };
const KEYRING_META: CategoryMeta = CategoryMeta { label: "인형/키링", glyph: "🔑", accent: "#C8E6C9" };
const COSMETICS_META: CategoryMeta = CategoryMeta { label: "화장품", glyph: "💄", accent: "#FFD1DC" };
const CARD_META: CategoryMeta = CategoryMeta { label: "카드/신분증", glyph: "💳", accent: "#E1BEE7" };

/// Physical kind of a stored item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Electronics,
    Wallet,
    Keyring,
    Cosmetics,
    Card,
}

impl Category {
    /// Order used by selectors and category cards
    pub const DISPLAY_ORDER: [Category; 5] = [
        Category::Wallet,
        Category::Electronics,
        Category::Keyring,
        Category::Cosmetics,
        Category::Card,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Electronics => "electronics",
            Category::Wallet => "wallet",
            Category::Keyring => "keyring",
            Category::Cosmetics => "cosmetics",
            Category::Card => "card",
        }
    }

    pub fn meta(&self) -> &'static CategoryMeta {
        match self {
            Category::Electronics => &ELECTRONICS_META,
            Category::Wallet => &WALLET_META,
            Category::Keyring => &KEYRING_META,
            Category::Cosmetics => &COSMETICS_META,
            Category::Card => &CARD_META,
        }
    }

    pub fn label(&self) -> &'static str {
        self.meta().label
    }

    pub fn glyph(&self) -> &'static str {
        self.meta().glyph
    }

    /// Slot in a fixed-size per-category table
    pub(crate) fn index(&self) -> usize {
        match self {
            Category::Electronics => 0,
            Category::Wallet => 1,
            Category::Keyring => 2,
            Category::Cosmetics => 3,
            Category::Card => 4,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "electronics" => Ok(Category::Electronics),
            "wallet" => Ok(Category::Wallet),
            "keyring" => Ok(Category::Keyring),
            "cosmetics" => Ok(Category::Cosmetics),
            "card" => Ok(Category::Card),
            other => Err(CatalogError::UnknownCategory(other.to_string())),
        }
    }
}

/// Category selector value. `All` never appears on a stored item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Selector options: the sentinel first, then every category
    pub fn options() -> impl Iterator<Item = CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(Category::DISPLAY_ORDER.into_iter().map(CategoryFilter::Only))
    }

    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => *wanted == category,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(category) => category.as_str(),
        }
    }

    pub fn meta(&self) -> &'static CategoryMeta {
        match self {
            CategoryFilter::All => &ALL_META,
            CategoryFilter::Only(category) => category.meta(),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryFilter {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(CategoryFilter::All),
            other => other.parse().map(CategoryFilter::Only),
        }
    }
}
