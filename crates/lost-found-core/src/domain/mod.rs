//! Domain Layer
//!
//! Items and the closed value sets they are classified by.

mod category;
mod item;
mod status;

pub use category::{Category, CategoryFilter, CategoryMeta};
pub use item::{Item, ItemDraft, ItemId};
pub use status::{Status, StatusFilter};
