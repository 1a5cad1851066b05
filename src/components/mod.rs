//! UI Components
//!
//! Leptos components for the board. Each reads the page session from context.

mod header;
mod filter_bar;
mod category_cards;
mod item_grid;
mod item_card;
mod status_badge;
mod register_modal;
mod image_picker;
mod detail_modal;

pub use header::Header;
pub use filter_bar::FilterBar;
pub use category_cards::CategoryCards;
pub use item_grid::ItemGrid;
pub use item_card::ItemCard;
pub use status_badge::StatusBadge;
pub use register_modal::RegisterModal;
pub use image_picker::ImagePicker;
pub use detail_modal::DetailModal;
