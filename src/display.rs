//! Display Helpers
//!
//! Pure text and class-name helpers shared by components.

use lost_found_core::Status;

pub fn category_card_class(active: bool) -> &'static str {
    if active {
        "category-card active"
    } else {
        "category-card"
    }
}

pub fn status_badge_class(status: Status) -> &'static str {
    match status {
        Status::Lost => "item-status status-lost",
        Status::Found => "item-status status-found",
    }
}

/// Badge count under a category card
pub fn count_label(count: usize) -> String {
    format!("{}개", count)
}

/// Selector option text, e.g. "👛 지갑"
pub fn option_text(glyph: &str, label: &str) -> String {
    format!("{} {}", glyph, label)
}

/// Placeholder only for a truly empty description; whitespace shows as typed
pub fn description_or_placeholder(description: &str) -> &str {
    if description.is_empty() {
        "설명이 없습니다."
    } else {
        description
    }
}
