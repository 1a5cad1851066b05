//! Status Badge Component
//!
//! Lost/found pill shown on cards and in the detail view.

use leptos::prelude::*;
use lost_found_core::Status;

use crate::display;

#[component]
pub fn StatusBadge(status: Status) -> impl IntoView {
    view! {
        <span class=display::status_badge_class(status)>{status.badge_label()}</span>
    }
}
