//! Category Cards Component
//!
//! One card per category with its total count. Clicking a card sets the
//! category filter; counts always cover the whole catalog.

use leptos::prelude::*;
use lost_found_core::{Category, CategoryFilter};

use crate::context::use_app_context;
use crate::display;

#[component]
pub fn CategoryCards() -> impl IntoView {
    let ctx = use_app_context();
    let tally = Memo::new(move |_| ctx.session.with(|s| s.tally()));
    let active = move || ctx.session.with(|s| s.criteria().category);

    view! {
        <div class="category-grid">
            {Category::DISPLAY_ORDER.into_iter().map(|category| {
                let meta = category.meta();
                view! {
                    <button
                        class=move || display::category_card_class(active() == CategoryFilter::Only(category))
                        style=format!("--category-accent: {}", meta.accent)
                        on:click=move |_| ctx.select_category(category)
                    >
                        <div class="category-icon">{meta.glyph}</div>
                        <div class="category-name">{meta.label}</div>
                        <div class="category-count">
                            {move || display::count_label(tally.get().count(category))}
                        </div>
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
