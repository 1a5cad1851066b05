//! Item Card Component
//!
//! Grid tile for one item; clicking opens the detail view.

use leptos::prelude::*;
use lost_found_core::Item;

use crate::components::StatusBadge;
use crate::context::use_app_context;

#[component]
pub fn ItemCard(item: Item) -> impl IntoView {
    let ctx = use_app_context();
    let id = item.id;
    let image = item.image.clone().map(|src| view! {
        <img src=src alt=item.name.clone() class="item-card-image" />
    });

    view! {
        <div
            class="item-card"
            data-category=item.category.as_str()
            on:click=move |_| ctx.open_detail(id)
        >
            {image}
            <div class="item-card-header"></div>
            <div class="item-card-body">
                <div class="item-header">
                    <div>
                        <span class="item-category-icon">{item.category.glyph()}</span>
                    </div>
                    <StatusBadge status=item.status />
                </div>
                <h3 class="item-title">{item.name}</h3>
                <p class="item-description">{item.description}</p>
                <div class="item-footer">
                    <div class="item-location">
                        <span>"📍"</span>
                        <span>{item.location}</span>
                    </div>
                    <div class="item-date">
                        <span>"📅"</span>
                        <span>{item.date.to_string()}</span>
                    </div>
                </div>
            </div>
        </div>
    }
}
