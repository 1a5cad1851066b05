//! Item Grid Component
//!
//! Filtered view of the catalog, or an empty state when nothing matches.

use leptos::prelude::*;

use crate::components::ItemCard;
use crate::context::use_app_context;

#[component]
pub fn ItemGrid() -> impl IntoView {
    let ctx = use_app_context();
    // Keys only: form keystrokes leave this equal, so the grid stays put
    let visible = Memo::new(move |_| ctx.session.with(|s| s.visible_keys()));

    view! {
        <div class="items-grid">
            // status is part of the key so a toggled card re-renders
            <For
                each=move || visible.get()
                key=|key| *key
                children=move |(id, _)| {
                    let item = ctx.session.with_untracked(|s| s.catalog().get(id).cloned());
                    item.map(|item| view! { <ItemCard item=item /> })
                }
            />
        </div>

        <Show when=move || visible.with(|keys| keys.is_empty())>
            <div class="empty-state">
                <div class="empty-icon">"🔮"</div>
                <div class="empty-title">"아직 등록된 분실물이 없어요"</div>
                <div class="empty-subtitle">"첫 번째 분실물을 등록해보세요!"</div>
            </div>
        </Show>
    }
}
