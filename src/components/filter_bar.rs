//! Filter Bar Component
//!
//! Search box plus category and status selectors.

use leptos::prelude::*;
use lost_found_core::{CategoryFilter, StatusFilter};

use crate::context::use_app_context;
use crate::display;

#[component]
pub fn FilterBar() -> impl IntoView {
    let ctx = use_app_context();

    let search = move || ctx.session.with(|s| s.criteria().search.clone());
    let category = move || ctx.session.with(|s| s.criteria().category);
    let status = move || ctx.session.with(|s| s.criteria().status);

    let on_category_change = move |ev: web_sys::Event| {
        match event_target_value(&ev).parse::<CategoryFilter>() {
            Ok(filter) => ctx.set_category_filter(filter),
            Err(err) => log::warn!("[FILTER] {}", err),
        }
    };

    let on_status_change = move |ev: web_sys::Event| {
        match event_target_value(&ev).parse::<StatusFilter>() {
            Ok(filter) => ctx.set_status_filter(filter),
            Err(err) => log::warn!("[FILTER] {}", err),
        }
    };

    view! {
        <div class="search-container">
            <div class="search-wrapper">
                <div class="search-input-wrapper">
                    <span class="search-icon">"🔍"</span>
                    <input
                        type="text"
                        class="search-input"
                        placeholder="분실물 이름, 설명, 위치로 검색..."
                        prop:value=search
                        on:input=move |ev| ctx.set_search(event_target_value(&ev))
                    />
                </div>

                <select class="filter-select" on:change=on_category_change>
                    {CategoryFilter::options().map(|filter| {
                        let meta = filter.meta();
                        view! {
                            <option
                                value=filter.as_str()
                                prop:selected=move || category() == filter
                            >
                                {display::option_text(meta.glyph, meta.label)}
                            </option>
                        }
                    }).collect_view()}
                </select>

                <select class="filter-select" on:change=on_status_change>
                    {StatusFilter::options().map(|filter| view! {
                        <option
                            value=filter.as_str()
                            prop:selected=move || status() == filter
                        >
                            {filter.label()}
                        </option>
                    }).collect_view()}
                </select>
            </div>
        </div>
    }
}
