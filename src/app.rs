//! Lost & Found Frontend App
//!
//! Header, filter controls, category cards and the item grid, plus the
//! registration and detail modals.

use leptos::prelude::*;
use lost_found_core::{AppConfig, Catalog, Session};

use crate::components::{CategoryCards, DetailModal, FilterBar, Header, ItemGrid, RegisterModal};
use crate::context::AppContext;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::embedded().unwrap_or_else(|err| {
        log::error!("[APP] Bundled config unreadable: {}", err);
        AppConfig::default()
    });
    let catalog = config.catalog().unwrap_or_else(|err| {
        log::error!("[APP] Seed catalog rejected: {}", err);
        Catalog::new()
    });
    log::info!("[APP] Loaded {} items", catalog.len());

    let session = RwSignal::new(Session::with_catalog(catalog));
    provide_context(AppContext::new(session));

    view! {
        <div class="app-container">
            <Header title=config.title tagline=config.tagline />

            <div class="max-width-container">
                <FilterBar />
                <CategoryCards />
                <ItemGrid />
            </div>

            <RegisterModal />
            <DetailModal />
        </div>
    }
}
