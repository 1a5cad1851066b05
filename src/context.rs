//! Application Context
//!
//! Page state shared with every component via the Leptos Context API.

use leptos::prelude::*;
use leptos::task::spawn_local;
use lost_found_core::{Category, CategoryFilter, ItemDraft, ItemId, Session, StatusFilter};

use crate::browser;

/// Handle to the page session
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Catalog, filters, form and open modal
    pub session: RwSignal<Session>,
}

impl AppContext {
    pub fn new(session: RwSignal<Session>) -> Self {
        Self { session }
    }

    // ========================
    // Filters
    // ========================

    pub fn set_search(&self, term: String) {
        self.session.update(|s| s.set_search(term));
    }

    pub fn set_category_filter(&self, filter: CategoryFilter) {
        self.session.update(|s| s.set_category_filter(filter));
    }

    pub fn set_status_filter(&self, filter: StatusFilter) {
        self.session.update(|s| s.set_status_filter(filter));
    }

    pub fn select_category(&self, category: Category) {
        self.session.update(|s| s.select_category(category));
    }

    // ========================
    // Registration
    // ========================

    pub fn open_register(&self) {
        self.session.update(|s| s.open_register());
    }

    pub fn cancel_register(&self) {
        self.session.update(|s| s.cancel_register());
    }

    pub fn edit_draft(&self, edit: impl FnOnce(&mut ItemDraft)) {
        self.session.update(|s| edit(s.form_mut().draft_mut()));
    }

    /// Commit the form, alerting the user when it is rejected
    pub fn submit_register(&self) {
        let today = browser::today();
        match self.session.try_update(|s| s.submit_register(today)) {
            Some(Ok(id)) => log::info!("[REGISTER] Created item {}", id),
            Some(Err(err)) => {
                log::warn!("[REGISTER] {}", err);
                browser::alert(&err.user_message());
            }
            None => {}
        }
    }

    /// Read a picked image into the draft.
    ///
    /// The read is tied to the current draft; if the form is reset or
    /// submitted before it finishes, the result is dropped.
    pub fn attach_image(&self, file: web_sys::File) {
        let Some(ticket) = self.session.try_update(|s| s.form_mut().begin_image_load()) else {
            return;
        };
        let session = self.session;
        log::debug!("[IMAGE] Reading {} ({} bytes)", file.name(), file.size());

        spawn_local(async move {
            match browser::read_file_as_data_url(file).await {
                Ok(payload) => session.update(|s| {
                    if !s.form_mut().complete_image_load(ticket, payload) {
                        log::debug!("[IMAGE] Form changed while reading, result dropped");
                    }
                }),
                Err(err) => log::error!("[IMAGE] Read failed: {}", err),
            }
        });
    }

    // ========================
    // Detail view
    // ========================

    pub fn open_detail(&self, id: ItemId) {
        self.session.update(|s| {
            if !s.open_detail(id) {
                log::warn!("[DETAIL] No item {}", id);
            }
        });
    }

    pub fn close_detail(&self) {
        self.session.update(|s| s.close_detail());
    }

    pub fn toggle_selected(&self) {
        self.session.update(|s| {
            s.toggle_selected();
        });
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
