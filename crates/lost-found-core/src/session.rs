//! Page Session
//!
//! The whole page as one owned value: catalog, filter controls, registration
//! form and the open modal. The UI reads from it and calls these transitions.

use chrono::NaiveDate;

use crate::catalog::{Catalog, CategoryTally};
use crate::domain::{Category, CategoryFilter, Item, ItemId, Status, StatusFilter};
use crate::draft::RegistrationForm;
use crate::error::Result;
use crate::filter::FilterCriteria;

/// Which overlay is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Modal {
    #[default]
    Closed,
    Register,
    Detail(ItemId),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    catalog: Catalog,
    criteria: FilterCriteria,
    form: RegistrationForm,
    modal: Modal,
}

impl Session {
    pub fn with_catalog(catalog: Catalog) -> Self {
        Self { catalog, ..Default::default() }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn form(&self) -> &RegistrationForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut RegistrationForm {
        &mut self.form
    }

    pub fn modal(&self) -> Modal {
        self.modal
    }

    // ========================
    // Filters
    // ========================

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.criteria.search = term.into();
    }

    pub fn set_category_filter(&mut self, filter: CategoryFilter) {
        self.criteria.category = filter;
    }

    pub fn set_status_filter(&mut self, filter: StatusFilter) {
        self.criteria.status = filter;
    }

    /// Category card click
    pub fn select_category(&mut self, category: Category) {
        self.criteria.category = CategoryFilter::Only(category);
    }

    pub fn visible_items(&self) -> Vec<&Item> {
        self.catalog.filtered(&self.criteria)
    }

    /// Id and status of each visible item, in grid order.
    ///
    /// Unchanged by form edits, so a grid keyed on it only redraws when
    /// the filters or the catalog move.
    pub fn visible_keys(&self) -> Vec<(ItemId, Status)> {
        self.visible_items().into_iter().map(|item| (item.id, item.status)).collect()
    }

    /// Badge totals; ignores the active filters
    pub fn tally(&self) -> CategoryTally {
        self.catalog.tally()
    }

    // ========================
    // Registration
    // ========================

    pub fn open_register(&mut self) {
        self.modal = Modal::Register;
    }

    pub fn cancel_register(&mut self) {
        self.form.reset();
        if self.modal == Modal::Register {
            self.modal = Modal::Closed;
        }
    }

    /// Commit the form; the modal closes only on success
    pub fn submit_register(&mut self, today: NaiveDate) -> Result<ItemId> {
        let id = self.form.submit(&mut self.catalog, today)?;
        self.modal = Modal::Closed;
        Ok(id)
    }

    // ========================
    // Detail view
    // ========================

    /// Open the detail view; unknown ids leave the session as is
    pub fn open_detail(&mut self, id: ItemId) -> bool {
        if self.catalog.get(id).is_none() {
            return false;
        }
        self.modal = Modal::Detail(id);
        true
    }

    pub fn close_detail(&mut self) {
        if matches!(self.modal, Modal::Detail(_)) {
            self.modal = Modal::Closed;
        }
    }

    /// Item shown in the detail view, read from the live catalog
    pub fn selected_item(&self) -> Option<&Item> {
        match self.modal {
            Modal::Detail(id) => self.catalog.get(id),
            _ => None,
        }
    }

    /// Toggle any item by id and close the detail view
    pub fn toggle_status(&mut self, id: ItemId) -> Option<Status> {
        let status = self.catalog.toggle_status(id);
        self.close_detail();
        status
    }

    /// Toggle the item in the open detail view
    pub fn toggle_selected(&mut self) -> Option<Status> {
        match self.modal {
            Modal::Detail(id) => self.toggle_status(id),
            _ => None,
        }
    }
}
