//! Registration Form State
//!
//! Holds the draft being typed, the image preview, and a version counter
//! that ties asynchronous image reads to the draft that started them.

use chrono::NaiveDate;

use crate::catalog::Catalog;
use crate::domain::{ItemDraft, ItemId};
use crate::error::Result;

/// Proof that an image read was started against a particular draft version
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageTicket {
    version: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    draft: ItemDraft,
    preview: Option<String>,
    /// Bumped on every reset and every new image read
    version: u64,
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &ItemDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut ItemDraft {
        &mut self.draft
    }

    pub fn preview(&self) -> Option<&str> {
        self.preview.as_deref()
    }

    /// Start reading a newly selected file.
    ///
    /// Any read still in flight becomes stale.
    pub fn begin_image_load(&mut self) -> ImageTicket {
        self.version += 1;
        ImageTicket { version: self.version }
    }

    /// Store a finished read into both the preview and the draft.
    ///
    /// Returns false (and changes nothing) when the ticket is stale.
    pub fn complete_image_load(&mut self, ticket: ImageTicket, payload: String) -> bool {
        if ticket.version != self.version {
            log::debug!("[FORM] Dropping stale image read (v{} != v{})", ticket.version, self.version);
            return false;
        }
        self.draft.image = Some(payload.clone());
        self.preview = Some(payload);
        true
    }

    /// Discard the draft and preview
    pub fn reset(&mut self) {
        self.draft = ItemDraft::default();
        self.preview = None;
        self.version += 1;
    }

    /// Commit the draft into the catalog.
    ///
    /// The form is cleared only on success; a rejected draft stays for editing.
    pub fn submit(&mut self, catalog: &mut Catalog, date: NaiveDate) -> Result<ItemId> {
        let id = catalog.register(self.draft.clone(), date)?;
        self.reset();
        Ok(id)
    }
}
