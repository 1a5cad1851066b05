//! Lost & Found Core
//!
//! In-memory state for the campus lost & found board:
//! - domain: items, categories, statuses
//! - filter: search and selector matching
//! - catalog: ordered collection, registration, status toggle, tallies
//! - draft: registration form and image read tickets
//! - session: the whole page state and its transitions
//! - config: title and seed catalog

pub mod catalog;
pub mod config;
pub mod domain;
pub mod draft;
pub mod error;
pub mod filter;
pub mod session;

pub use catalog::{Catalog, CategoryTally};
pub use config::AppConfig;
pub use domain::{Category, CategoryFilter, CategoryMeta, Item, ItemDraft, ItemId, Status, StatusFilter};
pub use draft::{ImageTicket, RegistrationForm};
pub use error::{CatalogError, RequiredField, Result, ValidationError};
pub use filter::FilterCriteria;
pub use session::{Modal, Session};
