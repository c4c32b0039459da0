//! # Folio Common Library
//!
//! Data layer shared by the Folio gallery service:
//! - Date and tag parsing
//! - Project records and the year-keyed document loader
//! - Filter state, render context and tag vocabulary
//! - Configuration loading
//! - Gallery event types and the event bus
//!
//! Nothing in this crate touches HTTP or markup; the presentation layer lives
//! in `folio-ui`.

pub mod config;
pub mod dates;
pub mod error;
pub mod events;
pub mod filter;
pub mod loader;
pub mod records;
pub mod tags;
pub mod view;
pub mod vocabulary;

pub use error::{Error, Result};
pub use filter::FilterState;
pub use loader::{Catalog, DataSource};
pub use records::ProjectRecord;
pub use view::{ProjectCount, RenderContext};
pub use vocabulary::TagVocabulary;
