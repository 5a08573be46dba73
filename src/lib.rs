//! # brickdex
//!
//! A browser for build-instruction catalogs: load a JSON list of instruction
//! documents (title, category, difficulty, tags, image, PDF link), filter and
//! search it, render the visible items as cards, and preview a document
//! without leaving the browser.
//!
//! The pipeline (load, index, filter, map to card views) is plain library
//! code, with the interactive terminal UI layered on top as a rendering
//! adapter, so everything down to the preview-modal state machine is testable
//! without a terminal.
//!
//! ## Example
//!
//! ```rust,no_run
//! use brickdex::{Catalog, CardView, FilterCriteria, FilterEngine};
//!
//! // Load the embedded demo catalog
//! let catalog = Catalog::load_embedded().unwrap();
//!
//! // One filter pass
//! let criteria = FilterCriteria::new().with_search("rover");
//! let visible = FilterEngine::new(&catalog).apply(&criteria);
//!
//! for item in visible {
//!     let card = CardView::from_item(item);
//!     println!("{}: {}", card.title, card.meta);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`core`]: item and filter-criteria data types
//! - [`catalog`]: catalog loading (file, URL, embedded) and the derived
//!   category index
//! - [`filter`]: the pure filtering engine
//! - [`view`]: card view models, URL resolution, the stats line
//! - [`ui`]: browser state, the preview modal, and the terminal adapter
//! - [`cli`]: command-line interface implementation
//! - [`web`]: static delivery server for catalog directories

pub mod catalog;
pub mod cli;
pub mod core;
pub mod filter;
pub mod ui;
pub mod view;
pub mod web;

// Re-export commonly used types for convenience
pub use crate::catalog::store::{Catalog, CatalogError, CatalogSource};
pub use crate::core::criteria::FilterCriteria;
pub use crate::core::item::{CatalogItem, Difficulty};
pub use crate::filter::engine::FilterEngine;
pub use crate::ui::modal::{CloseTrigger, PreviewModal};
pub use crate::ui::state::{BrowserState, LoadStatus};
pub use crate::view::card::CardView;
