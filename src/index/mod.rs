//! Embedded symbol index for the DRSA library
//!
//! This module provides access to the embedded, compressed index metadata
//! produced by the notebook export tooling. The metadata is compressed at
//! compile time and decompressed on first access, with an in-memory index
//! built for fast lookups.
//!
//! # Usage
//!
//! ```
//! use drsa_index::index::get_index;
//!
//! // Get the global symbol index
//! let index = get_index();
//!
//! // Look up where a symbol is defined
//! if let Some(source) = index.source_of("survival_rate") {
//!     println!("survival_rate is defined in {}", source);
//! }
//!
//! // Resolve its documentation page
//! if let Some(link) = index.doc_link("survival_rate") {
//!     println!("docs: {}", link);
//! }
//! ```

mod embedded;
mod types;

pub use embedded::get_index;
pub use types::{NotebookIndex, SymbolIndex, custom_doc_links, doc_page};
