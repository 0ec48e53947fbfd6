//! drsa-index
//!
//! Symbol index and documentation cross-referencing for the DRSA library.

pub mod index;

// Re-export commonly used types
pub use index::{NotebookIndex, SymbolIndex, custom_doc_links, doc_page, get_index};
