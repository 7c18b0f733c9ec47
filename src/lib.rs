//! # bandpage – banded-list pagination engine
//!
//! Places a sequence of data-bound section rows (detail records plus
//! optional header/footer bands) onto a sequence of pages, deciding when a
//! page is full and how to continue the list onto a new page or terminate
//! it. The stages are:
//!
//! 1. **Describe** – parse and validate a list format ([`format`])
//! 2. **Build** – insert data-bound rows through the list manager
//!    ([`manager`]), which breaks pages and runs the finalization protocol
//! 3. **Observe** – footer-class insertions notify an injected sink
//!    ([`events`]) with access to the per-list store ([`store`])
//! 4. **Export** – freeze the finished pages into a serialisable layout
//!    ([`output`])
//!
//! Rendering the frozen layout (text, PDF, anything visual) is a consumer's
//! concern; this crate decides *what goes on which page, in what order, and
//! when a list is done*.

pub mod error;
pub mod events;
pub mod fields;
pub mod format;
pub mod manager;
pub mod output;
pub mod page;
pub mod pipeline;
pub mod row;
pub mod store;
pub mod templates;

// Re-exports for convenience
pub use error::{Error, Result};
pub use format::{ListFormat, SectionKind};
pub use manager::ListManager;
pub use output::DocumentLayout;
pub use page::Report;
pub use pipeline::{build_document, build_document_from_json, ListData, RunConfig};
