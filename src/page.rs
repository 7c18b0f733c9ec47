//! Pages – per-page bookkeeping for a running list, and the report that owns
//! the page sequence and mints continuation pages.

use crate::format::ListFormat;
use crate::row::Row;

/// One-way page lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageStatus {
    #[default]
    Open,
    Finalized,
}

/// Mutable per-page record: the header slot, the ordered rows placed so far,
/// the accumulated content height, and the finalization status.
///
/// Accumulated height is monotonically non-decreasing while the page is
/// open: rows only ever add height, and the status never leaves
/// `Finalized`.
#[derive(Debug, Clone, Default)]
pub struct PageState {
    header: Option<Row>,
    rows: Vec<Row>,
    rows_height: f64,
    status: PageStatus,
}

impl PageState {
    /// Accumulated content height: the header (if any) plus every inserted
    /// row.
    pub fn height(&self) -> f64 {
        self.rows_height + self.header.as_ref().map_or(0.0, |h| h.height())
    }

    /// Rows in insertion order, which is also vertical order. Covers detail
    /// rows and, once finalized, the trailing footer bands — the header
    /// lives in its own slot.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn header(&self) -> Option<&Row> {
        self.header.as_ref()
    }

    pub(crate) fn header_or_insert(&mut self, make: impl FnOnce() -> Row) -> &mut Row {
        self.header.get_or_insert_with(make)
    }

    pub(crate) fn set_header(&mut self, row: Row) {
        self.header = Some(row);
    }

    /// Append a row and grow the accumulated height. Returns its index.
    pub(crate) fn push_row(&mut self, row: Row) -> usize {
        self.rows_height += row.height();
        self.rows.push(row);
        self.rows.len() - 1
    }

    pub(crate) fn row_mut(&mut self, index: usize) -> &mut Row {
        &mut self.rows[index]
    }

    pub fn status(&self) -> PageStatus {
        self.status
    }

    pub fn is_finalized(&self) -> bool {
        self.status == PageStatus::Finalized
    }

    pub(crate) fn finalize(&mut self) {
        self.status = PageStatus::Finalized;
    }
}

/// One page of a running list.
#[derive(Debug, Clone)]
pub struct Page {
    index: usize,
    list_id: String,
    pub state: PageState,
}

impl Page {
    fn new(index: usize, list_id: String) -> Self {
        Self {
            index,
            list_id,
            state: PageState::default(),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// The list identity this page is bound to — stable across page breaks.
    pub fn list_id(&self) -> &str {
        &self.list_id
    }
}

/// Owns the page sequence for one list run.
#[derive(Debug, Clone)]
pub struct Report {
    format: ListFormat,
    pages: Vec<Page>,
}

impl Report {
    /// Create a report with one blank page bound to the format's list id.
    pub fn new(format: ListFormat) -> Self {
        let first = Page::new(0, format.id.clone());
        Self {
            format,
            pages: vec![first],
        }
    }

    pub fn format(&self) -> &ListFormat {
        &self.format
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn page(&self, index: usize) -> &Page {
        &self.pages[index]
    }

    pub(crate) fn page_mut(&mut self, index: usize) -> &mut Page {
        &mut self.pages[index]
    }

    /// Duplicate the page identity onto a fresh blank page, ready to receive
    /// the continuation of the list. Returns the new page's index.
    pub fn copy_page(&mut self) -> usize {
        let index = self.pages.len();
        self.pages.push(Page::new(index, self.format.id.clone()));
        index
    }
}
