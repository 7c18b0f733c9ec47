//! List manager – the pagination state machine. Inserts data-bound rows,
//! detects overflow against the format-derived page budget, breaks pages,
//! and drives the page/list finalization protocol.
//!
//! A manager is a controller, not an owner: it acts on the report through
//! the index of its current page, and rebinds to a fresh page on page
//! break. Binding takes the report by unique borrow, so a second manager
//! cannot mutate the same list at the same time.

use crate::error::{Error, Result};
use crate::events::{EventKind, EventSink, SectionEvent};
use crate::format::{ListFormat, SectionKind};
use crate::page::{Page, PageState, Report};
use crate::row::{Row, ValueMap};
use crate::store::{Configuration, Store};

/// One-way list lifecycle, distinct from any single page's status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListStatus {
    #[default]
    Open,
    Finalized,
}

pub struct ListManager<'a> {
    report: &'a mut Report,
    current: usize,
    config: &'a mut Configuration,
    events: &'a mut dyn EventSink,
    page_max_height: f64,
    status: ListStatus,
}

impl<'a> ListManager<'a> {
    /// Bind a manager to `page` of `report`.
    pub fn new(
        report: &'a mut Report,
        page: usize,
        config: &'a mut Configuration,
        events: &'a mut dyn EventSink,
    ) -> Self {
        let page_max_height = compute_page_max_height(report.format());
        Self {
            report,
            current: page,
            config,
            events,
            page_max_height,
            status: ListStatus::Open,
        }
    }

    pub fn current_page(&self) -> &Page {
        self.report.page(self.current)
    }

    pub fn current_page_state(&self) -> &PageState {
        &self.report.page(self.current).state
    }

    /// Rebind to another page of the report. The previous binding is gone —
    /// every further operation acts on the new page.
    pub fn switch_current(&mut self, page: usize) {
        self.current = page;
    }

    pub fn store(&mut self) -> &mut Store {
        &mut self.config.store
    }

    pub fn status(&self) -> ListStatus {
        self.status
    }

    pub fn is_finalized(&self) -> bool {
        self.status == ListStatus::Finalized
    }

    pub fn auto_page_break(&self) -> bool {
        self.format().auto_page_break
    }

    /// Budget available to inserted rows. The page footer is always
    /// reserved; the footer is reserved too when the list cannot break onto
    /// a new page, since any page might then be the one it ends on.
    pub fn page_max_height(&self) -> f64 {
        self.page_max_height
    }

    /// Would placing `kind` overflow the current page? Pure: consults the
    /// accumulated height and the format geometry only.
    pub fn overflow_with(&self, kind: SectionKind) -> bool {
        self.current_page_state().height() + self.format().section_height(kind)
            > self.page_max_height
    }

    /// Insert one detail row.
    ///
    /// Returns `true` when the row landed (on the current page, or on a
    /// fresh page after an automatic page break). Returns `false` when the
    /// current page is already finalized, or when the row no longer fits
    /// and automatic page breaking is off — in that case the whole list is
    /// finalized and closed to further details.
    pub fn insert_detail(&mut self, values: &ValueMap) -> bool {
        self.insert_detail_with(values, |_| {})
    }

    /// [`ListManager::insert_detail`] with a customization closure run on
    /// the freshly built row before placement.
    pub fn insert_detail_with(&mut self, values: &ValueMap, build: impl FnOnce(&mut Row)) -> bool {
        if self.current_page_state().is_finalized() {
            return false;
        }

        if self.overflow_with(SectionKind::Detail) {
            if self.auto_page_break() {
                self.break_page();
                // A freshly copied page cannot itself be full.
                self.push_section_row(SectionKind::Detail, values, build);
                true
            } else {
                self.finalize();
                false
            }
        } else {
            self.push_section_row(SectionKind::Detail, values, build);
            true
        }
    }

    /// Low-level primitive: build a row for `kind`, place it at the current
    /// accumulated height, and append it. No overflow check — the caller
    /// decides when this is safe. An undeclared band yields an empty
    /// zero-height row.
    pub fn insert_row(&mut self, kind: SectionKind, values: &ValueMap) -> &mut Row {
        self.insert_row_with(kind, values, |_| {})
    }

    /// [`ListManager::insert_row`] with a customization closure.
    pub fn insert_row_with(
        &mut self,
        kind: SectionKind,
        values: &ValueMap,
        build: impl FnOnce(&mut Row),
    ) -> &mut Row {
        let index = self.push_section_row(kind, values, build);
        self.report.page_mut(self.current).state.row_mut(index)
    }

    /// Access the current page's header row, creating it on first call.
    /// Values are (re)applied on every call; only one header row exists per
    /// page. Fails when the format declares no header band.
    ///
    /// A populated header occupies its full band height, so populate it
    /// before inserting detail rows.
    pub fn header(&mut self, values: &ValueMap) -> Result<&mut Row> {
        self.header_with(values, |_| {})
    }

    /// [`ListManager::header`] with a customization closure.
    pub fn header_with(
        &mut self,
        values: &ValueMap,
        build: impl FnOnce(&mut Row),
    ) -> Result<&mut Row> {
        let section = self
            .format()
            .section(SectionKind::Header)
            .cloned()
            .ok_or(Error::DisabledSection(SectionKind::Header))?;

        let state = &mut self.report.page_mut(self.current).state;
        let header =
            state.header_or_insert(|| Row::from_section(SectionKind::Header, &section));
        header.set_height(section.height);
        header.apply_values(values);
        build(header);
        Ok(header)
    }

    /// Close the current page: ensure the header slot exists, insert the
    /// page footer (its height is already reserved in the page budget),
    /// notify, and mark the page finalized. Idempotent — a no-op on an
    /// already-finalized page.
    pub fn finalize_page(&mut self) {
        if self.current_page_state().is_finalized() {
            return;
        }

        if self.current_page_state().header().is_none() {
            if let Some(section) = self.format().section(SectionKind::Header).cloned() {
                // An unpopulated header slot occupies no height.
                let mut slot = Row::from_section(SectionKind::Header, &section);
                slot.set_height(0.0);
                self.report.page_mut(self.current).state.set_header(slot);
            }
        }

        if self.format().has_page_footer() {
            let index = self.push_section_row(SectionKind::PageFooter, &ValueMap::new(), |_| {});
            self.dispatch(EventKind::PageFooterInsert, index);
        }

        self.report.page_mut(self.current).state.finalize();
    }

    /// Close the whole list: settle the current page, then place the footer
    /// — on a fresh page of its own when automatic page breaking is on and
    /// the footer no longer fits. Idempotent — a no-op once the list is
    /// finalized.
    ///
    /// Footer placement happens last: its height is excluded from the page
    /// budget of auto-breaking lists exactly so it can spill here.
    pub fn finalize(&mut self) {
        if self.is_finalized() {
            return;
        }

        self.finalize_page();

        if self.format().has_footer() {
            if self.auto_page_break() && self.overflow_with(SectionKind::Footer) {
                // The spill page carries the footer alone and stays open.
                let next = self.report.copy_page();
                self.switch_current(next);
            }
            let index = self.push_section_row(SectionKind::Footer, &ValueMap::new(), |_| {});
            self.dispatch(EventKind::FooterInsert, index);
        }

        self.status = ListStatus::Finalized;
    }

    fn format(&self) -> &ListFormat {
        self.report.format()
    }

    // Close the current page and rebind to a fresh copy of it.
    fn break_page(&mut self) {
        self.finalize_page();
        let full = self.current;
        let next = self.report.copy_page();
        log::debug!(
            "list '{}': page {full} is full, continuing on page {next}",
            self.report.format().id
        );
        self.switch_current(next);
    }

    fn push_section_row(
        &mut self,
        kind: SectionKind,
        values: &ValueMap,
        build: impl FnOnce(&mut Row),
    ) -> usize {
        let section = self.format().section(kind).cloned().unwrap_or_default();
        let mut row = Row::from_section(kind, &section);
        row.apply_values(values);
        build(&mut row);

        let state = &mut self.report.page_mut(self.current).state;
        row.move_top_to(state.height());
        state.push_row(row)
    }

    // Hands the sink the inserted row and the store without aliasing the
    // rest of the manager.
    fn dispatch(&mut self, kind: EventKind, row_index: usize) {
        let row = self.report.page_mut(self.current).state.row_mut(row_index);
        self.events.dispatch(SectionEvent {
            kind,
            row,
            store: &mut self.config.store,
        });
    }
}

fn compute_page_max_height(format: &ListFormat) -> f64 {
    let mut height = format.height;
    height -= format.section_height(SectionKind::PageFooter);
    if !format.auto_page_break {
        height -= format.section_height(SectionKind::Footer);
    }
    height
}
