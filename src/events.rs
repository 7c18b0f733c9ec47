//! Section events – notification at footer-class row insertion. The sink is
//! injected into the list manager, so observers stay decoupled from it and
//! tests can record dispatches.

use crate::row::Row;
use crate::store::Store;

/// Which boundary was crossed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// A page footer landed while a page was being finalized.
    PageFooterInsert,
    /// The list footer landed while the whole list was being finalized.
    FooterInsert,
}

/// A footer-class row was placed. The row and the list store are borrowed
/// mutably so a listener can stamp values (page totals, counters) into the
/// row before anything else observes it.
pub struct SectionEvent<'a> {
    pub kind: EventKind,
    pub row: &'a mut Row,
    pub store: &'a mut Store,
}

/// Dispatch capability injected into the list manager. Fire-and-forget:
/// dispatch returns nothing and the manager never inspects listener state.
pub trait EventSink {
    fn dispatch(&mut self, event: SectionEvent<'_>);
}

/// Sink that drops every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn dispatch(&mut self, _event: SectionEvent<'_>) {}
}

/// Adapter turning any closure into a sink.
pub struct FnSink<F>(pub F);

impl<F: FnMut(SectionEvent<'_>)> EventSink for FnSink<F> {
    fn dispatch(&mut self, event: SectionEvent<'_>) {
        (self.0)(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::{SectionFormat, SectionKind};
    use serde_json::json;

    #[test]
    fn closure_sink_sees_row_and_store() {
        let mut row = Row::from_section(
            SectionKind::PageFooter,
            &SectionFormat {
                height: 20.0,
                fields: Vec::new(),
            },
        );
        let mut store = Store::default();
        store.set("page", json!(1));

        let mut kinds = Vec::new();
        let mut sink = FnSink(|event: SectionEvent<'_>| {
            kinds.push(event.kind);
            event.store.set("page", json!(2));
        });
        sink.dispatch(SectionEvent {
            kind: EventKind::PageFooterInsert,
            row: &mut row,
            store: &mut store,
        });

        assert_eq!(kinds, vec![EventKind::PageFooterInsert]);
        assert_eq!(store.get("page"), Some(&json!(2)));
    }
}
