//! Frozen layout – the serialisable record of what landed on each page, in
//! what order, at which offsets. This is the hand-off between the
//! pagination engine and whatever renders the result.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;
use crate::fields::FieldKind;
use crate::format::SectionKind;
use crate::page::{Page, Report};
use crate::row::Row;

/// A complete laid-out document ready for rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentLayout {
    /// Document title carried through to the renderer.
    #[serde(default = "DocumentLayout::default_title")]
    pub title: String,
    pub list_id: String,
    /// Ordered list of pages.
    pub pages: Vec<PageLayout>,
}

/// One page of content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageLayout {
    pub page_index: usize,
    /// Accumulated content height of the page.
    pub height: f64,
    pub finalized: bool,
    /// Rows top-to-bottom; the header, when present, comes first.
    pub rows: Vec<RowLayout>,
}

/// One placed section row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RowLayout {
    pub section: SectionKind,
    /// Offset from the top of the list area, in points.
    pub y: f64,
    pub height: f64,
    pub fields: Vec<FieldLayout>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldLayout {
    pub id: String,
    pub kind: FieldKind,
    pub value: Value,
}

impl DocumentLayout {
    /// Freeze a report into its layout.
    pub fn from_report(report: &Report, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            list_id: report.format().id.clone(),
            pages: report.pages().iter().map(PageLayout::from_page).collect(),
        }
    }

    fn default_title() -> String {
        "bandpage output".to_string()
    }

    /// Serialise to JSON.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Deserialise from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Total rows across all pages, headers included.
    pub fn row_count(&self) -> usize {
        self.pages.iter().map(|p| p.rows.len()).sum()
    }
}

impl PageLayout {
    fn from_page(page: &Page) -> Self {
        let state = &page.state;
        let mut rows = Vec::new();
        if let Some(header) = state.header() {
            rows.push(RowLayout::from_row(header));
        }
        rows.extend(state.rows().iter().map(RowLayout::from_row));
        Self {
            page_index: page.index(),
            height: state.height(),
            finalized: state.is_finalized(),
            rows,
        }
    }
}

impl RowLayout {
    fn from_row(row: &Row) -> Self {
        let fields = row
            .fields()
            .final_values()
            .into_iter()
            .map(|(id, kind, value)| FieldLayout {
                id: id.to_string(),
                kind,
                value,
            })
            .collect();
        Self {
            section: row.kind(),
            y: row.top(),
            height: row.height(),
            fields,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::ListFormat;

    #[test]
    fn empty_report_freezes_to_one_blank_page() {
        let format = ListFormat::from_json(
            r#"{"id": "items", "height": 100, "detail": {"height": 20}}"#,
        )
        .unwrap();
        let report = Report::new(format);
        let layout = DocumentLayout::from_report(&report, "demo");
        assert_eq!(layout.pages.len(), 1);
        assert_eq!(layout.row_count(), 0);
        assert!(!layout.pages[0].finalized);
    }

    #[test]
    fn json_roundtrip() {
        let format = ListFormat::from_json(
            r#"{"id": "items", "height": 100, "detail": {"height": 20}}"#,
        )
        .unwrap();
        let layout = DocumentLayout::from_report(&Report::new(format), "demo");
        let parsed = DocumentLayout::from_json(&layout.to_json()).unwrap();
        assert_eq!(parsed.title, "demo");
        assert_eq!(parsed.list_id, "items");
        assert_eq!(parsed.pages.len(), layout.pages.len());
    }
}
