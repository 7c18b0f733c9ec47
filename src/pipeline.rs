//! Pipeline – ties format parsing, list building, finalization, and layout
//! export into a single function call.

use serde::Deserialize;

use crate::error::Result;
use crate::events::{EventSink, NullSink};
use crate::format::ListFormat;
use crate::manager::ListManager;
use crate::output::DocumentLayout;
use crate::page::Report;
use crate::row::ValueMap;
use crate::store::ConfigRegistry;

/// The data bound to one list run.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListData {
    /// Values for the header band, applied before any detail row.
    #[serde(default)]
    pub header: Option<ValueMap>,
    /// One values map per detail record, in insertion order.
    #[serde(default)]
    pub details: Vec<ValueMap>,
}

impl ListData {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Options for a list run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Title stamped into the exported layout.
    pub title: String,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            title: "bandpage output".to_string(),
        }
    }
}

/// Run a list: bind a manager to a fresh report, apply the header, insert
/// every detail record until the list closes, finalize, and freeze the
/// resulting pages.
pub fn build_document(
    format: &ListFormat,
    data: &ListData,
    config: &RunConfig,
    events: &mut dyn EventSink,
) -> Result<DocumentLayout> {
    format.validate()?;

    let mut report = Report::new(format.clone());
    let mut registry = ConfigRegistry::new();
    let list_config = registry.activate(&format.id);

    let mut manager = ListManager::new(&mut report, 0, list_config, events);

    if let Some(header) = &data.header {
        manager.header(header)?;
    }

    for (index, record) in data.details.iter().enumerate() {
        if !manager.insert_detail(record) {
            log::info!(
                "list '{}' closed after {index} of {} records",
                format.id,
                data.details.len()
            );
            break;
        }
    }
    manager.finalize();

    Ok(DocumentLayout::from_report(&report, config.title.clone()))
}

/// Convenience: JSON format + JSON data → laid-out document.
pub fn build_document_from_json(format_json: &str, data_json: &str) -> Result<DocumentLayout> {
    let format = ListFormat::from_json(format_json)?;
    let data = ListData::from_json(data_json)?;
    build_document(&format, &data, &RunConfig::default(), &mut NullSink)
}
