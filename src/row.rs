//! Rows – one live, data-bound occurrence of a section band, positioned
//! vertically on a page once inserted.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::fields::{Field, FieldSet, TypeFilter};
use crate::format::{SectionFormat, SectionKind};

/// Values applied to a row, keyed by field id.
pub type ValueMap = BTreeMap<String, Value>;

/// A live occurrence of a section on a page.
///
/// Before insertion a row is owned by whoever builds it; after insertion it
/// is owned by the page state that holds it, and records its height and
/// vertical offset.
#[derive(Debug, Clone)]
pub struct Row {
    kind: SectionKind,
    height: f64,
    top: f64,
    fields: FieldSet,
}

impl Row {
    /// Instantiate an empty row from its section's format. Height starts at
    /// the band's format height.
    pub fn from_section(kind: SectionKind, section: &SectionFormat) -> Self {
        Self {
            kind,
            height: section.height,
            top: 0.0,
            fields: FieldSet::new(section.fields.clone()),
        }
    }

    pub fn kind(&self) -> SectionKind {
        self.kind
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Vertical offset from the top of the list area, set at insertion.
    pub fn top(&self) -> f64 {
        self.top
    }

    pub(crate) fn set_height(&mut self, height: f64) {
        self.height = height;
    }

    pub(crate) fn move_top_to(&mut self, top: f64) {
        self.top = top;
    }

    /// Mutable access to a live field, lazily instantiated on first use.
    pub fn field(&mut self, id: &str) -> Option<&mut Field> {
        self.fields.find(id, TypeFilter::Any)
    }

    /// Like [`Row::field`], restricted to a subset of field kinds.
    pub fn field_by(&mut self, id: &str, filter: TypeFilter) -> Option<&mut Field> {
        self.fields.find(id, filter)
    }

    /// Apply a values map. Each key resolves to a field id; unknown ids are
    /// logged and skipped.
    pub fn apply_values(&mut self, values: &ValueMap) {
        for (id, value) in values {
            match self.fields.find(id, TypeFilter::Any) {
                Some(field) => field.set_value(value.clone()),
                None => log::warn!("no field '{id}' in {} section — value skipped", self.kind),
            }
        }
    }

    pub fn fields(&self) -> &FieldSet {
        &self.fields
    }
}
