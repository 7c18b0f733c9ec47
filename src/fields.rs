//! Field resolution – the lookup-and-instantiate service behind each row:
//! static field descriptors become live, value-bearing fields lazily, and a
//! live field is memoized so repeated lookups return the same instance.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// What a field renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    Image,
}

/// Static descriptor of one field within a section band.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldFormat {
    pub id: String,
    #[serde(default = "default_kind")]
    pub kind: FieldKind,
    /// Value used when none is applied at runtime.
    #[serde(default)]
    pub default: Option<Value>,
    /// Hidden fields never appear in the exported layout.
    #[serde(default = "default_display")]
    pub display: bool,
}

fn default_kind() -> FieldKind {
    FieldKind::Text
}

fn default_display() -> bool {
    true
}

/// A live, data-bound field instance.
#[derive(Debug, Clone)]
pub struct Field {
    format: FieldFormat,
    value: Option<Value>,
    display: Option<bool>,
}

impl Field {
    fn new(format: FieldFormat) -> Self {
        Self {
            format,
            value: None,
            display: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.format.id
    }

    pub fn kind(&self) -> FieldKind {
        self.format.kind
    }

    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    pub fn set_value(&mut self, value: Value) {
        self.value = Some(value);
    }

    /// Runtime visibility override; without one, the descriptor decides.
    pub fn set_display(&mut self, display: bool) {
        self.display = Some(display);
    }

    pub fn display(&self) -> bool {
        self.display.unwrap_or(self.format.display)
    }

    /// The value as it will be exported: the applied value, else the default.
    pub fn resolved_value(&self) -> Option<Value> {
        self.value.clone().or_else(|| self.format.default.clone())
    }
}

/// Restrict a field lookup to a subset of kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeFilter {
    #[default]
    Any,
    Only(FieldKind),
    Except(FieldKind),
}

impl TypeFilter {
    fn allows(self, kind: FieldKind) -> bool {
        match self {
            TypeFilter::Any => true,
            TypeFilter::Only(k) => kind == k,
            TypeFilter::Except(k) => kind != k,
        }
    }
}

/// Per-row field registry.
#[derive(Debug, Clone, Default)]
pub struct FieldSet {
    formats: Vec<FieldFormat>,
    live: BTreeMap<String, Field>,
}

impl FieldSet {
    pub fn new(formats: Vec<FieldFormat>) -> Self {
        Self {
            formats,
            live: BTreeMap::new(),
        }
    }

    pub fn find_format(&self, id: &str) -> Option<&FieldFormat> {
        self.formats.iter().find(|f| f.id == id)
    }

    /// Look up a live field, instantiating it from its descriptor on first
    /// access. Unknown ids and kinds the filter rejects yield `None`.
    pub fn find(&mut self, id: &str, filter: TypeFilter) -> Option<&mut Field> {
        if !self.live.contains_key(id) {
            let format = self.find_format(id)?.clone();
            self.live.insert(id.to_string(), Field::new(format));
        }
        let field = self.live.get_mut(id)?;
        if filter.allows(field.kind()) {
            Some(field)
        } else {
            None
        }
    }

    /// `(id, kind, value)` triples as they should appear in final output, in
    /// descriptor order: displayed fields only, and only those carrying an
    /// applied or default value. Descriptors never touched at runtime are
    /// resolved the same way.
    pub fn final_values(&self) -> Vec<(&str, FieldKind, Value)> {
        let mut out = Vec::new();
        for format in &self.formats {
            let live = self.live.get(&format.id);
            let display = live.map_or(format.display, Field::display);
            if !display {
                continue;
            }
            let value = match live {
                Some(field) => field.resolved_value(),
                None => format.default.clone(),
            };
            if let Some(value) = value {
                out.push((format.id.as_str(), format.kind, value));
            }
        }
        out
    }
}
