//! List format – the static, read-only description of a banded list
//! template: which sections exist, their fixed heights, the total height the
//! list may occupy on a page, and the page-break policy.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::fields::FieldFormat;

/// A named structural band within a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    /// Top band, at most one per page.
    Header,
    /// Repeating data-bound band.
    Detail,
    /// Closing band of the whole list, placed once.
    Footer,
    /// Trailing band repeated on every finalized page.
    PageFooter,
}

impl SectionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            SectionKind::Header => "header",
            SectionKind::Detail => "detail",
            SectionKind::Footer => "footer",
            SectionKind::PageFooter => "page_footer",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static description of one section band.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SectionFormat {
    /// Band height in points.
    pub height: f64,
    /// Field descriptors bound to this band.
    #[serde(default)]
    pub fields: Vec<FieldFormat>,
}

/// Static description of a whole list template.
///
/// Only the detail band is mandatory; header, footer, and page-footer are
/// declared by presence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListFormat {
    /// List identity, shared by every page the list spans.
    pub id: String,
    /// Total height available to the list on one page, in points.
    pub height: f64,
    /// Continue onto a fresh page when full instead of closing the list.
    #[serde(default = "default_auto_page_break")]
    pub auto_page_break: bool,
    pub detail: SectionFormat,
    #[serde(default)]
    pub header: Option<SectionFormat>,
    #[serde(default)]
    pub footer: Option<SectionFormat>,
    #[serde(default)]
    pub page_footer: Option<SectionFormat>,
}

fn default_auto_page_break() -> bool {
    true
}

impl ListFormat {
    /// Parse a format from JSON and check its invariants.
    pub fn from_json(json: &str) -> Result<Self> {
        let format: Self = serde_json::from_str(json)?;
        format.validate()?;
        Ok(format)
    }

    /// Serialise to JSON.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    pub fn section(&self, kind: SectionKind) -> Option<&SectionFormat> {
        match kind {
            SectionKind::Detail => Some(&self.detail),
            SectionKind::Header => self.header.as_ref(),
            SectionKind::Footer => self.footer.as_ref(),
            SectionKind::PageFooter => self.page_footer.as_ref(),
        }
    }

    /// Height of a band; 0 when the format does not declare it.
    pub fn section_height(&self, kind: SectionKind) -> f64 {
        self.section(kind).map_or(0.0, |s| s.height)
    }

    pub fn has_header(&self) -> bool {
        self.header.is_some()
    }

    pub fn has_footer(&self) -> bool {
        self.footer.is_some()
    }

    pub fn has_page_footer(&self) -> bool {
        self.page_footer.is_some()
    }

    /// Check the geometric invariants: every declared height is a
    /// non-negative finite number, and the total height holds every declared
    /// band at least once.
    pub fn validate(&self) -> Result<()> {
        let mut declared = 0.0;
        for kind in [
            SectionKind::Header,
            SectionKind::Detail,
            SectionKind::Footer,
            SectionKind::PageFooter,
        ] {
            if let Some(section) = self.section(kind) {
                if !section.height.is_finite() || section.height < 0.0 {
                    return Err(Error::InvalidFormat(format!(
                        "{kind} height must be a non-negative number, got {}",
                        section.height
                    )));
                }
                declared += section.height;
            }
        }
        if !self.height.is_finite() || self.height < declared {
            return Err(Error::InvalidFormat(format!(
                "total height {} cannot hold the {declared} needed by the declared sections",
                self.height
            )));
        }
        Ok(())
    }
}
