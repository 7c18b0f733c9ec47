//! Sample list formats and data sets for testing and demonstration.
//!
//! Each format exercises a different page-break policy and section mix.

/// Invoice-style list: all four bands, automatic page breaking.
pub fn invoice_format() -> &'static str {
    r##"
{
    "id": "invoice_items",
    "height": 600,
    "auto_page_break": true,
    "header": {
        "height": 60,
        "fields": [
            {"id": "title", "default": "Invoice"},
            {"id": "customer"},
            {"id": "logo", "kind": "image", "display": false}
        ]
    },
    "detail": {
        "height": 24,
        "fields": [
            {"id": "description"},
            {"id": "qty"},
            {"id": "unit_price"},
            {"id": "amount"}
        ]
    },
    "page_footer": {
        "height": 20,
        "fields": [
            {"id": "carry_note", "default": "continued overleaf"}
        ]
    },
    "footer": {
        "height": 40,
        "fields": [
            {"id": "total"},
            {"id": "note", "default": "Payable within 30 days"}
        ]
    }
}
"##
}

/// Bounded ledger: no automatic page breaking, so the footer is reserved on
/// the page and the list closes when full.
pub fn ledger_format() -> &'static str {
    r##"
{
    "id": "ledger",
    "height": 300,
    "auto_page_break": false,
    "detail": {
        "height": 50,
        "fields": [
            {"id": "entry"}
        ]
    },
    "page_footer": {
        "height": 20,
        "fields": [
            {"id": "page_note", "default": "end of page"}
        ]
    },
    "footer": {
        "height": 30,
        "fields": [
            {"id": "balance"}
        ]
    }
}
"##
}

/// Minimal detail-only format for unit testing.
pub fn minimal_format() -> &'static str {
    r#"{"id": "rows", "height": 120, "detail": {"height": 40, "fields": [{"id": "line"}]}}"#
}

/// Data for [`invoice_format`]: a header plus eight line items.
pub fn invoice_data() -> &'static str {
    r##"
{
    "header": {"customer": "Client Inc"},
    "details": [
        {"description": "Web development", "qty": 40, "unit_price": 150, "amount": 6000},
        {"description": "Design services", "qty": 20, "unit_price": 125, "amount": 2500},
        {"description": "Hosting (annual)", "qty": 1, "unit_price": 500, "amount": 500},
        {"description": "Domain renewal", "qty": 3, "unit_price": 15, "amount": 45},
        {"description": "Support retainer", "qty": 6, "unit_price": 200, "amount": 1200},
        {"description": "Content migration", "qty": 12, "unit_price": 80, "amount": 960},
        {"description": "Accessibility audit", "qty": 1, "unit_price": 750, "amount": 750},
        {"description": "Performance tuning", "qty": 8, "unit_price": 140, "amount": 1120}
    ]
}
"##
}

/// Data for [`ledger_format`]: six entries, one more than fits.
pub fn ledger_data() -> &'static str {
    r##"
{
    "details": [
        {"entry": "Opening balance"},
        {"entry": "Office supplies"},
        {"entry": "Travel"},
        {"entry": "Software licences"},
        {"entry": "Catering"},
        {"entry": "Miscellaneous"}
    ]
}
"##
}

/// Data for [`minimal_format`].
pub fn minimal_data() -> &'static str {
    r#"{"details": [{"line": "a"}, {"line": "b"}, {"line": "c"}]}"#
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::ListFormat;
    use crate::pipeline::ListData;

    #[test]
    fn formats_are_valid() {
        let formats: Vec<(&str, &str)> = vec![
            ("invoice", invoice_format()),
            ("ledger", ledger_format()),
            ("minimal", minimal_format()),
        ];

        for (name, json) in formats {
            let format = ListFormat::from_json(json);
            assert!(format.is_ok(), "Format '{}' should parse: {:?}", name, format.err());
        }
    }

    #[test]
    fn data_sets_are_valid() {
        let data_sets: Vec<(&str, &str)> = vec![
            ("invoice", invoice_data()),
            ("ledger", ledger_data()),
            ("minimal", minimal_data()),
        ];

        for (name, json) in data_sets {
            let data = ListData::from_json(json);
            assert!(data.is_ok(), "Data '{}' should parse: {:?}", name, data.err());
            assert!(!data.unwrap().details.is_empty());
        }
    }
}
