//! Mapping between source records and display items.
//!
//! All three directions are permissive: a missing field never fails the
//! mapping. Anomalies are appended to the caller's diagnostics list instead.

use crate::error::Diagnostic;

use super::item::DisplayItem;
use super::record::SourceRecord;

/// The two record fields a dropdown reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldNames<'a> {
    pub text_field: &'a str,
    pub value_field: &'a str,
}

impl<'a> FieldNames<'a> {
    pub fn new(text_field: &'a str, value_field: &'a str) -> Self {
        Self {
            text_field,
            value_field,
        }
    }
}

/// Raw label/value read from one record.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldPair {
    pub label: Option<String>,
    pub value: Option<i64>,
}

/// Read the label and value fields of a record.
pub fn read_pair<R: SourceRecord + ?Sized>(record: &R, fields: FieldNames<'_>) -> FieldPair {
    FieldPair {
        label: record.text(fields.text_field),
        value: record.number(fields.value_field),
    }
}

/// Build a display item from a pair, falling back to `""` / `0` for missing
/// fields. `report` receives the name of each missing field.
fn item_from_pair(
    pair: FieldPair,
    fields: FieldNames<'_>,
    mut report: impl FnMut(&str),
) -> DisplayItem {
    let label = pair.label.unwrap_or_else(|| {
        report(fields.text_field);
        String::new()
    });
    let value = pair.value.unwrap_or_else(|| {
        report(fields.value_field);
        0
    });
    DisplayItem { label, value }
}

/// Map a collection to display items, one per record, in order.
pub fn map_source_to_items<R: SourceRecord>(
    records: &[R],
    fields: FieldNames<'_>,
    diagnostics: &mut Vec<Diagnostic>,
) -> Vec<DisplayItem> {
    records
        .iter()
        .enumerate()
        .map(|(position, record)| {
            item_from_pair(read_pair(record, fields), fields, |field| {
                diagnostics.push(Diagnostic::missing(field, position))
            })
        })
        .collect()
}

/// Map a bound model to the selected item. A model without fields maps to
/// the sentinel.
pub fn map_model_to_item<R: SourceRecord + ?Sized>(
    model: &R,
    fields: FieldNames<'_>,
    diagnostics: &mut Vec<Diagnostic>,
) -> DisplayItem {
    if model.is_empty() {
        return DisplayItem::sentinel();
    }
    item_from_pair(read_pair(model, fields), fields, |field| {
        diagnostics.push(Diagnostic::missing_on_model(field))
    })
}

/// Find the first record whose value field equals the item's value.
///
/// Linear in the collection size. Records without a readable value field
/// never match.
pub fn map_item_to_source<'r, R: SourceRecord>(
    item: &DisplayItem,
    records: &'r [R],
    fields: FieldNames<'_>,
    diagnostics: &mut Vec<Diagnostic>,
) -> Option<&'r R> {
    let found = records
        .iter()
        .find(|record| record.number(fields.value_field) == Some(item.value));
    if found.is_none() {
        diagnostics.push(Diagnostic::NoMatch { value: item.value });
    }
    found
}
