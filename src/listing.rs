//! Headless mode: one load, filters from the command line, one table.

use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, ContentArrangement, Table};

use crate::directory::{FilterField, Record};
use crate::source::RecordSource;
use crate::store::Store;

/// Load every record from `source` and return those matching `filters`.
///
/// Filters are applied before the load starts; the successful load then
/// derives the visible records from them. On failure returns the message the
/// TUI would have displayed.
pub async fn list_records<S: RecordSource>(
    source: &S,
    filters: &[(FilterField, String)],
) -> Result<Vec<Record>, String> {
    let mut store = Store::new();
    for (field, value) in filters {
        store.set_filter(*field, value.clone());
    }

    store.load_records(source).await;

    let state = store.state();
    match &state.error_message {
        Some(message) => Err(message.clone()),
        None => Ok(state.visible_records.clone()),
    }
}

/// Render records as a table with one column per filterable field.
pub fn render_table(records: &[Record]) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(
            FilterField::ALL
                .into_iter()
                .map(|field| Cell::new(field.label()).add_attribute(Attribute::Bold)),
        );

    for record in records {
        table.add_row(
            FilterField::ALL
                .into_iter()
                .map(|field| Cell::new(record.field(field).unwrap_or(""))),
        );
    }

    table.to_string()
}
