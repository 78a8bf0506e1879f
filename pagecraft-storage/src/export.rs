//! CSV export of captured leads.

use crate::{StorageError, StorageResult};
use pagecraft_model::Lead;
use std::collections::BTreeSet;

const FIXED_COLUMNS: [&str; 4] = ["id", "page_id", "status", "submitted_at"];

/// Submitted field columns carry this prefix so they cannot collide with
/// the fixed columns.
const FIELD_PREFIX: &str = "field:";

pub(crate) fn leads_to_csv(leads: &[Lead]) -> StorageResult<String> {
    let field_names: BTreeSet<&str> = leads
        .iter()
        .flat_map(|l| l.fields.keys().map(String::as_str))
        .collect();

    let mut writer = csv::Writer::from_writer(Vec::new());
    let header: Vec<String> = FIXED_COLUMNS
        .iter()
        .map(|c| c.to_string())
        .chain(field_names.iter().map(|name| format!("{FIELD_PREFIX}{}", cell(name))))
        .collect();
    writer.write_record(&header).map_err(export_err)?;

    for lead in leads {
        let mut row = vec![
            lead.id.to_string(),
            lead.page_id.to_string(),
            lead.status.to_string(),
            lead.submitted_at.to_rfc3339(),
        ];
        row.extend(field_names.iter().map(|name| {
            lead.fields
                .get(*name)
                .map(String::as_str)
                .map(cell)
                .unwrap_or_default()
        }));
        writer.write_record(&row).map_err(export_err)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| StorageError::Export(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| StorageError::Export(e.to_string()))
}

/// Neutralises text a spreadsheet would evaluate as a formula.
fn cell(value: &str) -> String {
    if value.starts_with(['=', '+', '-', '@', '\t', '\r']) {
        format!("'{value}")
    } else {
        value.to_string()
    }
}

fn export_err(e: csv::Error) -> StorageError {
    StorageError::Export(e.to_string())
}
