//! Decoder for the gviz tabular-query response envelope.
//!
//! The endpoint returns its JSON payload wrapped in a JS function call:
//! `/*O_o*/\ngoogle.visualization.Query.setResponse(<json>);`. The payload
//! starts at a fixed offset and the trailing fragment has a fixed length;
//! both are a contract of this specific API. This module is the only code
//! aware of the quirk — everything else sees plain [`Record`] sequences.

use serde::Deserialize;
use serde_json::Value;

use crate::content::ContentError;
use crate::types::Record;

pub(crate) const ENVELOPE_PREFIX_LEN: usize = 47;
pub(crate) const ENVELOPE_SUFFIX_LEN: usize = 2;

#[derive(Debug, Deserialize)]
struct GvizResponse {
    table: GvizTable,
}

#[derive(Debug, Deserialize)]
struct GvizTable {
    #[serde(default)]
    cols: Vec<GvizColumn>,
    #[serde(default)]
    rows: Vec<GvizRow>,
}

#[derive(Debug, Deserialize)]
struct GvizColumn {
    #[serde(default)]
    label: String,
}

#[derive(Debug, Deserialize)]
struct GvizRow {
    #[serde(default)]
    c: Vec<Option<GvizCell>>,
}

#[derive(Debug, Deserialize)]
struct GvizCell {
    #[serde(default)]
    v: Option<Value>,
}

/// Decode a raw gviz response body into one [`Record`] per row.
///
/// Column-to-cell correspondence is positional: the cell at index `i` maps to
/// the label of column `i`. A `null` cell, an absent `v`, or a row shorter
/// than the column count all yield `""` for the affected labels. Row order is
/// preserved exactly; no sorting, filtering, or deduplication happens here.
pub fn decode_table(body: &str) -> Result<Vec<Record>, ContentError> {
    let payload = strip_envelope(body)?;
    let response: GvizResponse = serde_json::from_str(payload)?;

    let labels: Vec<String> = response
        .table
        .cols
        .into_iter()
        .map(|col| col.label)
        .collect();

    let records = response
        .table
        .rows
        .into_iter()
        .map(|row| {
            labels
                .iter()
                .enumerate()
                .map(|(i, label)| {
                    let value = row
                        .c
                        .get(i)
                        .and_then(Option::as_ref)
                        .and_then(|cell| cell.v.as_ref())
                        .map(cell_text)
                        .unwrap_or_default();
                    (label.clone(), value)
                })
                .collect()
        })
        .collect();

    Ok(records)
}

fn strip_envelope(body: &str) -> Result<&str, ContentError> {
    body.len()
        .checked_sub(ENVELOPE_SUFFIX_LEN)
        .filter(|end| *end >= ENVELOPE_PREFIX_LEN)
        .and_then(|end| body.get(ENVELOPE_PREFIX_LEN..end))
        .ok_or(ContentError::Envelope { len: body.len() })
}

/// Cells are usually strings, but numeric and boolean columns arrive as JSON
/// numbers and booleans. Consumers expect string values throughout, so those
/// are rendered back to their source text.
fn cell_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
