//! CSV loading implementation.

use std::fs::File;
use std::path::Path;

use crate::error::{FilterError, FilterResult};
use crate::types::{DataSet, DataType, Field, Schema, Value};

/// Load a CSV file into an in-memory [`DataSet`].
///
/// Rules:
///
/// - CSV must have headers.
/// - Headers must contain all `declared` fields (order can differ).
/// - Declared columns are parsed according to their field type; every other column is kept
///   verbatim as [`Value::Utf8`].
/// - The resulting schema lists every header, in file order.
pub fn load_csv_from_path(path: impl AsRef<Path>, declared: &Schema) -> FilterResult<DataSet> {
    let file = File::open(path)?;
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).from_reader(file);
    load_csv_from_reader(&mut rdr, declared)
}

/// Load CSV data from an existing CSV reader.
pub fn load_csv_from_reader<R: std::io::Read>(
    rdr: &mut csv::Reader<R>,
    declared: &Schema,
) -> FilterResult<DataSet> {
    let headers = rdr.headers()?.clone();
    let schema = resolve_schema(&headers, declared)?;

    let mut rows: Vec<Vec<Value>> = Vec::new();
    for (row_idx0, result) in rdr.records().enumerate() {
        // Report 1-based row number for users; +1 again because header is row 1.
        let user_row = row_idx0 + 2;
        let record = result?;

        let mut row: Vec<Value> = Vec::with_capacity(schema.fields.len());
        for (field, raw) in schema.fields.iter().zip(record.iter()) {
            row.push(parse_typed_value(user_row, &field.name, field.data_type, raw)?);
        }
        rows.push(row);
    }

    Ok(DataSet::new(schema, rows))
}

/// Build the full dataset schema from the header row, typing the declared columns.
fn resolve_schema(headers: &csv::StringRecord, declared: &Schema) -> FilterResult<Schema> {
    let mut fields: Vec<Field> = headers
        .iter()
        .map(|h| Field::new(h, DataType::Utf8))
        .collect();

    for decl in &declared.fields {
        match fields.iter_mut().find(|f| f.name == decl.name) {
            Some(field) => field.data_type = decl.data_type,
            None => {
                return Err(FilterError::MissingColumn {
                    column: decl.name.clone(),
                    headers: headers.iter().map(str::to_owned).collect(),
                });
            }
        }
    }

    Ok(Schema::new(fields))
}

fn parse_typed_value(
    row: usize,
    column: &str,
    data_type: DataType,
    raw: &str,
) -> FilterResult<Value> {
    match data_type {
        // Pass-through text is not trimmed so it is written back unchanged.
        DataType::Utf8 if raw.is_empty() => Ok(Value::Null),
        DataType::Utf8 => Ok(Value::Utf8(raw.to_owned())),
        DataType::Number => parse_number(raw).map_err(|message| FilterError::ParseError {
            row,
            column: column.to_owned(),
            raw: raw.to_owned(),
            message,
        }),
    }
}

/// Integers stay exact; any other float text (`4.0`, `3.5`, `1e3`, `NaN`) becomes a float.
fn parse_number(raw: &str) -> Result<Value, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(Value::Null);
    }
    if let Ok(v) = trimmed.parse::<i64>() {
        return Ok(Value::Int64(v));
    }
    trimmed
        .parse::<f64>()
        .map(Value::Float64)
        .map_err(|_| "expected a number".to_string())
}
