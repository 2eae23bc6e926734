//! CSV writing implementation.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::{FilterError, FilterResult};
use crate::types::DataSet;

/// Write a [`DataSet`] to a CSV file, creating or truncating it.
///
/// The header is the schema's field names in order, followed by one record per row. No index
/// column is added. Fields are quoted only when they contain the delimiter, a quote, or a line
/// break; embedded quotes are doubled.
pub fn write_csv_to_path(dataset: &DataSet, path: impl AsRef<Path>) -> FilterResult<()> {
    let path = path.as_ref();
    let wrap = |source: csv::Error| FilterError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(|e| wrap(e.into()))?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);
    write_csv_to_writer(dataset, &mut wtr).map_err(wrap)
}

/// Write a [`DataSet`] through an existing CSV writer and flush it.
pub fn write_csv_to_writer<W: Write>(
    dataset: &DataSet,
    wtr: &mut csv::Writer<W>,
) -> csv::Result<()> {
    wtr.write_record(dataset.schema.field_names())?;

    let mut cells: Vec<String> = Vec::with_capacity(dataset.schema.fields.len());
    for row in &dataset.rows {
        cells.clear();
        cells.extend(row.iter().map(|v| v.to_string()));
        wtr.write_record(&cells)?;
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::write_csv_to_writer;
    use crate::types::{DataSet, DataType, Field, Schema, Value};

    fn render(ds: &DataSet) -> String {
        let mut wtr = csv::WriterBuilder::new().from_writer(Vec::new());
        write_csv_to_writer(ds, &mut wtr).unwrap();
        String::from_utf8(wtr.into_inner().unwrap()).unwrap()
    }

    #[test]
    fn quotes_only_when_needed() {
        let schema = Schema::new(vec![
            Field::new("id", DataType::Number),
            Field::new("note", DataType::Utf8),
        ]);
        let ds = DataSet::new(
            schema,
            vec![
                vec![Value::Int64(1), Value::Utf8("plain".to_string())],
                vec![Value::Int64(2), Value::Utf8("a, b".to_string())],
                vec![Value::Int64(3), Value::Utf8("say \"hi\"".to_string())],
                vec![Value::Int64(4), Value::Utf8("two\nlines".to_string())],
                vec![Value::Null, Value::Null],
            ],
        );

        assert_eq!(
            render(&ds),
            "id,note\n1,plain\n2,\"a, b\"\n3,\"say \"\"hi\"\"\"\n4,\"two\nlines\"\n,\n"
        );
    }

    #[test]
    fn empty_dataset_writes_header_only() {
        let schema = Schema::new(vec![
            Field::new("id", DataType::Number),
            Field::new("yearLevelID", DataType::Number),
        ]);
        let ds = DataSet::new(schema, Vec::new());
        assert_eq!(render(&ds), "id,yearLevelID\n");
    }
}
