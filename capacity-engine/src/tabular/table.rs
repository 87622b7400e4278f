//! Header, row and table types plus the reader itself.

use std::collections::HashMap;
use std::sync::Arc;

use csv::StringRecord;

use super::ParseError;

/// Column names from the header line.
///
/// File order is preserved. When the header repeats a name, lookups
/// resolve to the rightmost occurrence (last write wins), matching how a
/// string-keyed record would behave.
#[derive(Debug, Clone)]
pub struct Header {
    /// Every header cell in file order, duplicates included.
    raw: Vec<String>,
    /// Distinct names in first-appearance order.
    columns: Vec<String>,
    /// Name to raw position; duplicates collapse to the last position.
    index: HashMap<String, usize>,
}

impl Header {
    fn from_record(record: &StringRecord) -> Self {
        let raw: Vec<String> = record.iter().map(|s| s.to_string()).collect();
        let mut columns = Vec::new();
        let mut index = HashMap::new();
        for (pos, name) in raw.iter().enumerate() {
            if index.insert(name.clone(), pos).is_none() {
                columns.push(name.clone());
            }
        }
        Header {
            raw,
            columns,
            index,
        }
    }

    /// Distinct column names in first-appearance order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of cells in the header line (duplicates included).
    fn width(&self) -> usize {
        self.raw.len()
    }

    fn position(&self, column: &str) -> Option<usize> {
        self.index.get(column).copied()
    }
}

/// One data row: a mapping from column name to raw string field.
#[derive(Debug, Clone)]
pub struct Row {
    header: Arc<Header>,
    /// Aligned to the header width. `None` where a short row was
    /// null-filled; fields beyond the header width were dropped.
    fields: Vec<Option<String>>,
}

impl Row {
    fn from_record(header: &Arc<Header>, record: &StringRecord) -> Self {
        let fields = (0..header.width())
            .map(|i| record.get(i).map(|s| s.to_string()))
            .collect();
        Row {
            header: Arc::clone(header),
            fields,
        }
    }

    /// Raw field value for a column. `None` for unknown columns and
    /// null-filled cells; empty strings are returned as-is.
    pub fn get(&self, column: &str) -> Option<&str> {
        let pos = self.header.position(column)?;
        self.fields[pos].as_deref()
    }

    /// Trimmed, non-empty field value for a column.
    pub fn text(&self, column: &str) -> Option<&str> {
        let value = self.get(column)?.trim();
        if value.is_empty() { None } else { Some(value) }
    }

    /// Best-effort numeric read of a column. `None` when the field is
    /// absent, blank, or not a number.
    pub fn number(&self, column: &str) -> Option<f64> {
        self.text(column)?.parse().ok()
    }

    /// How many fields hold a non-blank value.
    pub fn populated_fields(&self) -> usize {
        self.fields
            .iter()
            .filter(|f| f.as_deref().is_some_and(|v| !v.trim().is_empty()))
            .count()
    }
}

/// A fully-read table: the header plus every surviving data row, in file
/// order.
#[derive(Debug, Clone)]
pub struct Table {
    header: Arc<Header>,
    rows: Vec<Row>,
}

impl Table {
    /// A table with no columns and no rows.
    pub fn empty() -> Self {
        Table {
            header: Arc::new(Header::from_record(&StringRecord::new())),
            rows: Vec::new(),
        }
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Streaming row reader.
///
/// Yields rows lazily in file order, already null-filled and with
/// effectively-empty rows (at most one populated field) filtered out.
/// Restartable in the sense that a fresh reader can always be built from
/// the same text.
pub struct RowReader<'t> {
    header: Arc<Header>,
    records: csv::StringRecordsIntoIter<&'t [u8]>,
}

impl<'t> RowReader<'t> {
    pub fn new(text: &'t str) -> Result<Self, ParseError> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(text.as_bytes());
        let header = Arc::new(Header::from_record(reader.headers()?));
        Ok(RowReader {
            header,
            records: reader.into_records(),
        })
    }

    pub fn header(&self) -> &Header {
        &self.header
    }
}

impl Iterator for RowReader<'_> {
    type Item = Result<Row, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.records.next()? {
                Ok(record) => {
                    let row = Row::from_record(&self.header, &record);
                    if row.populated_fields() <= 1 {
                        continue;
                    }
                    return Some(Ok(row));
                }
                Err(err) => return Some(Err(err.into())),
            }
        }
    }
}

/// Parse a whole document into a [`Table`].
pub fn parse(text: &str) -> Result<Table, ParseError> {
    let mut reader = RowReader::new(text)?;
    let mut rows = Vec::new();
    for row in &mut reader {
        rows.push(row?);
    }
    Ok(Table {
        header: Arc::clone(&reader.header),
        rows,
    })
}

/// Serialize a table back to CSV text (header line + data rows).
///
/// Null-filled cells are written as empty fields. Field values survive a
/// parse/serialize/parse cycle exactly.
pub fn to_csv_string(table: &Table) -> Result<String, ParseError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(table.header().columns())?;
    for row in table.rows() {
        let record: Vec<&str> = table
            .header()
            .columns()
            .iter()
            .map(|column| row.get(column).unwrap_or(""))
            .collect();
        writer.write_record(&record)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|err| ParseError::from(csv::Error::from(err.into_error())))?;
    // The writer only ever saw &str input, so the output is valid UTF-8.
    Ok(String::from_utf8(bytes).unwrap())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_header_and_rows_in_order() {
        let table = parse("route,date,value\nDEL-FRA,2026-01-01,10\nDEL-FRA,2026-01-02,20\n")
            .unwrap();
        assert_eq!(table.header().columns(), ["route", "date", "value"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows()[0].get("value"), Some("10"));
        assert_eq!(table.rows()[1].get("date"), Some("2026-01-02"));
    }

    #[test]
    fn duplicate_header_is_last_write_wins() {
        let table = parse("route,value,value\nDEL-FRA,first,second\n").unwrap();
        // The name list collapses, the lookup resolves to the last cell
        assert_eq!(table.header().columns(), ["route", "value"]);
        assert_eq!(table.rows()[0].get("value"), Some("second"));
    }

    #[test]
    fn short_rows_are_null_filled() {
        let table = parse("route,date,value\nDEL-FRA,2026-01-01\n").unwrap();
        let row = &table.rows()[0];
        assert_eq!(row.get("date"), Some("2026-01-01"));
        assert_eq!(row.get("value"), None);
    }

    #[test]
    fn extra_fields_are_ignored() {
        let table = parse("route,date\nDEL-FRA,2026-01-01,stray,fields\n").unwrap();
        let row = &table.rows()[0];
        assert_eq!(row.get("route"), Some("DEL-FRA"));
        assert_eq!(row.get("date"), Some("2026-01-01"));
        assert_eq!(row.populated_fields(), 2);
    }

    #[test]
    fn effectively_empty_rows_are_discarded() {
        let text = "route,date,value\n,,\nDEL-FRA,,\nDEL-FRA,2026-01-01,10\n";
        let table = parse(text).unwrap();
        // Zero populated fields and one populated field both drop
        assert_eq!(table.len(), 1);
        assert_eq!(table.rows()[0].get("value"), Some("10"));
    }

    #[test]
    fn unknown_column_is_absent() {
        let table = parse("route,date\nDEL-FRA,2026-01-01\n").unwrap();
        assert_eq!(table.rows()[0].get("nope"), None);
        assert_eq!(table.rows()[0].number("nope"), None);
    }

    #[test]
    fn numeric_reads_are_best_effort() {
        let table = parse("route,a,b,c\nDEL-FRA, 42.5 ,oops,\n").unwrap();
        let row = &table.rows()[0];
        assert_eq!(row.number("a"), Some(42.5));
        assert_eq!(row.number("b"), None);
        assert_eq!(row.number("c"), None);
    }

    #[test]
    fn empty_input_is_an_empty_table() {
        let table = parse("").unwrap();
        assert!(table.is_empty());
        assert!(table.header().columns().is_empty());
    }

    #[test]
    fn reader_is_restartable() {
        let text = "route,value\nDEL-FRA,1\nBOM-MEM,2\n";
        let first: Vec<_> = RowReader::new(text).unwrap().collect();
        let second: Vec<_> = RowReader::new(text).unwrap().collect();
        assert_eq!(first.len(), 2);
        assert_eq!(second.len(), 2);
    }

    #[test]
    fn quoted_fields_round_trip() {
        let text = "route,note\nDEL-FRA,\"has, comma\"\nBOM-MEM,\"has \"\"quote\"\"\"\n";
        let table = parse(text).unwrap();
        assert_eq!(table.rows()[0].get("note"), Some("has, comma"));
        assert_eq!(table.rows()[1].get("note"), Some("has \"quote\""));

        let reparsed = parse(&to_csv_string(&table).unwrap()).unwrap();
        assert_eq!(reparsed.rows()[0].get("note"), Some("has, comma"));
        assert_eq!(reparsed.rows()[1].get("note"), Some("has \"quote\""));
    }
}
