//! Tabular parser for the delimited-text datasets.
//!
//! Turns raw CSV text (header line + data lines) into an ordered sequence
//! of row records. Irregular input is tolerated wherever possible: short
//! rows are null-filled, extra fields are ignored, and rows with at most
//! one populated field are discarded as effectively empty. Only
//! structurally malformed input (e.g. invalid UTF-8) is an error.

mod error;
mod table;

pub use error::ParseError;
pub use table::{Header, Row, RowReader, Table, parse, to_csv_string};
