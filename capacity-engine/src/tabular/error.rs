//! Parser error type.

/// Error for structurally malformed delimited input.
///
/// Ragged rows, blank lines, missing fields and the like are tolerated by
/// the parser, not errors; this only fires when the underlying reader
/// cannot make sense of the bytes at all.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The reader or writer hit a structural problem (e.g. invalid UTF-8).
    #[error("malformed tabular input: {0}")]
    Malformed(#[from] csv::Error),
}
