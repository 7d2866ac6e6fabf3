use thiserror::Error;

/// Errors raised while building an index over a record buffer.
///
/// A lookup that matches nothing is not an error; it returns `None`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Key width outside `[1, width]`, or a zero record width.
    #[error("invalid layout: key_len {key_len} must be in 1..={width} (width > 0)")]
    InvalidLayout { width: usize, key_len: usize },
    /// Buffer length is not a whole number of records.
    #[error("buffer of {len} values is not a multiple of record width {width}")]
    Misaligned { len: usize, width: usize },
    /// Row `row` sorts before row `row - 1`.
    #[error("buffer is not sorted: row {row} is less than row {}", .row.saturating_sub(1))]
    Unsorted { row: usize },
}

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
