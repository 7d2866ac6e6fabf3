use std::slice::ChunksExact;

use crate::error::{Error, Result};
use crate::layout::Layout;

/// A borrowed, row-major view over a flat buffer of fixed-width records.
///
/// ```text
///            col 0   col 1   col 2
/// row 0  ┌───────┬───────┬───────┐  data[0..3]
///        │   1   │   3   │   2   │
/// row 1  ├───────┼───────┼───────┤  data[3..6]
///        │   2   │   4   │   3   │
/// row 2  ├───────┼───────┼───────┤  data[6..9]
///        │   4   │   5   │   4   │
///        └───────┴───────┴───────┘
/// ```
///
/// The view owns nothing: the buffer must outlive it, and the borrow checker
/// keeps the buffer immutable for as long as any view (or index) over it lives.
#[derive(Debug)]
pub struct Table<'a, T> {
    data: &'a [T],
    layout: Layout,
    rows: usize,
}

// Derived impls would demand `T: Clone`; the view only copies a reference.
impl<T> Clone for Table<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Table<'_, T> {}

impl<'a, T> Table<'a, T> {
    /// Wrap `data` as records of `layout.width()` columns. No copy is made.
    pub fn new(data: &'a [T], layout: Layout) -> Result<Self> {
        let rows = layout.rows_for(data.len())?;
        Ok(Self { data, layout, rows })
    }

    /// Number of records.
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// The underlying buffer.
    pub fn as_slice(&self) -> &'a [T] {
        self.data
    }

    /// Record at `row`, or `None` past the end.
    pub fn row(&self, row: usize) -> Option<&'a [T]> {
        if row < self.rows {
            Some(self.record(row))
        } else {
            None
        }
    }

    /// Key columns (the first `key_len`) of the record at `row`.
    ///
    /// # Panics
    /// Panics if `row >= self.rows()`.
    pub fn key_of(&self, row: usize) -> &'a [T] {
        &self.record(row)[..self.layout.key_len()]
    }

    /// Single scalar at (`row`, `column`).
    ///
    /// # Panics
    /// Panics if either coordinate is out of bounds.
    pub fn value(&self, row: usize, column: usize) -> &'a T {
        assert!(column < self.layout.width(), "column {column} out of bounds");
        &self.data[row * self.layout.width() + column]
    }

    /// Iterate over records in buffer order.
    pub fn iter(&self) -> ChunksExact<'a, T> {
        self.data.chunks_exact(self.layout.width())
    }

    /// Full record at `row`; the caller guarantees `row < rows`.
    pub(crate) fn record(&self, row: usize) -> &'a [T] {
        let start = row * self.layout.width();
        &self.data[start..start + self.layout.width()]
    }
}

impl<T: Ord> Table<'_, T> {
    /// Whether records are in non-decreasing lexicographic order over all columns.
    pub fn is_sorted(&self) -> bool {
        self.first_unsorted_row().is_none()
    }

    /// Like [`Table::is_sorted`], but names the first row that breaks the order.
    pub fn check_sorted(&self) -> Result<()> {
        match self.first_unsorted_row() {
            Some(row) => Err(Error::Unsorted { row }),
            None => Ok(()),
        }
    }

    fn first_unsorted_row(&self) -> Option<usize> {
        self.iter()
            .zip(self.iter().skip(1))
            .position(|(prev, next)| prev > next)
            .map(|pos| pos + 1)
    }
}
