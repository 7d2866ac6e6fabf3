pub mod search;

use std::cmp::Ordering;

use tracing::{debug, warn};

use crate::error::Result;
use crate::layout::Layout;
use crate::table::Table;
use search::Boundary;

/// Prefix lookups over a sorted record buffer by nested per-column binary search.
///
/// The buffer must be sorted lexicographically over all N columns; duplicate
/// records are allowed. The index borrows it and stores nothing else, so it is
/// free to build, `Copy`, and safe to share across threads for reads.
///
/// Lookup narrows a window `[lo, hi]` one key column at a time:
///
/// ```text
/// key = (6, 4, 4)          col 0 probe hits row 5 = (6, 4, 3)
///                          suffix (4, 4) > (4, 3) → keep rows after 5
///   row 4  (6, 4, 2)       that still hold 6 in col 0:  lo = 6, hi = 8
///   row 5  (6, 4, 3)  ◄─
///   row 6  (6, 4, 4)       col 1 probe over [6, 8] hits row 7 = (6, 4, 6)
///   row 7  (6, 4, 6)       suffix (4) < (6) → keep rows before 7
///   row 8  (6, 4, 7)       that still hold 4 in col 1:  lo = 6, hi = 6
///   row 9  (8, 1, 2)
///                          col 2 probe over [6, 6] hits row 6 → match
/// ```
///
/// Each step is one binary search plus at most one boundary search, so a
/// lookup costs O(M · log rows) comparisons however long the runs of
/// duplicates are.
#[derive(Debug)]
pub struct CompositeKeyIndex<'a, T> {
    table: Table<'a, T>,
}

impl<T> Clone for CompositeKeyIndex<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for CompositeKeyIndex<'_, T> {}

impl<'a, T: Ord> CompositeKeyIndex<'a, T> {
    /// Build an index over `data`, read as records of `layout.width()` columns.
    ///
    /// Fails if `data.len()` is not a multiple of the record width. The sort
    /// order is the caller's contract and is not checked; see
    /// [`CompositeKeyIndex::new_checked`].
    pub fn new(data: &'a [T], layout: Layout) -> Result<Self> {
        let table = Table::new(data, layout)?;
        debug!(
            rows = table.rows(),
            width = layout.width(),
            key_len = layout.key_len(),
            "composite key index built"
        );
        Ok(Self { table })
    }

    /// Shorthand for `new(data, Layout::new(width, key_len)?)`.
    pub fn with_key_len(data: &'a [T], width: usize, key_len: usize) -> Result<Self> {
        Self::new(data, Layout::new(width, key_len)?)
    }

    /// Like [`CompositeKeyIndex::new`], but first verifies the buffer is sorted.
    ///
    /// Costs a full O(rows) scan; meant for untrusted input and debugging.
    pub fn new_checked(data: &'a [T], layout: Layout) -> Result<Self> {
        let table = Table::new(data, layout)?;
        if let Err(e) = table.check_sorted() {
            warn!(error = %e, "rejecting unsorted buffer");
            return Err(e);
        }
        Self::new(data, layout)
    }

    /// Find a record whose first `key_len` columns equal `key`.
    ///
    /// When several records share the key (possible when `key_len < width`,
    /// or with duplicate records), which one is returned is unspecified: it is
    /// always a valid match, and repeated calls on the same buffer return the
    /// same row, but not necessarily the first or last of the run.
    ///
    /// The returned slice borrows the buffer, not the index.
    ///
    /// # Panics
    /// Panics if `key.len() != layout.key_len()`.
    pub fn find(&self, key: &[T]) -> Option<&'a [T]> {
        self.find_row(key).map(|row| self.table.record(row))
    }

    /// Row number of the record [`CompositeKeyIndex::find`] would return.
    ///
    /// # Panics
    /// Panics if `key.len() != layout.key_len()`.
    pub fn find_row(&self, key: &[T]) -> Option<usize> {
        let key_len = self.table.layout().key_len();
        assert_eq!(key.len(), key_len, "key must have exactly key_len columns");

        let mut lo = 0;
        let mut hi = self.table.rows().checked_sub(1)?;

        for column in 0..key_len {
            let row = search::probe(&self.table, column, lo, hi, &key[column])?;
            if column + 1 == key_len {
                return Some(row);
            }

            match search::compare_suffix(key, self.table.record(row), column + 1) {
                Ordering::Equal => return Some(row),
                Ordering::Less => {
                    hi = row.checked_sub(1)?;
                    lo = search::boundary(
                        &self.table,
                        Boundary::First,
                        column,
                        lo,
                        hi,
                        &key[column],
                    )?;
                }
                Ordering::Greater => {
                    lo = row + 1;
                    hi = search::boundary(
                        &self.table,
                        Boundary::Last,
                        column,
                        lo,
                        hi,
                        &key[column],
                    )?;
                }
            }
        }

        None
    }

    /// Whether any record starts with `key`.
    ///
    /// # Panics
    /// Panics if `key.len() != layout.key_len()`.
    pub fn contains(&self, key: &[T]) -> bool {
        self.find_row(key).is_some()
    }
}

impl<'a, T> CompositeKeyIndex<'a, T> {
    /// Number of records in the buffer.
    pub fn rows(&self) -> usize {
        self.table.rows()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn layout(&self) -> Layout {
        self.table.layout()
    }

    /// The record view the index searches.
    pub fn table(&self) -> Table<'a, T> {
        self.table
    }
}
