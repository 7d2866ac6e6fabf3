use std::cmp::Ordering;

use tracing::{debug, warn};

use crate::error::Result;
use crate::layout::Layout;
use crate::table::Table;

/// Prefix lookups by one binary search over whole keys.
///
/// Each probe compares all `key_len` leading columns of a record against the
/// query at once. With `key_len == width` this is the plain binary search over
/// full records; with a shorter key it still works, because rows sorted on all
/// columns are also sorted on any prefix of them.
///
/// Costs up to `key_len` scalar comparisons per probe, where
/// [`CompositeKeyIndex`](crate::CompositeKeyIndex) compares one column at a
/// time. Both answer the same membership question for every key.
#[derive(Debug)]
pub struct FlatIndex<'a, T> {
    table: Table<'a, T>,
}

impl<T> Clone for FlatIndex<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for FlatIndex<'_, T> {}

impl<'a, T: Ord> FlatIndex<'a, T> {
    /// Build an index over `data`, read as records of `layout.width()` columns.
    pub fn new(data: &'a [T], layout: Layout) -> Result<Self> {
        let table = Table::new(data, layout)?;
        debug!(
            rows = table.rows(),
            width = layout.width(),
            key_len = layout.key_len(),
            "flat index built"
        );
        Ok(Self { table })
    }

    /// Shorthand for `new(data, Layout::new(width, key_len)?)`.
    pub fn with_key_len(data: &'a [T], width: usize, key_len: usize) -> Result<Self> {
        Self::new(data, Layout::new(width, key_len)?)
    }

    /// Like [`FlatIndex::new`], but first verifies the buffer is sorted.
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
    /// Which record of a run sharing the key comes back is unspecified.
    ///
    /// # Panics
    /// Panics if `key.len() != layout.key_len()`.
    pub fn find(&self, key: &[T]) -> Option<&'a [T]> {
        self.find_row(key).map(|row| self.table.record(row))
    }

    /// Row number of the record [`FlatIndex::find`] would return.
    ///
    /// # Panics
    /// Panics if `key.len() != layout.key_len()`.
    pub fn find_row(&self, key: &[T]) -> Option<usize> {
        assert_eq!(
            key.len(),
            self.table.layout().key_len(),
            "key must have exactly key_len columns"
        );

        let mut lo = 0;
        let mut hi = self.table.rows().checked_sub(1)?;
        while lo <= hi {
            let mid = lo + (hi - lo) / 2;
            match self.table.key_of(mid).cmp(key) {
                Ordering::Equal => return Some(mid),
                Ordering::Less => lo = mid + 1,
                Ordering::Greater => hi = mid.checked_sub(1)?,
            }
        }
        None
    }

    /// Whether any record starts with `key`.
    pub fn contains(&self, key: &[T]) -> bool {
        self.find_row(key).is_some()
    }
}

impl<'a, T> FlatIndex<'a, T> {
    pub fn rows(&self) -> usize {
        self.table.rows()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn layout(&self) -> Layout {
        self.table.layout()
    }

    pub fn table(&self) -> Table<'a, T> {
        self.table
    }
}
