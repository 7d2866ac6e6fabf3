//! Single-column binary searches over an inclusive row window `[lo, hi]`.
//!
//! Every helper only reads column `column` of rows inside the window, and
//! assumes that column is sorted there. That holds for column 0 over the whole
//! table, and for column `i` over any window whose rows agree on columns
//! `0..i`, which is exactly what the narrowing in `CompositeKeyIndex` maintains.

use std::cmp::Ordering;

use crate::table::Table;

/// Which end of a run of equal values a boundary search reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    /// Leftmost row holding the target.
    First,
    /// Rightmost row holding the target.
    Last,
}

/// Find any row in `[lo, hi]` whose `column` equals `target`.
///
/// Stops at the first hit, so within a run of equal values the row returned
/// depends only on the window, not on its position in the run.
pub fn probe<T: Ord>(
    table: &Table<'_, T>,
    column: usize,
    mut lo: usize,
    mut hi: usize,
    target: &T,
) -> Option<usize> {
    while lo <= hi {
        let mid = lo + (hi - lo) / 2;
        match table.value(mid, column).cmp(target) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => lo = mid + 1,
            Ordering::Greater => hi = mid.checked_sub(1)?,
        }
    }
    None
}

/// Find the leftmost or rightmost row in `[lo, hi]` whose `column` equals `target`.
///
/// On a hit the search keeps halving toward the requested end, remembering
/// the best row seen so far.
pub fn boundary<T: Ord>(
    table: &Table<'_, T>,
    boundary: Boundary,
    column: usize,
    mut lo: usize,
    mut hi: usize,
    target: &T,
) -> Option<usize> {
    let mut found = None;
    while lo <= hi {
        let mid = lo + (hi - lo) / 2;
        match table.value(mid, column).cmp(target) {
            Ordering::Less => lo = mid + 1,
            Ordering::Greater => match mid.checked_sub(1) {
                Some(below) => hi = below,
                None => break,
            },
            Ordering::Equal => {
                found = Some(mid);
                match boundary {
                    Boundary::First => match mid.checked_sub(1) {
                        Some(below) => hi = below,
                        None => break,
                    },
                    Boundary::Last => lo = mid + 1,
                }
            }
        }
    }
    found
}

/// Compare `key[from..]` against the same columns of `record`.
///
/// `Less` means the key sorts before the record on the first column that differs.
pub fn compare_suffix<T: Ord>(key: &[T], record: &[T], from: usize) -> Ordering {
    key[from..].cmp(&record[from..key.len()])
}
