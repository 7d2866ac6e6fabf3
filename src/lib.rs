//! # Prefix Index
//!
//! Composite-key lookups over a flat, sorted, fixed-stride array of records,
//! without building any auxiliary index structure.
//!
//! ## Core idea
//! A buffer of `rows * N` scalars, sorted lexicographically by all N columns,
//! is already an index. A query on the first M columns narrows the search
//! window one column at a time: find any row matching column `i`, and if the
//! rest of the key disagrees with that row, bound the run of rows that share
//! column `i` on the correct side before moving on to column `i + 1`.
//! Every lookup is O(M · log rows) comparisons, even on duplicate-heavy data.
//!
//! ```
//! use prefix_index::{CompositeKeyIndex, Layout};
//!
//! let data = [1, 3, 2, 6, 4, 3, 6, 4, 4, 9, 1, 0];
//! let index = CompositeKeyIndex::new(&data, Layout::full(3)).unwrap();
//! assert_eq!(index.find(&[6, 4, 4]), Some(&[6, 4, 4][..]));
//! assert_eq!(index.find(&[6, 4, 5]), None);
//! ```

pub mod error;
pub mod flat;
pub mod index;
pub mod layout;
pub mod table;

// Public re-exports for the top-level API
pub use error::{Error, Result};
pub use flat::FlatIndex;
pub use index::CompositeKeyIndex;
pub use layout::Layout;
pub use table::Table;
