use crate::error::{Error, Result};

/// Geometry of the records an index searches.
///
/// - `width` (N): number of scalar columns in every record.
/// - `key_len` (M): number of leading columns a query key supplies.
///
/// Invariant: `1 <= key_len <= width`. Only `Layout::new` and
/// `Layout::full` construct one, so every `Layout` in circulation is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    width: usize,
    key_len: usize,
}

impl Layout {
    /// Create a layout of `width` columns keyed on the first `key_len`.
    pub fn new(width: usize, key_len: usize) -> Result<Self> {
        if width == 0 || key_len == 0 || key_len > width {
            return Err(Error::InvalidLayout { width, key_len });
        }
        Ok(Self { width, key_len })
    }

    /// A layout whose key covers the whole record (M == N).
    ///
    /// # Panics
    /// Panics if `width` is 0.
    pub fn full(width: usize) -> Self {
        assert!(width > 0, "record width must be > 0");
        Self {
            width,
            key_len: width,
        }
    }

    /// Number of columns per record.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of leading columns in a query key.
    pub fn key_len(&self) -> usize {
        self.key_len
    }

    /// Whether a key spans every column of the record.
    pub fn is_full_key(&self) -> bool {
        self.key_len == self.width
    }

    /// Number of whole records in a buffer of `len` scalars.
    ///
    /// A trailing partial record is rejected rather than truncated.
    pub fn rows_for(&self, len: usize) -> Result<usize> {
        if len % self.width != 0 {
            return Err(Error::Misaligned {
                len,
                width: self.width,
            });
        }
        Ok(len / self.width)
    }
}
