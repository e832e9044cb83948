//! Dimension bounds accepted by the builder.

use serde::{Deserialize, Serialize};

use crate::IntegralError;

/// Smallest accepted number of source rows.
pub const MIN_ROWS: usize = 5;
/// Smallest accepted number of source columns.
pub const MIN_COLUMNS: usize = 5;
/// Largest accepted number of source rows.
pub const MAX_ROWS: usize = 256;
/// Largest accepted number of source columns.
pub const MAX_COLUMNS: usize = 256;

/// Inclusive bounds on the source grid dimensions.
///
/// Every field defaults to the matching crate constant, so a JSON config may
/// override only the bounds it cares about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SizeLimits {
    pub min_rows: usize,
    pub min_columns: usize,
    pub max_rows: usize,
    pub max_columns: usize,
}

impl Default for SizeLimits {
    fn default() -> Self {
        Self {
            min_rows: MIN_ROWS,
            min_columns: MIN_COLUMNS,
            max_rows: MAX_ROWS,
            max_columns: MAX_COLUMNS,
        }
    }
}

impl SizeLimits {
    /// Check `rows x columns` against the bounds.
    ///
    /// Both lower bounds are tested before either upper bound, so a grid that
    /// is too short in one dimension and too wide in the other reports
    /// [`IntegralError::TooSmall`]. Zero dimensions are always too small.
    pub fn check(&self, rows: usize, columns: usize) -> Result<(), IntegralError> {
        let min_rows = self.min_rows.max(1);
        let min_columns = self.min_columns.max(1);
        if rows < min_rows || columns < min_columns {
            return Err(IntegralError::TooSmall {
                rows,
                columns,
                min_rows,
                min_columns,
            });
        }
        if rows > self.max_rows || columns > self.max_columns {
            return Err(IntegralError::TooLarge {
                rows,
                columns,
                max_rows: self.max_rows,
                max_columns: self.max_columns,
            });
        }
        Ok(())
    }

    #[inline]
    pub fn contains(&self, rows: usize, columns: usize) -> bool {
        self.check(rows, columns).is_ok()
    }
}
