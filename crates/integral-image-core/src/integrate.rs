//! Summed-area table construction.

use crate::image::table_len;
use crate::{IntegralImage, SizeLimits};

/// Errors reported by [`IntegralImageBuilder`].
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegralError {
    #[error("image too small ({rows}x{columns}, minimum is {min_rows}x{min_columns})")]
    TooSmall {
        rows: usize,
        columns: usize,
        min_rows: usize,
        min_columns: usize,
    },

    #[error("image too large ({rows}x{columns}, maximum is {max_rows}x{max_columns})")]
    TooLarge {
        rows: usize,
        columns: usize,
        max_rows: usize,
        max_columns: usize,
    },

    #[error("invalid source buffer length (expected {expected} pixels, got {got})")]
    InvalidSourceBuffer { expected: usize, got: usize },

    #[error("invalid destination buffer length (expected {expected} cells, got {got})")]
    InvalidDestinationBuffer { expected: usize, got: usize },
}

/// Builds integral images for grids within a [`SizeLimits`] policy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IntegralImageBuilder {
    limits: SizeLimits,
}

impl IntegralImageBuilder {
    /// Builder using the default 5..=256 bounds.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(limits: SizeLimits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> &SizeLimits {
        &self.limits
    }

    /// Validate and build an owned integral image.
    ///
    /// Nothing is allocated when validation fails.
    pub fn build(
        &self,
        rows: usize,
        columns: usize,
        source: &[u32],
    ) -> Result<IntegralImage, IntegralError> {
        let len = self.validate(rows, columns, source)?;
        let mut data = vec![0u32; len];
        fill(rows, columns, source, &mut data);
        Ok(IntegralImage {
            rows,
            columns,
            data,
        })
    }

    /// Validate and fill a caller-owned `(rows + 1) * (columns + 1)` buffer.
    ///
    /// `destination` is left untouched when an error is returned. On success
    /// every cell has been written, so the buffer need not be zeroed first.
    pub fn build_into(
        &self,
        rows: usize,
        columns: usize,
        source: &[u32],
        destination: &mut [u32],
    ) -> Result<(), IntegralError> {
        let expected = self.validate(rows, columns, source)?;
        if destination.len() != expected {
            return Err(IntegralError::InvalidDestinationBuffer {
                expected,
                got: destination.len(),
            });
        }
        fill(rows, columns, source, destination);
        Ok(())
    }

    /// Check dimensions and the source length, returning the table length.
    ///
    /// Sizes that do not fit in `usize` are reported as `usize::MAX`, which no
    /// `u32` slice can match.
    fn validate(
        &self,
        rows: usize,
        columns: usize,
        source: &[u32],
    ) -> Result<usize, IntegralError> {
        self.limits.check(rows, columns)?;
        let expected = rows.saturating_mul(columns);
        if source.len() != expected {
            return Err(IntegralError::InvalidSourceBuffer {
                expected,
                got: source.len(),
            });
        }
        // Both dimensions are >= 1 here, so the table is at most four times
        // the source length; the checked form still guards odd limits.
        table_len(rows, columns).ok_or(IntegralError::InvalidDestinationBuffer {
            expected: usize::MAX,
            got: 0,
        })
    }
}

/// [`IntegralImageBuilder::build`] with the default bounds.
pub fn integral_image(
    rows: usize,
    columns: usize,
    source: &[u32],
) -> Result<IntegralImage, IntegralError> {
    IntegralImageBuilder::new().build(rows, columns, source)
}

/// [`IntegralImageBuilder::build_into`] with the default bounds.
pub fn integrate_into(
    rows: usize,
    columns: usize,
    source: &[u32],
    destination: &mut [u32],
) -> Result<(), IntegralError> {
    IntegralImageBuilder::new().build_into(rows, columns, source, destination)
}

/// Fill `dst` from `src`. Both lengths have been validated by the caller.
///
/// Arithmetic wraps on `u32` overflow.
fn fill(rows: usize, columns: usize, src: &[u32], dst: &mut [u32]) {
    let stride = columns + 1;

    for r in 0..=rows {
        dst[r * stride] = 0;
    }
    dst[1..stride].fill(0);

    for r in 1..=rows {
        let (done, rest) = dst.split_at_mut(r * stride);
        let above = &done[(r - 1) * stride..];
        let current = &mut rest[..stride];
        let src_row = &src[(r - 1) * columns..r * columns];

        for c in 1..=columns {
            current[c] = above[c]
                .wrapping_add(current[c - 1])
                .wrapping_sub(above[c - 1])
                .wrapping_add(src_row[c - 1]);
        }
    }
}
