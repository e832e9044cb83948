/// Cell count of the table for a `rows x columns` source, `None` on overflow.
pub(crate) fn table_len(rows: usize, columns: usize) -> Option<usize> {
    rows.checked_add(1)?.checked_mul(columns.checked_add(1)?)
}

/// Borrowed integral table over a caller buffer.
///
/// `rows`/`columns` are the **source** dimensions; `data` holds
/// `(rows + 1) * (columns + 1)` cells in row-major order.
#[derive(Clone, Copy, Debug)]
pub struct IntegralImageView<'a> {
    pub rows: usize,
    pub columns: usize,
    pub data: &'a [u32],
}

/// Owned integral table produced by [`crate::IntegralImageBuilder::build`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntegralImage {
    pub rows: usize,
    pub columns: usize,
    pub data: Vec<u32>,
}

impl<'a> IntegralImageView<'a> {
    /// Wrap `data`, returning `None` if its length does not match the dimensions.
    pub fn new(rows: usize, columns: usize, data: &'a [u32]) -> Option<Self> {
        if Some(data.len()) != table_len(rows, columns) {
            return None;
        }
        Some(Self {
            rows,
            columns,
            data,
        })
    }

    #[inline]
    pub fn stride(&self) -> usize {
        self.columns.saturating_add(1)
    }

    /// Cell `(r, c)` of the table, `r <= rows`, `c <= columns`.
    #[inline]
    pub fn get(&self, r: usize, c: usize) -> Option<u32> {
        if r > self.rows || c > self.columns {
            return None;
        }
        let idx = r.checked_mul(self.stride())?.checked_add(c)?;
        self.data.get(idx).copied()
    }

    pub fn row(&self, r: usize) -> Option<&'a [u32]> {
        if r > self.rows {
            return None;
        }
        let stride = self.stride();
        let start = r.checked_mul(stride)?;
        self.data.get(start..start.checked_add(stride)?)
    }

    /// Sum of every source pixel.
    #[inline]
    pub fn total(&self) -> u32 {
        self.get(self.rows, self.columns).unwrap_or(0)
    }

    /// Sum of source pixels in the inclusive rectangle
    /// `[top, bottom] x [left, right]` (source coordinates).
    ///
    /// Returns `None` for inverted or out-of-range rectangles.
    pub fn region_sum(&self, top: usize, left: usize, bottom: usize, right: usize) -> Option<u32> {
        if top > bottom || left > right || bottom >= self.rows || right >= self.columns {
            return None;
        }
        let br = self.get(bottom + 1, right + 1)?;
        let tr = self.get(top, right + 1)?;
        let bl = self.get(bottom + 1, left)?;
        let tl = self.get(top, left)?;
        Some(br.wrapping_sub(tr).wrapping_sub(bl).wrapping_add(tl))
    }

    /// Iterate the table rows, border row first.
    pub fn rows_iter(&self) -> impl Iterator<Item = &'a [u32]> {
        self.data.chunks_exact(self.stride())
    }
}

impl IntegralImage {
    #[inline]
    pub fn view(&self) -> IntegralImageView<'_> {
        IntegralImageView {
            rows: self.rows,
            columns: self.columns,
            data: &self.data,
        }
    }

    #[inline]
    pub fn stride(&self) -> usize {
        self.view().stride()
    }

    #[inline]
    pub fn get(&self, r: usize, c: usize) -> Option<u32> {
        self.view().get(r, c)
    }

    pub fn row(&self, r: usize) -> Option<&[u32]> {
        self.view().row(r)
    }

    #[inline]
    pub fn total(&self) -> u32 {
        self.view().total()
    }

    pub fn region_sum(&self, top: usize, left: usize, bottom: usize, right: usize) -> Option<u32> {
        self.view().region_sum(top, left, bottom, right)
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<u32> {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2x3 source [[1, 2, 3], [4, 5, 6]].
    const TABLE: [u32; 12] = [
        0, 0, 0, 0, //
        0, 1, 3, 6, //
        0, 5, 12, 21,
    ];

    #[test]
    fn view_rejects_mismatched_length() {
        assert!(IntegralImageView::new(2, 3, &TABLE).is_some());
        assert!(IntegralImageView::new(3, 2, &TABLE[..11]).is_none());
    }

    #[test]
    fn view_rejects_dimensions_that_overflow() {
        assert!(IntegralImageView::new(usize::MAX, 1, &[]).is_none());
        assert!(IntegralImageView::new(1, usize::MAX, &[]).is_none());
        assert!(IntegralImageView::new(usize::MAX / 2, 3, &[]).is_none());
    }

    #[test]
    fn accessors_do_not_overflow_on_inconsistent_fields() {
        let view = IntegralImageView {
            rows: usize::MAX,
            columns: usize::MAX,
            data: &TABLE,
        };
        assert_eq!(view.get(usize::MAX, usize::MAX), None);
        assert_eq!(view.row(usize::MAX), None);
        assert_eq!(view.get(0, 3), Some(0));
    }

    #[test]
    fn region_sum_uses_inclusive_source_coordinates() {
        let view = IntegralImageView::new(2, 3, &TABLE).expect("length");
        assert_eq!(view.region_sum(0, 1, 1, 2), Some(2 + 3 + 5 + 6));
        assert_eq!(view.region_sum(0, 0, 0, 2), Some(1 + 2 + 3));
        assert_eq!(view.region_sum(1, 1, 1, 1), Some(5));
        assert_eq!(view.region_sum(0, 0, 1, 2), Some(view.total()));
    }

    #[test]
    fn region_sum_rejects_bad_rectangles() {
        let view = IntegralImageView::new(2, 3, &TABLE).expect("length");
        assert_eq!(view.region_sum(1, 0, 0, 0), None);
        assert_eq!(view.region_sum(0, 2, 0, 1), None);
        assert_eq!(view.region_sum(0, 0, 2, 0), None);
        assert_eq!(view.region_sum(0, 0, 0, 3), None);
    }

    #[test]
    fn accessors_stay_in_bounds() {
        let view = IntegralImageView::new(2, 3, &TABLE).expect("length");
        assert_eq!(view.get(2, 3), Some(21));
        assert_eq!(view.get(3, 0), None);
        assert_eq!(view.get(0, 4), None);
        assert_eq!(view.row(2), Some(&[0, 5, 12, 21][..]));
        assert_eq!(view.row(3), None);
        assert_eq!(view.rows_iter().count(), 3);
    }
}
