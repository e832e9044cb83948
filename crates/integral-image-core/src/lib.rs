//! Integral image (summed-area table) construction over flat pixel buffers.
//!
//! The crate is deliberately small: it validates grid dimensions against a
//! [`SizeLimits`] policy, fills a `(rows + 1) x (columns + 1)` table with the
//! summed-area recurrence and answers rectangle-sum queries in constant time.
//! It never allocates on the caller-buffer path and never logs while building.
//!
//! ```
//! use integral_image_core::integral_image;
//!
//! # fn main() -> Result<(), integral_image_core::IntegralError> {
//! let pixels = vec![1u32; 5 * 10];
//! let integral = integral_image(5, 10, &pixels)?;
//! assert_eq!(integral.total(), 50);
//! assert_eq!(integral.region_sum(1, 2, 3, 4), Some(9));
//! # Ok(())
//! # }
//! ```

mod image;
mod integrate;
mod limits;
mod logger;

pub use image::{IntegralImage, IntegralImageView};
pub use integrate::{integral_image, integrate_into, IntegralError, IntegralImageBuilder};
pub use limits::{SizeLimits, MAX_COLUMNS, MAX_ROWS, MIN_COLUMNS, MIN_ROWS};

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::init_with_level;
