//! High-level facade for the `integral-image-*` workspace.
//!
//! This crate provides:
//! - re-exports of [`integral_image_core`] under `core` and at the top level
//! - JSON config and report helpers ([`io`])
//! - fixed-width text rendering of integral tables ([`render`])
//! - the `integral-image` demonstration binary (feature `cli`)
//!
//! ## Quickstart
//!
//! ```
//! use integral_image::{render::render_grid, IntegrateConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let cfg = IntegrateConfig::uniform(5, 10, 1);
//! let integral = integral_image::integrate(&cfg)?;
//! assert_eq!(integral.total(), 50);
//! print!("{}", render_grid(&integral.view(), 7));
//! # Ok(())
//! # }
//! ```

pub use integral_image_core as core;

pub use integral_image_core::{
    integral_image, integrate_into, IntegralError, IntegralImage, IntegralImageBuilder,
    IntegralImageView, SizeLimits,
};

pub mod io;
pub mod render;

pub use io::{IntegrateConfig, IntegrateConfigError, IntegrateIoError, IntegrateReport};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Errors produced by the facade helpers.
#[derive(thiserror::Error, Debug)]
pub enum IntegrateError {
    #[error(transparent)]
    Config(#[from] IntegrateConfigError),

    #[error(transparent)]
    Integral(#[from] IntegralError),

    #[error(transparent)]
    Io(#[from] IntegrateIoError),
}

/// Build the integral image described by `cfg`.
///
/// Dimensions are checked against the configured limits before the pixel
/// list, so an out-of-range grid reports [`IntegralError`] regardless of how
/// many pixels it lists. The source buffer is dropped once the table is built.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "info", skip(cfg), fields(rows = cfg.rows, columns = cfg.columns))
)]
pub fn integrate(cfg: &IntegrateConfig) -> Result<IntegralImage, IntegrateError> {
    let builder = cfg.build_builder();
    builder.limits().check(cfg.rows, cfg.columns)?;
    let source = cfg.source_pixels()?;
    log::debug!(
        "integrating {}x{} grid (limits {:?})",
        cfg.rows,
        cfg.columns,
        builder.limits()
    );
    Ok(builder.build(cfg.rows, cfg.columns, &source)?)
}

/// Run [`integrate`] and capture the outcome in a report.
///
/// Validation failures end up in [`IntegrateReport::error`] rather than in
/// the returned `Result`; only config problems unrelated to the grid
/// dimensions are propagated.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "info", skip(cfg), fields(rows = cfg.rows, columns = cfg.columns))
)]
pub fn integrate_report(
    cfg: &IntegrateConfig,
) -> Result<(IntegrateReport, Option<IntegralImage>), IntegrateError> {
    let mut report = IntegrateReport::new(cfg);
    match integrate(cfg) {
        Ok(integral) => {
            report.set_integral(&integral);
            Ok((report, Some(integral)))
        }
        Err(IntegrateError::Integral(err)) => {
            log::warn!("integration rejected: {err}");
            report.set_error(err);
            Ok((report, None))
        }
        Err(err) => Err(err),
    }
}

/// Load a JSON config, run it, and write the report to the configured
/// `output_path` when one is set.
pub fn integrate_file(
    path: impl AsRef<std::path::Path>,
) -> Result<(IntegrateReport, Option<IntegralImage>), IntegrateError> {
    let path = path.as_ref();
    let cfg = IntegrateConfig::load_json(path)?;
    log::info!("loaded config {}", path.display());

    let (report, integral) = integrate_report(&cfg)?;
    if let Some(output) = cfg.output_path() {
        report.write_json(&output)?;
        log::info!("wrote report to {}", output.display());
    }
    Ok((report, integral))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integrate_demo_grid() {
        let integral = integrate(&IntegrateConfig::uniform(5, 10, 1)).expect("valid");
        assert_eq!(integral.get(5, 10), Some(50));
        assert_eq!(integral.get(3, 4), Some(12));
    }

    #[test]
    fn report_captures_validation_errors() {
        let (report, integral) =
            integrate_report(&IntegrateConfig::uniform(4, 10, 1)).expect("config is well formed");
        assert!(integral.is_none());
        assert!(report.integral.is_empty());
        assert_eq!(
            report.error.as_deref(),
            Some("image too small (4x10, minimum is 5x5)")
        );
    }

    #[test]
    fn dimension_errors_outrank_pixel_count() {
        let mut cfg = IntegrateConfig::uniform(4, 10, 0);
        cfg.pixels = Some(vec![1; 3]);

        let err = integrate(&cfg).unwrap_err();
        assert!(matches!(
            err,
            IntegrateError::Integral(IntegralError::TooSmall { rows: 4, .. })
        ));

        let (report, integral) = integrate_report(&cfg).expect("reported, not propagated");
        assert!(integral.is_none());
        assert_eq!(
            report.error.as_deref(),
            Some("image too small (4x10, minimum is 5x5)")
        );
    }

    #[test]
    fn report_propagates_config_errors() {
        let mut cfg = IntegrateConfig::uniform(5, 5, 0);
        cfg.pixels = Some(vec![1; 3]);
        let err = integrate_report(&cfg).unwrap_err();
        assert!(matches!(
            err,
            IntegrateError::Config(IntegrateConfigError::PixelCount {
                expected: 25,
                got: 3
            })
        ));
    }
}
