//! JSON configuration and report helpers.

use integral_image_core::{IntegralError, IntegralImage, IntegralImageBuilder, SizeLimits};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

#[derive(thiserror::Error, Debug)]
pub enum IntegrateIoError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum IntegrateConfigError {
    #[error("pixels holds {got} values, {expected} expected for the configured grid")]
    PixelCount { expected: usize, got: usize },
}

fn default_fill() -> u32 {
    1
}

/// Source grid description for a single integration run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrateConfig {
    pub rows: usize,
    pub columns: usize,
    /// Value of every pixel when `pixels` is absent.
    #[serde(default = "default_fill")]
    pub fill: u32,
    /// Explicit row-major pixels, `rows * columns` values.
    #[serde(default)]
    pub pixels: Option<Vec<u32>>,
    #[serde(default)]
    pub limits: SizeLimits,
    #[serde(default)]
    pub output_path: Option<String>,
}

impl IntegrateConfig {
    /// A `rows x columns` grid with every pixel set to `fill`.
    pub fn uniform(rows: usize, columns: usize, fill: u32) -> Self {
        Self {
            rows,
            columns,
            fill,
            pixels: None,
            limits: SizeLimits::default(),
            output_path: None,
        }
    }

    /// Load a JSON config from disk.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, IntegrateIoError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Write this config to disk as pretty JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), IntegrateIoError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Resolve the report path, if one is configured.
    pub fn output_path(&self) -> Option<PathBuf> {
        self.output_path.as_ref().map(PathBuf::from)
    }

    /// Materialise the row-major source buffer.
    pub fn source_pixels(&self) -> Result<Vec<u32>, IntegrateConfigError> {
        let expected = self.rows.saturating_mul(self.columns);
        match &self.pixels {
            Some(pixels) if pixels.len() != expected => Err(IntegrateConfigError::PixelCount {
                expected,
                got: pixels.len(),
            }),
            Some(pixels) => Ok(pixels.clone()),
            None if self.limits.contains(self.rows, self.columns) => {
                Ok(vec![self.fill; expected])
            }
            // Out-of-range grids are rejected by the builder; skip allocating them.
            None => Ok(Vec::new()),
        }
    }

    pub fn build_builder(&self) -> IntegralImageBuilder {
        IntegralImageBuilder::with_limits(self.limits)
    }
}

/// JSON-friendly outcome of an integration run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntegrateReport {
    pub rows: usize,
    pub columns: usize,
    pub limits: SizeLimits,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<u32>,
    /// Integral table rows, border row first; empty on failure.
    #[serde(default)]
    pub integral: Vec<Vec<u32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl IntegrateReport {
    pub fn new(cfg: &IntegrateConfig) -> Self {
        Self {
            rows: cfg.rows,
            columns: cfg.columns,
            limits: cfg.limits,
            total: None,
            integral: Vec::new(),
            error: None,
        }
    }

    pub fn set_integral(&mut self, integral: &IntegralImage) {
        self.total = Some(integral.total());
        self.integral = integral.view().rows_iter().map(<[u32]>::to_vec).collect();
        self.error = None;
    }

    pub fn set_error(&mut self, err: IntegralError) {
        self.total = None;
        self.integral.clear();
        self.error = Some(err.to_string());
    }

    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), IntegrateIoError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_json_uses_defaults() {
        let cfg: IntegrateConfig =
            serde_json::from_str(r#"{ "rows": 5, "columns": 10 }"#).expect("json");
        assert_eq!(cfg, IntegrateConfig::uniform(5, 10, 1));
        assert_eq!(cfg.source_pixels().expect("pixels"), vec![1; 50]);
        assert_eq!(cfg.output_path(), None);
    }

    #[test]
    fn explicit_pixels_must_match_grid() {
        let mut cfg = IntegrateConfig::uniform(5, 5, 0);
        cfg.pixels = Some((0..25).collect());
        assert_eq!(cfg.source_pixels().expect("sized").len(), 25);

        cfg.pixels = Some(vec![0; 26]);
        assert_eq!(
            cfg.source_pixels(),
            Err(IntegrateConfigError::PixelCount {
                expected: 25,
                got: 26
            })
        );
    }

    #[test]
    fn config_round_trips_through_disk() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.json");

        let mut cfg = IntegrateConfig::uniform(6, 7, 3);
        cfg.limits.max_rows = 10;
        cfg.output_path = Some("report.json".to_string());
        cfg.write_json(&path).expect("write");

        let loaded = IntegrateConfig::load_json(&path).expect("load");
        assert_eq!(loaded, cfg);
        assert_eq!(loaded.output_path(), Some(PathBuf::from("report.json")));
    }

    #[test]
    fn report_lists_table_rows() {
        let cfg = IntegrateConfig::uniform(5, 5, 2);
        let integral = cfg
            .build_builder()
            .build(5, 5, &cfg.source_pixels().expect("pixels"))
            .expect("valid");

        let mut report = IntegrateReport::new(&cfg);
        report.set_integral(&integral);
        assert_eq!(report.total, Some(50));
        assert_eq!(report.integral.len(), 6);
        assert_eq!(report.integral[1], vec![0, 2, 4, 6, 8, 10]);

        let json = serde_json::to_value(&report).expect("serialize");
        assert!(json.get("error").is_none());
        assert_eq!(json["total"], 50);
    }
}
