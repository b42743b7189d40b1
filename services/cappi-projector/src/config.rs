//! Projector configuration.
//!
//! Settings are layered: built-in defaults, then an optional YAML file,
//! then `CAPPI_*` environment variables, then command-line flags.

use anyhow::{Context, Result};
use projection::{NoiseFilter, ProjectorOptions};
use radar_common::{CappiProduct, GridShape, ProjectionParameters};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level projector configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectorConfig {
    /// Project rows on the rayon thread pool
    pub parallel: bool,

    /// Indent the GeoJSON output
    pub pretty: bool,

    /// Attach a `bbox` member to the output collection
    pub include_bbox: bool,

    /// Drop isolated cells below this value (disabled when unset)
    pub noise_filter_threshold: Option<f64>,

    /// Replacements for the product's own metadata
    pub overrides: MetadataOverrides,
}

/// Optional replacements for product metadata fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetadataOverrides {
    pub xdim: Option<usize>,
    pub ydim: Option<usize>,
    pub origin_lon: Option<f64>,
    pub origin_lat: Option<f64>,
    pub grid_km: Option<f64>,
    pub altitude_km: Option<f64>,
}

impl MetadataOverrides {
    /// Shape of `product` with any overrides applied.
    pub fn shape(&self, product: &CappiProduct) -> GridShape {
        GridShape::new(
            self.xdim.unwrap_or(product.xdim),
            self.ydim.unwrap_or(product.ydim),
        )
    }

    /// Projection of `product` with any overrides applied.
    pub fn projection(&self, product: &CappiProduct) -> ProjectionParameters {
        ProjectionParameters::new(
            self.origin_lon.unwrap_or(product.start_lon),
            self.origin_lat.unwrap_or(product.start_lat),
            self.grid_km.unwrap_or(product.grid_km),
            self.altitude_km.unwrap_or(product.altitude),
        )
    }
}

impl ProjectorConfig {
    /// Load configuration from a YAML file.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {:?}", path))?;

        serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {:?}", path))
    }

    /// Load configuration from the optional file, then apply environment
    /// variables.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(p) => Self::from_yaml_file(p)?,
            None => Self::default(),
        };
        config.apply_env_from(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Apply `CAPPI_*` variables using `lookup` to read them.
    ///
    /// Unparseable values are ignored and the previous setting is kept.
    pub fn apply_env_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("CAPPI_PARALLEL") {
            self.parallel = parse_bool(&val);
        }

        if let Some(val) = lookup("CAPPI_PRETTY") {
            self.pretty = parse_bool(&val);
        }

        if let Some(val) = lookup("CAPPI_INCLUDE_BBOX") {
            self.include_bbox = parse_bool(&val);
        }

        if let Some(val) = lookup("CAPPI_NOISE_FILTER_THRESHOLD") {
            if let Ok(threshold) = val.parse() {
                self.noise_filter_threshold = Some(threshold);
            }
        }

        if let Some(val) = lookup("CAPPI_ALTITUDE_KM") {
            if let Ok(altitude) = val.parse() {
                self.overrides.altitude_km = Some(altitude);
            }
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if let Some(threshold) = self.noise_filter_threshold {
            if !threshold.is_finite() {
                return Err("noise_filter_threshold must be a finite number".to_string());
            }
        }

        let o = &self.overrides;
        if let Some(km) = o.grid_km {
            if !km.is_finite() || km <= 0.0 {
                return Err("overrides.grid_km must be > 0".to_string());
            }
        }

        if let Some(km) = o.altitude_km {
            if !km.is_finite() || km < 0.0 {
                return Err("overrides.altitude_km must be >= 0".to_string());
            }
        }

        if o.xdim == Some(0) || o.ydim == Some(0) {
            return Err("overrides.xdim and overrides.ydim must be > 0".to_string());
        }

        Ok(())
    }

    /// Projector options implied by this configuration.
    pub fn projector_options(&self) -> ProjectorOptions {
        ProjectorOptions {
            noise_filter: self
                .noise_filter_threshold
                .map(NoiseFilter::isolated_below)
                .unwrap_or_default(),
        }
    }
}

fn parse_bool(val: &str) -> bool {
    matches!(val.to_lowercase().as_str(), "true" | "1" | "yes" | "on")
}
