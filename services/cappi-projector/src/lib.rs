//! CAPPI product to GeoJSON conversion pipeline.
//!
//! Reads a product, decodes its grid, places every cell on the map and
//! renders the result as a point FeatureCollection.

pub mod config;

use std::io::{Read, Write};
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, warn};

use point_collection::{to_point_collection, PointCollection};
use projection::GridGeoProjector;
use radar_common::CappiProduct;

pub use config::{MetadataOverrides, ProjectorConfig};

/// Read a product JSON document from `path`, or from stdin when `path` is `-`.
pub fn load_product(path: &str) -> Result<CappiProduct> {
    let content = if path == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read product from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read product: {}", path))?
    };

    parse_product(&content)
}

/// Parse a product JSON document.
pub fn parse_product(json: &str) -> Result<CappiProduct> {
    serde_json::from_str(json).context("Failed to parse product JSON")
}

/// Decode and project `product` into a point collection.
pub fn convert(product: &CappiProduct, config: &ProjectorConfig) -> Result<PointCollection> {
    let start = Instant::now();

    let shape = config.overrides.shape(product);
    let params = config.overrides.projection(product);

    let grid = cappi_decoder::decode_grid(&product.data).context("Failed to decode grid")?;

    let no_data = grid.no_data_count();
    if no_data == grid.cell_count() && !grid.is_empty() {
        warn!(cells = no_data, "Grid contains only no-data cells");
    }

    let projector = GridGeoProjector::with_options(config.projector_options());
    let points = if config.parallel {
        projector.project_parallel(&grid, shape, &params)
    } else {
        projector.project(&grid, shape, &params)
    }
    .with_context(|| format!("Failed to project {} grid", shape))?;

    let mut collection = to_point_collection(&points);
    if config.include_bbox {
        collection = collection.with_bbox();
    }

    info!(
        shape = %shape,
        no_data_cells = no_data,
        features = collection.len(),
        parallel = config.parallel,
        duration_ms = start.elapsed().as_millis() as u64,
        "Converted CAPPI product"
    );

    Ok(collection)
}

/// Serialize `collection` according to `config`.
pub fn render(collection: &PointCollection, config: &ProjectorConfig) -> Result<String> {
    let json = if config.pretty {
        collection.to_json_pretty()
    } else {
        collection.to_json()
    };
    json.context("Failed to serialize GeoJSON")
}

/// Write `text` to `path`, or to stdout when no path is given.
pub fn write_output(path: Option<&Path>, text: &str) -> Result<()> {
    match path {
        Some(p) => std::fs::write(p, text)
            .with_context(|| format!("Failed to write output: {:?}", p)),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(text.as_bytes())
                .and_then(|_| stdout.write_all(b"\n"))
                .context("Failed to write output to stdout")
        }
    }
}
