//! Builders for compressed CAPPI payloads and product files.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use flate2::write::{DeflateEncoder, GzEncoder, ZlibEncoder};
use flate2::Compression;
use radar_common::{CappiProduct, ProjectionParameters};
use std::io::Write;
use tempfile::NamedTempFile;

use crate::grid_to_csv;

/// Container to wrap the DEFLATE stream in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadFormat {
    Zlib,
    Gzip,
    Deflate,
}

/// Compress `text` in the given container.
pub fn compress_text(text: &str, format: PayloadFormat) -> Vec<u8> {
    match format {
        PayloadFormat::Zlib => {
            let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
            encoder.write_all(text.as_bytes()).expect("write to Vec");
            encoder.finish().expect("finish zlib")
        }
        PayloadFormat::Gzip => {
            let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
            encoder.write_all(text.as_bytes()).expect("write to Vec");
            encoder.finish().expect("finish gzip")
        }
        PayloadFormat::Deflate => {
            let mut encoder = DeflateEncoder::new(Vec::new(), Compression::default());
            encoder.write_all(text.as_bytes()).expect("write to Vec");
            encoder.finish().expect("finish deflate")
        }
    }
}

/// Compress and base64-encode arbitrary text.
pub fn encode_text_payload(text: &str, format: PayloadFormat) -> String {
    STANDARD.encode(compress_text(text, format))
}

/// Build the base64 payload the radar service would send for `rows`.
pub fn encode_grid_payload(rows: &[Vec<f64>]) -> String {
    encode_text_payload(&grid_to_csv(rows), PayloadFormat::Zlib)
}

/// Build a full product for `rows` placed with `params`.
pub fn create_product(rows: &[Vec<f64>], params: ProjectionParameters) -> CappiProduct {
    CappiProduct {
        data: encode_grid_payload(rows),
        xdim: rows.first().map(Vec::len).unwrap_or(0),
        ydim: rows.len(),
        grid_km: params.grid_spacing_km,
        start_lon: params.origin_longitude,
        start_lat: params.origin_latitude,
        altitude: params.altitude_km,
    }
}

/// Write `contents` to a fresh temporary file.
pub fn temp_file_with(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file.flush().expect("flush temp file");
    file
}

/// Write `product` as JSON to a fresh temporary file.
pub fn write_product_file(product: &CappiProduct) -> NamedTempFile {
    let json = serde_json::to_string(product).expect("serialize product");
    temp_file_with(&json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::read::ZlibDecoder;
    use std::io::Read;

    #[test]
    fn test_encode_grid_payload_roundtrip_bytes() {
        let payload = encode_grid_payload(&[vec![1.0, 2.0]]);
        let bytes = STANDARD.decode(payload).unwrap();

        let mut text = String::new();
        ZlibDecoder::new(&bytes[..]).read_to_string(&mut text).unwrap();
        assert_eq!(text, "1,2\n");
    }

    #[test]
    fn test_create_product_dimensions() {
        let params = ProjectionParameters::new(127.0, 37.0, 1.0, 0.0);
        let product = create_product(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]], params);
        assert_eq!(product.xdim, 3);
        assert_eq!(product.ydim, 2);
        assert_eq!(product.projection(), params);
    }
}
