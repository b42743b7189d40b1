//! CAPPI grid decoder.
//!
//! The radar service ships each CAPPI product as base64 text wrapping a
//! compressed CSV document: one line per grid row, comma-separated sample
//! values per column. Decoding runs in three stages:
//!
//! 1. base64 text to compressed bytes
//! 2. inflate (zlib, gzip or raw DEFLATE, detected from the header)
//! 3. CSV text to a [`RawGrid`]
//!
//! Each stage is exposed on its own so callers holding raw bytes or plain
//! text can skip the earlier ones.

pub mod compression;
pub mod text;

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine as _;
use radar_common::{CappiProduct, DecodeError, RadarResult, RawGrid};
use tracing::debug;

pub use compression::{inflate, Compression};
pub use text::parse_grid_text;

/// Decode a base64 payload into a grid.
pub fn decode_grid(payload: &str) -> Result<RawGrid, DecodeError> {
    let compressed = decode_base64(payload)?;
    decode_bytes(&compressed)
}

/// Decode compressed bytes (already base64-decoded) into a grid.
pub fn decode_bytes(compressed: &[u8]) -> Result<RawGrid, DecodeError> {
    let inflated = inflate(compressed)?;
    let text = String::from_utf8(inflated).map_err(|e| DecodeError::Utf8(e.to_string()))?;
    let grid = parse_grid_text(&text)?;

    debug!(
        compressed_bytes = compressed.len(),
        text_bytes = text.len(),
        rows = grid.rows(),
        "Decoded CAPPI grid"
    );

    Ok(grid)
}

/// Decode a product's payload and check it against the product's declared
/// dimensions.
pub fn decode_product(product: &CappiProduct) -> RadarResult<RawGrid> {
    let grid = decode_grid(&product.data)?;
    grid.check_shape(product.shape())?;
    Ok(grid)
}

/// Standard alphabet; trailing `=` padding is optional and non-zero trailing
/// bits are accepted, matching browser `atob`.
const PAYLOAD_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Base64 text to bytes. ASCII whitespace anywhere in the text is ignored,
/// so line-wrapped payloads decode the same as single-line ones.
fn decode_base64(payload: &str) -> Result<Vec<u8>, DecodeError> {
    let cleaned: String = payload
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();

    PAYLOAD_ENGINE
        .decode(cleaned.as_bytes())
        .map_err(|e| DecodeError::Base64(e.to_string()))
}
