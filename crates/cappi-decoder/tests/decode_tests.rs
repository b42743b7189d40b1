//! End-to-end decoding of base64 CAPPI payloads.

use cappi_decoder::{decode_grid, decode_product};
use radar_common::{DecodeError, ProjectionParameters, RadarError};
use test_utils::{
    create_grid_with_sentinels, create_product, create_reflectivity_grid, encode_grid_payload,
    encode_text_payload, fixtures, PayloadFormat,
};

// ============================================================================
// Successful decoding
// ============================================================================

#[test]
fn test_decode_simple_grid() {
    let payload = encode_grid_payload(&fixtures::grids::simple_2x2());
    let grid = decode_grid(&payload).unwrap();
    assert_eq!(grid.into_rows(), fixtures::grids::simple_2x2());
}

#[test]
fn test_decode_preserves_values_exactly() {
    let rows = create_grid_with_sentinels(37, 23, 11);
    let grid = decode_grid(&encode_grid_payload(&rows)).unwrap();
    assert_eq!(grid.rows(), 23);
    assert_eq!(grid.into_rows(), rows);
}

#[test]
fn test_decode_all_container_formats() {
    let text = "0.5,-128\n12.25,3\n";
    for format in [PayloadFormat::Zlib, PayloadFormat::Gzip, PayloadFormat::Deflate] {
        let grid = decode_grid(&encode_text_payload(text, format)).unwrap();
        assert_eq!(
            grid.into_rows(),
            vec![vec![0.5, -128.0], vec![12.25, 3.0]],
            "format {:?}",
            format
        );
    }
}

#[test]
fn test_decode_without_trailing_newline() {
    let grid = decode_grid(&encode_text_payload("1,2\n3,4", PayloadFormat::Zlib)).unwrap();
    assert_eq!(grid.rows(), 2);
}

#[test]
fn test_decode_empty_text() {
    let grid = decode_grid(&encode_text_payload("", PayloadFormat::Zlib)).unwrap();
    assert!(grid.is_empty());
}

#[test]
fn test_decode_unpadded_payload() {
    let padded = "eJwz1DHi0jU0Mtcx4QIACx0Byw==";
    let unpadded = padded.trim_end_matches('=');

    let grid = decode_grid(unpadded).unwrap();
    assert_eq!(grid, decode_grid(padded).unwrap());
    assert_eq!(grid.into_rows(), fixtures::grids::simple_2x2());
}

#[test]
fn test_decode_generated_payload_without_padding() {
    let rows = create_reflectivity_grid(9, 4);
    let payload = encode_grid_payload(&rows);
    let grid = decode_grid(payload.trim_end_matches('=')).unwrap();
    assert_eq!(grid.into_rows(), rows);
}

#[test]
fn test_decode_product_checks_shape() {
    let rows = create_reflectivity_grid(12, 8);
    let product = create_product(&rows, fixtures::params::SIMPLE);
    let grid = decode_product(&product).unwrap();
    assert_eq!(grid.rows(), 8);
    assert_eq!(grid.row(0).map(<[f64]>::len), Some(12));
}

// ============================================================================
// Failures
// ============================================================================

#[test]
fn test_decode_invalid_base64() {
    let result = decode_grid("@@not-base64@@");
    assert!(matches!(result, Err(DecodeError::Base64(_))));
}

#[test]
fn test_decode_not_compressed() {
    // "hello world" is not a valid DEFLATE stream.
    let result = decode_grid("aGVsbG8gd29ybGQ=");
    assert!(matches!(result, Err(DecodeError::Decompression(_))));
}

#[test]
fn test_decode_non_numeric_field() {
    let payload = encode_text_payload("1,2\n3,abc\n", PayloadFormat::Zlib);
    match decode_grid(&payload) {
        Err(DecodeError::NonNumeric { row, column, field }) => {
            assert_eq!((row, column), (1, 1));
            assert_eq!(field, "abc");
        }
        other => panic!("expected NonNumeric, got {:?}", other),
    }
}

#[test]
fn test_decode_product_shape_mismatch() {
    let mut product = create_product(
        &fixtures::grids::simple_2x2(),
        ProjectionParameters::new(127.0, 37.0, 1.0, 0.0),
    );
    product.ydim = 3;

    let result = decode_product(&product);
    assert!(matches!(result, Err(RadarError::InvalidGridShape { .. })));
}

#[test]
fn test_decode_product_surfaces_decode_error() {
    let mut product = create_product(&fixtures::grids::simple_2x2(), fixtures::params::SIMPLE);
    product.data = "!!!".to_string();

    let result = decode_product(&product);
    assert!(matches!(result, Err(RadarError::Decode(DecodeError::Base64(_)))));
}
