//! Inflate stage of CAPPI decoding.

use flate2::read::{DeflateDecoder, GzDecoder, ZlibDecoder};
use radar_common::DecodeError;
use std::io::Read;

/// Container format around the DEFLATE stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
    /// RFC 1952 gzip member.
    Gzip,
    /// RFC 1950 zlib stream (what the radar service emits).
    Zlib,
    /// Bare RFC 1951 DEFLATE data.
    Deflate,
}

impl Compression {
    /// Detect the container from the leading bytes.
    ///
    /// Anything without a gzip magic number or a valid zlib header is
    /// treated as raw DEFLATE.
    pub fn detect(data: &[u8]) -> Self {
        match data {
            [0x1f, 0x8b, ..] => Self::Gzip,
            [cmf, flg, ..] if is_zlib_header(*cmf, *flg) => Self::Zlib,
            _ => Self::Deflate,
        }
    }
}

/// CM must be 8 (deflate), CINFO at most 7, and CMF*256 + FLG a multiple
/// of 31.
fn is_zlib_header(cmf: u8, flg: u8) -> bool {
    cmf & 0x0f == 8 && cmf >> 4 <= 7 && ((u16::from(cmf) << 8) | u16::from(flg)) % 31 == 0
}

/// Decompress `data`, detecting the container format.
pub fn inflate(data: &[u8]) -> Result<Vec<u8>, DecodeError> {
    if data.is_empty() {
        return Err(DecodeError::Decompression("empty payload".to_string()));
    }

    let mut decompressed = Vec::new();
    let result = match Compression::detect(data) {
        Compression::Gzip => GzDecoder::new(data).read_to_end(&mut decompressed),
        Compression::Zlib => ZlibDecoder::new(data).read_to_end(&mut decompressed),
        Compression::Deflate => DeflateDecoder::new(data).read_to_end(&mut decompressed),
    };

    result.map_err(|e| DecodeError::Decompression(e.to_string()))?;
    Ok(decompressed)
}
