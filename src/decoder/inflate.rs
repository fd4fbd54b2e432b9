//! Transparent decompression of snapshot bytes.
//!
//! Snapshots are usually zlib-wrapped, but older exporters wrote plain
//! protobuf. We always try to inflate first and keep the raw bytes when
//! that fails, so both kinds of file work without a flag.

use flate2::read::ZlibDecoder;
use log::debug;
use std::io::Read;

/// Inflate zlib-wrapped bytes, falling back to the raw buffer
///
/// **Public** - first stage of the decode pipeline
///
/// This never fails: an inflate error just means the input was not
/// compressed, and the original bytes are returned unchanged.
pub fn decompress_or_raw(raw: Vec<u8>) -> Vec<u8> {
    let mut decoder = ZlibDecoder::new(raw.as_slice());
    let mut inflated = Vec::new();

    match decoder.read_to_end(&mut inflated) {
        Ok(_) => {
            debug!(
                "Inflated {} bytes into {} bytes",
                raw.len(),
                inflated.len()
            );
            inflated
        }
        Err(err) => {
            debug!("zlib inflate failed ({}), assuming uncompressed input", err);
            raw
        }
    }
}
