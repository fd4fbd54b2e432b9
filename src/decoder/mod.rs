//! Snapshot decoding: file bytes in, profile document out.
//!
//! This module handles:
//! - Reading raw snapshot bytes from disk
//! - Transparent zlib decompression (with raw fallback)
//! - Protobuf decoding into one of three schema variants
//!
//! The decoded document is immutable input for the summarizer.

pub mod inflate;
pub mod schema;

use crate::utils::error::DecodeError;
use log::{debug, info};
use prost::Message;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

pub use inflate::decompress_or_raw;
pub use schema::{
    CallTreeNode, HealthData, HeapData, HeapEntry, SamplerData, ThreadNode, WindowStatistics,
};

/// Which schema variant a snapshot should be decoded as.
///
/// The variant cannot be sniffed from the bytes; the exporter that wrote the
/// file knows, so the caller selects it (normally via `--type`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileKind {
    Sampler,
    Heap,
    Health,
}

impl FromStr for ProfileKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sampler" => Ok(Self::Sampler),
            "heap" => Ok(Self::Heap),
            "health" => Ok(Self::Health),
            other => Err(format!(
                "unknown profile type '{}' (expected 'sampler', 'heap' or 'health')",
                other
            )),
        }
    }
}

impl fmt::Display for ProfileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Sampler => "sampler",
            Self::Heap => "heap",
            Self::Health => "health",
        };
        write!(f, "{}", name)
    }
}

/// A fully decoded snapshot document
///
/// **Public** - the input boundary of the summarizer. Serializes untagged,
/// so passthrough output is exactly the inner document's JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ProfileData {
    Sampler(SamplerData),
    Heap(HeapData),
    Health(HealthData),
}

impl ProfileData {
    /// Schema variant this document was decoded as
    pub fn kind(&self) -> ProfileKind {
        match self {
            Self::Sampler(_) => ProfileKind::Sampler,
            Self::Heap(_) => ProfileKind::Heap,
            Self::Health(_) => ProfileKind::Health,
        }
    }

    /// Snapshot metadata, passed through to any output unchanged
    pub fn metadata(&self) -> &BTreeMap<String, String> {
        match self {
            Self::Sampler(data) => &data.metadata,
            Self::Heap(data) => &data.metadata,
            Self::Health(data) => &data.metadata,
        }
    }

    /// Profiled threads. Heap and health snapshots carry no call trees,
    /// so summarizing them yields a report with no hotspots.
    pub fn threads(&self) -> &[ThreadNode] {
        match self {
            Self::Sampler(data) => &data.threads,
            Self::Heap(_) | Self::Health(_) => &[],
        }
    }
}

/// Read raw snapshot bytes from disk
///
/// **Public** - first step of `decode_snapshot`, exposed for callers that
/// already hold bytes from elsewhere
pub fn read_snapshot(path: &Path) -> Result<Vec<u8>, DecodeError> {
    let raw = std::fs::read(path)?;
    debug!("Read {} bytes from {}", raw.len(), path.display());
    Ok(raw)
}

/// Decode (possibly compressed) snapshot bytes as the selected variant
///
/// **Public** - pure decode step, used directly by tests
///
/// # Errors
/// * `DecodeError::SchemaMismatch` - bytes do not parse as `kind`
pub fn decode_bytes(bytes: &[u8], kind: ProfileKind) -> Result<ProfileData, DecodeError> {
    let mismatch = |source| DecodeError::SchemaMismatch {
        kind: kind.to_string(),
        source,
    };

    let document = match kind {
        ProfileKind::Sampler => ProfileData::Sampler(SamplerData::decode(bytes).map_err(mismatch)?),
        ProfileKind::Heap => ProfileData::Heap(HeapData::decode(bytes).map_err(mismatch)?),
        ProfileKind::Health => ProfileData::Health(HealthData::decode(bytes).map_err(mismatch)?),
    };

    Ok(document)
}

/// Decode a snapshot file into a profile document
///
/// **Public** - main entry point for the decode pipeline
///
/// Reads the file, inflates it if compressed, and parses the bytes as the
/// selected schema variant. Each step runs exactly once.
///
/// # Errors
/// * `DecodeError::InputUnavailable` - the file could not be read
/// * `DecodeError::SchemaMismatch` - the bytes do not parse as `kind`
pub fn decode_snapshot(path: &Path, kind: ProfileKind) -> Result<ProfileData, DecodeError> {
    let raw = read_snapshot(path)?;
    let bytes = decompress_or_raw(raw);
    let document = decode_bytes(&bytes, kind)?;

    info!(
        "Decoded '{}' snapshot: {} threads, {} metadata entries",
        kind,
        document.threads().len(),
        document.metadata().len()
    );

    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_kind_from_str() {
        assert_eq!("sampler".parse::<ProfileKind>().unwrap(), ProfileKind::Sampler);
        assert_eq!("HEAP".parse::<ProfileKind>().unwrap(), ProfileKind::Heap);
        assert!("metrics".parse::<ProfileKind>().is_err());
    }

    #[test]
    fn test_decode_bytes_schema_mismatch() {
        // A lone field header with no payload is not a valid message
        let err = decode_bytes(&[0x0a], ProfileKind::Sampler).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("sampler"));
        assert!(message.contains("--type"));
    }

    #[test]
    fn test_threads_empty_for_heap() {
        let document = ProfileData::Heap(HeapData::default());
        assert!(document.threads().is_empty());
    }
}
