use flate2::write::ZlibEncoder;
use flate2::Compression;
use hotspot_studio::decoder::{
    decode_bytes, decompress_or_raw, CallTreeNode, HealthData, HeapData, HeapEntry, ProfileData,
    ProfileKind, SamplerData, ThreadNode, WindowStatistics,
};
use prost::Message;
use std::collections::BTreeMap;
use std::io::Write;

fn sample_sampler() -> SamplerData {
    let mut metadata = BTreeMap::new();
    metadata.insert("platform".to_string(), "test".to_string());

    SamplerData {
        metadata,
        threads: vec![ThreadNode {
            name: "main".to_string(),
            children: vec![CallTreeNode {
                class_name: "com.example.Server".to_string(),
                method_name: "tick".to_string(),
                description: "()V".to_string(),
                time: 250,
                children: vec![CallTreeNode {
                    method_name: "flush".to_string(),
                    time: 50,
                    ..Default::default()
                }],
            }],
        }],
    }
}

fn zlib_compress(bytes: &[u8]) -> Vec<u8> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(bytes).unwrap();
    encoder.finish().unwrap()
}

#[test]
fn test_decode_uncompressed_sampler_bytes() {
    let data = sample_sampler();
    let bytes = decompress_or_raw(data.encode_to_vec());

    let document = decode_bytes(&bytes, ProfileKind::Sampler).unwrap();
    assert_eq!(document, ProfileData::Sampler(data));
}

#[test]
fn test_decode_compressed_sampler_bytes() {
    let data = sample_sampler();
    let compressed = zlib_compress(&data.encode_to_vec());

    let bytes = decompress_or_raw(compressed);
    let document = decode_bytes(&bytes, ProfileKind::Sampler).unwrap();
    assert_eq!(document, ProfileData::Sampler(data));
}

#[test]
fn test_compressed_and_raw_inputs_decode_identically() {
    let data = sample_sampler();
    let raw = data.encode_to_vec();
    let compressed = zlib_compress(&raw);

    let from_raw = decode_bytes(&decompress_or_raw(raw), ProfileKind::Sampler).unwrap();
    let from_compressed =
        decode_bytes(&decompress_or_raw(compressed), ProfileKind::Sampler).unwrap();
    assert_eq!(from_raw, from_compressed);
}

#[test]
fn test_truncated_bytes_report_schema_mismatch() {
    // Field header claiming a 100-byte submessage with nothing behind it
    let err = decode_bytes(&[0x12, 0x64], ProfileKind::Sampler).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("'sampler'"));
    assert!(message.contains("--type"));
}

#[test]
fn test_heap_variant_roundtrip() {
    let data = HeapData {
        metadata: BTreeMap::new(),
        entries: vec![HeapEntry {
            order: 1,
            instances: 4096,
            size: 1 << 20,
            type_name: "byte[]".to_string(),
        }],
    };

    let document = decode_bytes(&data.encode_to_vec(), ProfileKind::Heap).unwrap();
    assert_eq!(document, ProfileData::Heap(data));
    assert!(document.threads().is_empty());
}

#[test]
fn test_health_variant_roundtrip() {
    let data = HealthData {
        metadata: BTreeMap::new(),
        windows: vec![WindowStatistics {
            window: 5,
            cpu_usage: 0.42,
            memory_usage: 0.8,
            tps: 19.7,
        }],
    };

    let document = decode_bytes(&data.encode_to_vec(), ProfileKind::Health).unwrap();
    assert_eq!(document, ProfileData::Health(data));
}

#[test]
fn test_passthrough_json_shape() {
    let document = decode_bytes(
        &sample_sampler().encode_to_vec(),
        ProfileKind::Sampler,
    )
    .unwrap();

    let json = serde_json::to_value(&document).unwrap();

    assert_eq!(json["metadata"]["platform"], "test");
    assert_eq!(json["threads"][0]["name"], "main");
    let root = &json["threads"][0]["children"][0];
    assert_eq!(root["className"], "com.example.Server");
    assert_eq!(root["time"], 250);
    // Defaulted fields are omitted, like the standard protobuf JSON mapping
    assert!(root["children"][0].get("className").is_none());
}
