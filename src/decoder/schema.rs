//! Wire schema for profiler snapshots.
//!
//! Snapshots are protobuf-encoded; the messages are hand-written here with
//! `prost` derives instead of being generated from .proto files. The same
//! structs carry serde derives so a decoded document serializes straight to
//! JSON with the conventional protobuf mapping: camelCase field names,
//! default-valued fields omitted.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One aggregated stack frame in a sampled call tree.
///
/// `time` is cumulative over the whole subtree; self time is derived later
/// by the summarizer. Children are exclusively owned, so a decoded tree can
/// never contain sharing or cycles.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallTreeNode {
    /// Declaring class of the sampled frame
    #[prost(string, tag = "1")]
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub class_name: String,

    /// Method name of the sampled frame
    #[prost(string, tag = "2")]
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub method_name: String,

    /// Method descriptor (signature or free-form description)
    #[prost(string, tag = "3")]
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    /// Cumulative time for this frame, descendants included
    #[prost(uint64, tag = "4")]
    #[serde(default, skip_serializing_if = "is_zero_u64")]
    pub time: u64,

    /// Callees, in sampling order
    #[prost(message, repeated, tag = "5")]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<CallTreeNode>,
}

/// A profiled thread: a named root over top-level call-tree nodes
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreadNode {
    #[prost(string, tag = "1")]
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,

    #[prost(message, repeated, tag = "2")]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<CallTreeNode>,
}

/// Sampler snapshot: opaque metadata plus the per-thread call trees
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SamplerData {
    /// Snapshot metadata, passed through untouched.
    /// BTreeMap keeps serialization order deterministic.
    #[prost(btree_map = "string, string", tag = "1")]
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, String>,

    #[prost(message, repeated, tag = "2")]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub threads: Vec<ThreadNode>,
}

/// One class entry in a heap snapshot
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeapEntry {
    /// Rank by retained size at capture time
    #[prost(uint32, tag = "1")]
    #[serde(default, skip_serializing_if = "is_zero_u32")]
    pub order: u32,

    #[prost(uint64, tag = "2")]
    #[serde(default, skip_serializing_if = "is_zero_u64")]
    pub instances: u64,

    #[prost(uint64, tag = "3")]
    #[serde(default, skip_serializing_if = "is_zero_u64")]
    pub size: u64,

    #[prost(string, tag = "4")]
    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub type_name: String,
}

/// Heap snapshot variant
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeapData {
    #[prost(btree_map = "string, string", tag = "1")]
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, String>,

    #[prost(message, repeated, tag = "2")]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entries: Vec<HeapEntry>,
}

/// Rolling platform statistics for one sampling window
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowStatistics {
    /// Window length in minutes
    #[prost(uint32, tag = "1")]
    #[serde(default, skip_serializing_if = "is_zero_u32")]
    pub window: u32,

    #[prost(double, tag = "2")]
    #[serde(default, skip_serializing_if = "is_zero_f64")]
    pub cpu_usage: f64,

    #[prost(double, tag = "3")]
    #[serde(default, skip_serializing_if = "is_zero_f64")]
    pub memory_usage: f64,

    #[prost(double, tag = "4")]
    #[serde(default, skip_serializing_if = "is_zero_f64")]
    pub tps: f64,
}

/// Health snapshot variant
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthData {
    #[prost(btree_map = "string, string", tag = "1")]
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, String>,

    #[prost(message, repeated, tag = "2")]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub windows: Vec<WindowStatistics>,
}

fn is_zero_u64(n: &u64) -> bool {
    *n == 0
}

fn is_zero_u32(n: &u32) -> bool {
    *n == 0
}

fn is_zero_f64(n: &f64) -> bool {
    *n == 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use prost::Message;

    #[test]
    fn test_node_roundtrip() {
        let node = CallTreeNode {
            class_name: "com.example.Server".to_string(),
            method_name: "tick".to_string(),
            description: "()V".to_string(),
            time: 120,
            children: vec![CallTreeNode {
                method_name: "flush".to_string(),
                time: 20,
                ..Default::default()
            }],
        };

        let bytes = node.encode_to_vec();
        let decoded = CallTreeNode::decode(bytes.as_slice()).unwrap();
        assert_eq!(decoded, node);
    }

    #[test]
    fn test_json_omits_defaults() {
        let node = CallTreeNode {
            method_name: "run".to_string(),
            ..Default::default()
        };

        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json, serde_json::json!({ "methodName": "run" }));
    }

    #[test]
    fn test_json_field_names_are_camel_case() {
        let entry = HeapEntry {
            order: 1,
            instances: 5,
            size: 320,
            type_name: "byte[]".to_string(),
        };

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["type"], "byte[]");
        assert_eq!(json["instances"], 5);
    }
}
