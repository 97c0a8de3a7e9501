// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Typed view of the server's schema description payload
//!
//! Field names mirror the JSON keys of the schema endpoint so the records
//! deserialize directly from the raw response.

use serde::{Deserialize, Serialize};

use crate::connection::ConnectionError;

/// One graph's full schema as described by the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaSnapshot {
    #[serde(rename = "GraphName")]
    pub graph_name: String,

    #[serde(rename = "VertexTypes", default)]
    pub vertex_types: Vec<VertexTypeRecord>,

    #[serde(rename = "EdgeTypes", default)]
    pub edge_types: Vec<EdgeTypeRecord>,
}

impl SchemaSnapshot {
    /// Decode a snapshot from the raw JSON document of the schema endpoint.
    pub fn from_json(payload: serde_json::Value) -> Result<Self, ConnectionError> {
        Ok(serde_json::from_value(payload)?)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VertexTypeRecord {
    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Attributes", default)]
    pub attributes: Vec<AttributeRecord>,

    #[serde(rename = "PrimaryId")]
    pub primary_id: PrimaryIdRecord,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeTypeRecord {
    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "IsDirected", default)]
    pub is_directed: bool,

    /// Declared source endpoint, or `"*"` when the edge is declared over an
    /// explicit pair list.
    #[serde(rename = "FromVertexTypeName")]
    pub from_vertex_type_name: String,

    #[serde(rename = "ToVertexTypeName")]
    pub to_vertex_type_name: String,

    #[serde(rename = "EdgePairs", default)]
    pub edge_pairs: Vec<EdgePairRecord>,

    #[serde(rename = "Attributes", default)]
    pub attributes: Vec<AttributeRecord>,

    /// Free-form edge configuration; `REVERSE_EDGE` carries the reverse edge
    /// name for directed types.
    #[serde(rename = "Config", default)]
    pub config: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgePairRecord {
    #[serde(rename = "From")]
    pub from: String,

    #[serde(rename = "To")]
    pub to: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttributeRecord {
    #[serde(rename = "AttributeName")]
    pub name: String,

    #[serde(rename = "AttributeType")]
    pub attribute_type: AttributeTypeRecord,
}

/// Structured type descriptor attached to every attribute record.
///
/// Scalars carry only `Name`; single-parameter collections add
/// `ValueTypeName`; maps add `KeyTypeName` as well.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttributeTypeRecord {
    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "KeyTypeName", default, skip_serializing_if = "Option::is_none")]
    pub key_type_name: Option<String>,

    #[serde(rename = "ValueTypeName", default, skip_serializing_if = "Option::is_none")]
    pub value_type_name: Option<String>,
}

impl AttributeTypeRecord {
    /// Collapse the structured descriptor into a single type token of the
    /// change-language grammar, e.g. `MAP<STRING,INT>`.
    pub fn token(&self) -> String {
        match (&self.key_type_name, &self.value_type_name) {
            (Some(key), Some(value)) => format!("{}<{},{}>", self.name, key, value),
            (None, Some(value)) => format!("{}<{}>", self.name, value),
            _ => self.name.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrimaryIdRecord {
    #[serde(rename = "AttributeName")]
    pub name: String,

    #[serde(rename = "AttributeType")]
    pub attribute_type: AttributeTypeRecord,

    #[serde(rename = "PrimaryIdAsAttribute", default)]
    pub as_attribute: bool,
}
