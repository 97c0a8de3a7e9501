// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Attribute and primary-id descriptors

use serde::{Deserialize, Serialize};

use crate::types::{AttributeType, Value};

/// A named, typed attribute with an optional default literal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeDescriptor {
    pub name: String,
    pub attribute_type: AttributeType,
    pub default: Option<Value>,
}

impl AttributeDescriptor {
    pub fn new(name: impl Into<String>, attribute_type: AttributeType) -> Self {
        Self {
            name: name.into(),
            attribute_type,
            default: None,
        }
    }

    pub fn with_default(
        name: impl Into<String>,
        attribute_type: AttributeType,
        default: Value,
    ) -> Self {
        Self {
            name: name.into(),
            attribute_type,
            default: Some(default),
        }
    }
}

/// The unique identifying attribute of a vertex type.
///
/// `as_attribute` mirrors the server's PRIMARY_ID_AS_ATTRIBUTE flag: when
/// set, the id is also readable as a regular attribute and becomes
/// protected from removal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrimaryId {
    pub name: String,
    pub id_type: AttributeType,
    pub as_attribute: bool,
}
