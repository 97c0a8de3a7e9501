// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Attribute type system shared by vertex and edge definitions
//!
//! Maps between the server's composite type tokens (`STRING`, `LIST<INT>`,
//! `MAP<INT,STRING>`) and a typed representation, and renders the uppercase
//! DDL tokens used in schema-change statements.

mod token;
pub mod value;

pub use value::Value;

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::connection::snapshot::AttributeTypeRecord;

/// Semantic type of a vertex or edge attribute.
///
/// Collection element types are boxed so the enum stays one word wide;
/// `Udt` carries the server-declared name of a user-defined tuple type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttributeType {
    String,
    Int,
    Uint,
    Float,
    Double,
    Bool,
    Datetime,

    // Collection types
    List(Box<AttributeType>),
    Set(Box<AttributeType>),
    Map(Box<AttributeType>, Box<AttributeType>),

    // User-defined tuple types, valid only as collection elements
    Udt(String),
}

impl AttributeType {
    /// Parse a server type token such as `UINT` or `MAP<INT,STRING>`.
    ///
    /// Base type names match case-insensitively; an unknown bare identifier
    /// resolves to [`AttributeType::Udt`]. Collection tokens without their
    /// element parameters fail with [`TypeError::UnparametrizedCollection`].
    pub fn parse(token: &str) -> TypeResult<Self> {
        token::parse_token(token)
    }

    /// Decode the structured type descriptor from a schema snapshot.
    pub fn from_descriptor(descriptor: &AttributeTypeRecord) -> TypeResult<Self> {
        Self::parse(&descriptor.token())
    }

    /// Render the uppercase DDL type token, validating collection element
    /// kinds on the way out.
    ///
    /// A top-level `Udt` cannot be rendered: user-defined tuple types are
    /// only addressable as collection elements in the change language.
    pub fn to_gsql(&self) -> TypeResult<String> {
        match self {
            AttributeType::Udt(_) => Err(TypeError::UnsupportedType(self.to_string())),
            AttributeType::List(element) | AttributeType::Set(element) => {
                if !element.is_valid_collection_value() {
                    return Err(TypeError::InvalidCollectionElementType {
                        token: element.to_string(),
                        position: ElementPosition::Value,
                    });
                }
                Ok(self.to_string())
            }
            AttributeType::Map(key, value) => {
                if !key.is_valid_map_key() {
                    return Err(TypeError::InvalidCollectionElementType {
                        token: key.to_string(),
                        position: ElementPosition::Key,
                    });
                }
                if !value.is_valid_collection_value() {
                    return Err(TypeError::InvalidCollectionElementType {
                        token: value.to_string(),
                        position: ElementPosition::Value,
                    });
                }
                Ok(self.to_string())
            }
            _ => Ok(self.to_string()),
        }
    }

    /// Kinds the server accepts as a vertex primary id.
    pub fn is_valid_primary_id(&self) -> bool {
        matches!(
            self,
            AttributeType::String
                | AttributeType::Int
                | AttributeType::Uint
                | AttributeType::Datetime
        )
    }

    /// Kinds the server accepts as a map key.
    pub fn is_valid_map_key(&self) -> bool {
        matches!(
            self,
            AttributeType::Int | AttributeType::String | AttributeType::Datetime
        )
    }

    /// Kinds the server accepts as a list/set element or map value.
    pub fn is_valid_collection_value(&self) -> bool {
        matches!(
            self,
            AttributeType::Int
                | AttributeType::Double
                | AttributeType::Float
                | AttributeType::String
                | AttributeType::Datetime
                | AttributeType::Udt(_)
        )
    }
}

impl fmt::Display for AttributeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeType::String => write!(f, "STRING"),
            AttributeType::Int => write!(f, "INT"),
            AttributeType::Uint => write!(f, "UINT"),
            AttributeType::Float => write!(f, "FLOAT"),
            AttributeType::Double => write!(f, "DOUBLE"),
            AttributeType::Bool => write!(f, "BOOL"),
            AttributeType::Datetime => write!(f, "DATETIME"),
            AttributeType::List(element) => write!(f, "LIST<{}>", element),
            AttributeType::Set(element) => write!(f, "SET<{}>", element),
            AttributeType::Map(key, value) => write!(f, "MAP<{},{}>", key, value),
            AttributeType::Udt(name) => write!(f, "{}", name),
        }
    }
}

/// Where an element type appeared inside a collection token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementPosition {
    Key,
    Value,
}

impl fmt::Display for ElementPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementPosition::Key => write!(f, "key"),
            ElementPosition::Value => write!(f, "value"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypeError {
    #[error("{0} is not a valid attribute type")]
    UnsupportedType(String),

    #[error("Collection type {0} requires element type parameters")]
    UnparametrizedCollection(String),

    #[error("{token} is not a valid type for the {position} type in collections")]
    InvalidCollectionElementType {
        token: String,
        position: ElementPosition,
    },
}

pub type TypeResult<T> = Result<T, TypeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_tokens_round_trip() {
        for token in ["STRING", "INT", "UINT", "FLOAT", "DOUBLE", "BOOL", "DATETIME"] {
            let parsed = AttributeType::parse(token).unwrap();
            assert_eq!(parsed.to_gsql().unwrap(), token);
        }
    }

    #[test]
    fn collection_tokens_round_trip() {
        for token in [
            "LIST<INT>",
            "LIST<DOUBLE>",
            "SET<STRING>",
            "SET<DATETIME>",
            "MAP<INT,STRING>",
            "MAP<STRING,DATETIME>",
            "MAP<DATETIME,FLOAT>",
        ] {
            let parsed = AttributeType::parse(token).unwrap();
            assert_eq!(parsed.to_gsql().unwrap(), token);
        }
    }

    #[test]
    fn map_key_and_value_order_is_preserved() {
        let parsed = AttributeType::parse("MAP<INT,STRING>").unwrap();
        assert_eq!(
            parsed,
            AttributeType::Map(
                Box::new(AttributeType::Int),
                Box::new(AttributeType::String)
            )
        );
        let swapped = AttributeType::parse("MAP<STRING,INT>").unwrap();
        assert_ne!(parsed, swapped);
    }

    #[test]
    fn udt_elements_keep_their_declared_case() {
        let parsed = AttributeType::parse("LIST<MyTuple>").unwrap();
        assert_eq!(parsed, AttributeType::List(Box::new(AttributeType::Udt("MyTuple".to_string()))));
        assert_eq!(parsed.to_gsql().unwrap(), "LIST<MyTuple>");
    }

    #[test]
    fn top_level_udt_cannot_be_rendered() {
        let udt = AttributeType::Udt("MyTuple".to_string());
        assert_eq!(
            udt.to_gsql(),
            Err(TypeError::UnsupportedType("MyTuple".to_string()))
        );
    }

    #[test]
    fn invalid_collection_values_are_rejected() {
        let list_of_bool = AttributeType::List(Box::new(AttributeType::Bool));
        assert_eq!(
            list_of_bool.to_gsql(),
            Err(TypeError::InvalidCollectionElementType {
                token: "BOOL".to_string(),
                position: ElementPosition::Value,
            })
        );

        // UINT is a valid primary id kind but not a collection element kind.
        let set_of_uint = AttributeType::Set(Box::new(AttributeType::Uint));
        assert!(matches!(
            set_of_uint.to_gsql(),
            Err(TypeError::InvalidCollectionElementType { .. })
        ));
    }

    #[test]
    fn invalid_map_keys_are_rejected() {
        let keyed_by_double = AttributeType::Map(
            Box::new(AttributeType::Double),
            Box::new(AttributeType::String),
        );
        assert_eq!(
            keyed_by_double.to_gsql(),
            Err(TypeError::InvalidCollectionElementType {
                token: "DOUBLE".to_string(),
                position: ElementPosition::Key,
            })
        );
    }

    #[test]
    fn primary_id_kinds_match_server_rules() {
        assert!(AttributeType::String.is_valid_primary_id());
        assert!(AttributeType::Int.is_valid_primary_id());
        assert!(AttributeType::Uint.is_valid_primary_id());
        assert!(AttributeType::Datetime.is_valid_primary_id());
        assert!(!AttributeType::Float.is_valid_primary_id());
        assert!(!AttributeType::Bool.is_valid_primary_id());
        assert!(!AttributeType::List(Box::new(AttributeType::Int)).is_valid_primary_id());
    }
}
