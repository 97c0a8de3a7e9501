// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Error types for catalog registration and staged entity edits

use thiserror::Error;

use crate::connection::ConnectionError;
use crate::types::TypeError;

/// Failures while staging attribute edits on a single vertex or edge type.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EntityEditError {
    #[error("Attribute {attribute} already exists on type {type_name}")]
    DuplicateAttribute {
        type_name: String,
        attribute: String,
    },

    #[error("Attribute {attribute} is not defined on type {type_name}")]
    UnknownAttribute {
        type_name: String,
        attribute: String,
    },

    #[error("Cannot remove primary id attribute {0}")]
    CannotRemovePrimaryId(String),

    #[error(transparent)]
    Type(#[from] TypeError),
}

/// Failures while registering whole types or rebuilding the catalog.
#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("Type {0} already exists in the graph")]
    TypeAlreadyExists(String),

    #[error("Invalid primary id for vertex type {type_name}: {reason}")]
    InvalidPrimaryId { type_name: String, reason: String },

    #[error("Invalid edge definition for {type_name}: {reason}")]
    InvalidEdgeDefinition { type_name: String, reason: String },

    #[error("Missing endpoint on edge type {type_name}: {reason}")]
    MissingEndpoint { type_name: String, reason: String },

    #[error(
        "Endpoint unions on edge type {type_name} differ in length: {from_len} source vs {to_len} target"
    )]
    EndpointLengthMismatch {
        type_name: String,
        from_len: usize,
        to_len: usize,
    },

    #[error(transparent)]
    Edit(#[from] EntityEditError),

    #[error(transparent)]
    Type(#[from] TypeError),

    #[error(transparent)]
    Connection(#[from] ConnectionError),
}

pub type SchemaResult<T> = Result<T, SchemaError>;
