// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
// Schema module - typed catalog entities and staged schema edits
//
// Vertex and edge types mirror the server's catalog; edits staged on them
// (or on the graph itself) accumulate in ledgers until committed as one
// schema-change job.

pub mod attribute;
pub mod edge;
pub mod error;
pub mod graph;
pub mod ledger;
pub mod vertex;

pub use attribute::{AttributeDescriptor, PrimaryId};
pub use edge::{Discriminator, EdgeEndpoint, EdgeType, ReverseEdge};
pub use error::{EntityEditError, SchemaError, SchemaResult};
pub use graph::SchemaGraph;
pub use ledger::EditLedger;
pub use vertex::VertexType;
