// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! GraphForge - Client-side schema modeling and migration for GSQL property graphs
//!
//! GraphForge mirrors a remote graph's vertex and edge type catalog as typed
//! entities, stages schema edits locally, and commits them as a single
//! atomic schema-change job.
//!
//! # Features
//!
//! - **Typed catalog**: vertex and edge types built from the server's schema
//!   description, including primary ids, collection attributes, endpoint
//!   unions, discriminators, and reverse edges
//! - **Staged edits**: additive and destructive changes accumulate in
//!   deterministic client-side ledgers until commit
//! - **DDL compiler**: staged edits compile into one schema-change job with
//!   a content-hashed name, so identical edit sets reuse the same job
//! - **Transport agnostic**: any session layer that implements
//!   [`GraphConnection`] can back a [`SchemaGraph`]
//!
//! # Usage
//!
//! ```rust
//! use graphforge::{AttributeType, SchemaGraph, VertexType};
//!
//! let mut graph = SchemaGraph::new("Office");
//!
//! let company = VertexType::new("Company")
//!     .with_primary_id("id", AttributeType::Uint, true)
//!     .with_attribute("revenue", AttributeType::Float);
//! graph.add_vertex_type(&company).unwrap();
//!
//! // The job script that commit() would submit.
//! println!("{}", graph.pending_script());
//! ```

// Public modules - the schema modeling API
pub mod commit;
pub mod connection;
pub mod schema;
pub mod types;

// Internal modules - only visible within graphforge crate
pub(crate) mod ddl;

// Re-export the public API
pub use commit::{CommitError, CommitResult};
pub use connection::{ConnectionError, GraphConnection, SchemaSnapshot};
pub use schema::{
    AttributeDescriptor, Discriminator, EdgeEndpoint, EdgeType, EditLedger, EntityEditError,
    PrimaryId, ReverseEdge, SchemaError, SchemaGraph, SchemaResult, VertexType,
};
pub use types::{AttributeType, TypeError, Value};

/// GraphForge version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// GraphForge crate name
pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
