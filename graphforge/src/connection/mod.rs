// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Server connection contract
//!
//! The schema model never talks to the network itself. Callers supply an
//! implementation of [`GraphConnection`] wrapping whatever session layer
//! they use, and the model drives it through two calls: fetching schema
//! snapshots and running change-language scripts.

pub mod snapshot;

use thiserror::Error;

pub use snapshot::SchemaSnapshot;

/// Failures surfaced by a connection implementation.
#[derive(Error, Debug)]
pub enum ConnectionError {
    /// The schema payload returned by the server could not be decoded.
    #[error("Schema snapshot payload could not be decoded: {0}")]
    MalformedSnapshot(#[from] serde_json::Error),

    /// The request itself failed (transport, auth, server fault).
    #[error("Graph request failed: {0}")]
    Request(String),
}

/// Session-layer collaborator that executes requests against the server.
///
/// Implementations are expected to be cheap to share behind an `Arc`; the
/// schema model holds one for the lifetime of a bound [`SchemaGraph`] and
/// invokes it synchronously during catalog construction and commit.
///
/// [`SchemaGraph`]: crate::schema::SchemaGraph
pub trait GraphConnection: Send + Sync {
    /// Fetch the current schema snapshot for the connection's graph.
    ///
    /// `force_refresh` bypasses any snapshot cache the implementation keeps.
    fn get_schema(&self, force_refresh: bool) -> Result<SchemaSnapshot, ConnectionError>;

    /// Run a change-language script and return the raw server response text.
    ///
    /// The response is inspected for sentinel substrings by the commit path,
    /// so implementations must return the server text verbatim.
    fn run_statement(&self, script: &str) -> Result<String, ConnectionError>;
}
