// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Commit coordination for staged schema edits
//!
//! A commit batches every staged edit into one named schema-change job,
//! submits it through a [`GraphConnection`], and interprets the raw server
//! text: the response protocol is substring-based, so the sentinels here
//! must track the server's wording exactly.

use std::sync::Arc;

use thiserror::Error;

use crate::connection::{ConnectionError, GraphConnection};
use crate::ddl;
use crate::schema::{EditLedger, SchemaError, SchemaGraph};

/// Server response fragment on a `USE GRAPH` probe for a missing graph.
const GRAPH_MISSING_SENTINEL: &str = "does not exist.";

/// Server response fragment confirming the schema version advanced.
const COMMIT_SUCCESS_SENTINEL: &str = "updated to new version";

/// Failures while submitting staged edits to the server.
#[derive(Error, Debug)]
pub enum CommitError {
    /// Neither a bound connection nor an explicit one was available.
    #[error("No connection is bound to this schema graph and none was supplied")]
    NoConnection,

    /// The server ran the job but did not confirm a schema version update.
    /// Carries the verbatim server response.
    #[error("Schema change failed with message:\n{0}")]
    SchemaChangeFailed(String),

    #[error(transparent)]
    Connection(#[from] ConnectionError),

    #[error(transparent)]
    Schema(#[from] SchemaError),
}

pub type CommitResult<T> = Result<T, CommitError>;

impl SchemaGraph {
    /// Submit all staged edits through the bound connection.
    ///
    /// Fails with [`CommitError::NoConnection`] when the graph was built
    /// without one; see [`SchemaGraph::commit_with`] for supplying a
    /// connection explicitly.
    pub fn commit(&mut self) -> CommitResult<()> {
        let connection = self.connection.clone().ok_or(CommitError::NoConnection)?;
        self.submit_changes(&connection)
    }

    /// Submit all staged edits through the given connection, binding it to
    /// this graph on success.
    pub fn commit_with(&mut self, connection: Arc<dyn GraphConnection>) -> CommitResult<()> {
        self.submit_changes(&connection)
    }

    /// Render the change script the next commit would submit.
    ///
    /// Read-only: ledgers are not consumed, so this is safe to call for
    /// logging or review before committing.
    pub fn pending_script(&self) -> String {
        let attribute_edits = self.merged_attribute_edits();
        let job = ddl::job_name(&self.vertex_edits, &self.edge_edits, &attribute_edits);
        ddl::schema_change_script(
            &self.name,
            &job,
            &self.vertex_edits,
            &self.edge_edits,
            &attribute_edits,
        )
    }

    /// Whether any type-level or attribute-level edit is currently staged.
    pub fn has_pending_edits(&self) -> bool {
        !self.vertex_edits.is_empty()
            || !self.edge_edits.is_empty()
            || self.vertex_types.values().any(|v| !v.pending_edits().is_empty())
            || self.edge_types.values().any(|e| !e.pending_edits().is_empty())
    }

    /// Collect every entity's attribute ledger into one graph-wide ledger.
    ///
    /// Entries are keyed `TypeName.attribute` so edits to same-named
    /// attributes on different types never collide. The per-entity ledgers
    /// are left untouched; they are cleared only after the server confirms
    /// the change.
    pub(crate) fn merged_attribute_edits(&self) -> EditLedger {
        let mut merged = EditLedger::new();
        for vertex in self.vertex_types.values() {
            for (attribute, statement) in vertex.pending_edits().additions() {
                merged.stage_addition(&format!("{}.{}", vertex.name(), attribute), statement.clone());
            }
            for (attribute, statement) in vertex.pending_edits().deletions() {
                merged.stage_deletion(&format!("{}.{}", vertex.name(), attribute), statement.clone());
            }
        }
        for edge in self.edge_types.values() {
            for (attribute, statement) in edge.pending_edits().additions() {
                merged.stage_addition(&format!("{}.{}", edge.name(), attribute), statement.clone());
            }
            for (attribute, statement) in edge.pending_edits().deletions() {
                merged.stage_deletion(&format!("{}.{}", edge.name(), attribute), statement.clone());
            }
        }
        merged
    }

    fn submit_changes(&mut self, connection: &Arc<dyn GraphConnection>) -> CommitResult<()> {
        let probe = connection.run_statement(&format!("USE GRAPH {}", self.name))?;
        if probe.contains(GRAPH_MISSING_SENTINEL) {
            log::info!("Graph {} does not exist on the server; creating it", self.name);
            connection.run_statement(&format!("CREATE GRAPH {}()", self.name))?;
        }

        let attribute_edits = self.merged_attribute_edits();
        let job = ddl::job_name(&self.vertex_edits, &self.edge_edits, &attribute_edits);
        let script = ddl::schema_change_script(
            &self.name,
            &job,
            &self.vertex_edits,
            &self.edge_edits,
            &attribute_edits,
        );

        log::debug!("Submitting schema change job {} for graph {}", job, self.name);
        let response = connection.run_statement(&script)?;
        if !response.contains(COMMIT_SUCCESS_SENTINEL) {
            return Err(CommitError::SchemaChangeFailed(response));
        }
        log::info!("Schema change job {} applied to graph {}", job, self.name);

        // The catalog rebuild below replaces every entity wholesale, which
        // also discards the per-entity attribute ledgers.
        self.vertex_edits.clear();
        self.edge_edits.clear();
        let snapshot = connection.get_schema(true)?;
        self.load_snapshot(&snapshot)?;
        self.connection = Some(Arc::clone(connection));
        Ok(())
    }
}
