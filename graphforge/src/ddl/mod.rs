// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Schema-change DDL rendering
//!
//! Pure string builders that turn entity definitions and edit ledgers into
//! the server's change language: individual ADD/ALTER/DROP statements and
//! the composite schema-change job script that wraps them.

use crate::schema::{AttributeDescriptor, EdgeEndpoint, EdgeType, EditLedger, SchemaError, VertexType};
use crate::types::TypeError;

/// Prefix for content-hashed schema-change job names.
pub(crate) const JOB_NAME_PREFIX: &str = "forge_change_";

/// Which DDL keyword an attribute statement targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EntityKind {
    Vertex,
    Edge,
}

impl EntityKind {
    fn keyword(self) -> &'static str {
        match self {
            EntityKind::Vertex => "VERTEX",
            EntityKind::Edge => "EDGE",
        }
    }
}

pub(crate) fn add_attribute_statement(
    kind: EntityKind,
    type_name: &str,
    attribute: &AttributeDescriptor,
) -> Result<String, TypeError> {
    let mut statement = format!(
        "ALTER {} {} ADD ATTRIBUTE ({} {}",
        kind.keyword(),
        type_name,
        attribute.name,
        attribute.attribute_type.to_gsql()?
    );
    if let Some(default) = &attribute.default {
        statement.push_str(" DEFAULT ");
        statement.push_str(&default.to_gsql_literal());
    }
    statement.push_str(");");
    Ok(statement)
}

pub(crate) fn drop_attribute_statement(
    kind: EntityKind,
    type_name: &str,
    attribute_name: &str,
) -> String {
    format!(
        "ALTER {} {} DROP ATTRIBUTE ({});",
        kind.keyword(),
        type_name,
        attribute_name
    )
}

/// Render an ADD VERTEX statement.
///
/// The primary id leads the attribute list as `PRIMARY_ID name TYPE` and is
/// skipped in the trailing list when it doubles as a regular attribute.
pub(crate) fn add_vertex_statement(
    vertex: &VertexType,
    outdegree_stats: bool,
) -> Result<String, SchemaError> {
    let primary_id = vertex
        .primary_id()
        .ok_or_else(|| SchemaError::InvalidPrimaryId {
            type_name: vertex.name().to_string(),
            reason: "primary id is not defined".to_string(),
        })?;
    if !primary_id.id_type.is_valid_primary_id() {
        return Err(SchemaError::InvalidPrimaryId {
            type_name: vertex.name().to_string(),
            reason: format!("{} is not a supported primary id type", primary_id.id_type),
        });
    }

    let mut statement = format!(
        "ADD VERTEX {}(PRIMARY_ID {} {}",
        vertex.name(),
        primary_id.name,
        primary_id.id_type.to_gsql()?
    );
    for attribute in vertex.attributes() {
        if attribute.name == primary_id.name {
            continue;
        }
        statement.push_str(&format!(
            ", {} {}",
            attribute.name,
            attribute.attribute_type.to_gsql()?
        ));
    }
    statement.push(')');

    let mut with_clauses = Vec::new();
    if outdegree_stats {
        with_clauses.push("STATS=\"OUTDEGREE_BY_EDGETYPE\"".to_string());
    }
    if primary_id.as_attribute {
        with_clauses.push("PRIMARY_ID_AS_ATTRIBUTE=\"true\"".to_string());
    }
    if !with_clauses.is_empty() {
        statement.push_str(" WITH ");
        statement.push_str(&with_clauses.join(", "));
    }
    statement.push(';');
    Ok(statement)
}

/// Render an ADD DIRECTED/UNDIRECTED EDGE statement.
///
/// Endpoint clauses are pipe-separated `FROM x, TO y` pairs: a union on one
/// side fans out against the fixed other side, unions on both sides zip
/// positionally and must have equal lengths. An empty union counts as a
/// missing endpoint. Discriminator attributes render inside
/// `DISCRIMINATOR(...)` and are excluded from the trailing attribute list.
pub(crate) fn add_edge_statement(edge: &EdgeType) -> Result<String, SchemaError> {
    let is_directed = edge
        .is_directed()
        .ok_or_else(|| SchemaError::InvalidEdgeDefinition {
            type_name: edge.name().to_string(),
            reason: "directedness is not set".to_string(),
        })?;
    if is_directed && edge.reverse_edge().is_none() {
        return Err(SchemaError::InvalidEdgeDefinition {
            type_name: edge.name().to_string(),
            reason: "directed edge types require a reverse edge definition".to_string(),
        });
    }
    let from_endpoint = edge
        .from_endpoint()
        .ok_or_else(|| SchemaError::MissingEndpoint {
            type_name: edge.name().to_string(),
            reason: "source endpoint is not defined".to_string(),
        })?;
    let to_endpoint = edge
        .to_endpoint()
        .ok_or_else(|| SchemaError::MissingEndpoint {
            type_name: edge.name().to_string(),
            reason: "target endpoint is not defined".to_string(),
        })?;
    if matches!(from_endpoint, EdgeEndpoint::Union(names) if names.is_empty()) {
        return Err(SchemaError::MissingEndpoint {
            type_name: edge.name().to_string(),
            reason: "source endpoint union is empty".to_string(),
        });
    }
    if matches!(to_endpoint, EdgeEndpoint::Union(names) if names.is_empty()) {
        return Err(SchemaError::MissingEndpoint {
            type_name: edge.name().to_string(),
            reason: "target endpoint union is empty".to_string(),
        });
    }

    let endpoint_clauses = match (from_endpoint, to_endpoint) {
        (EdgeEndpoint::Single(from), EdgeEndpoint::Single(to)) => {
            vec![format!("FROM {}, TO {}", from, to)]
        }
        (EdgeEndpoint::Union(froms), EdgeEndpoint::Single(to)) => froms
            .iter()
            .map(|from| format!("FROM {}, TO {}", from, to))
            .collect(),
        (EdgeEndpoint::Single(from), EdgeEndpoint::Union(tos)) => tos
            .iter()
            .map(|to| format!("FROM {}, TO {}", from, to))
            .collect(),
        (EdgeEndpoint::Union(froms), EdgeEndpoint::Union(tos)) => {
            if froms.len() != tos.len() {
                return Err(SchemaError::EndpointLengthMismatch {
                    type_name: edge.name().to_string(),
                    from_len: froms.len(),
                    to_len: tos.len(),
                });
            }
            froms
                .iter()
                .zip(tos.iter())
                .map(|(from, to)| format!("FROM {}, TO {}", from, to))
                .collect()
        }
    };

    let mut statement = format!(
        "ADD {} EDGE {}({}",
        if is_directed { "DIRECTED" } else { "UNDIRECTED" },
        edge.name(),
        endpoint_clauses.join("|")
    );

    let discriminator_names = edge
        .discriminator()
        .map(|discriminator| discriminator.attribute_names())
        .unwrap_or_default();
    if let Some(discriminator) = edge.discriminator() {
        let mut rendered = Vec::new();
        for attr_name in discriminator.attribute_names() {
            let attribute =
                edge.attribute(attr_name)
                    .ok_or_else(|| SchemaError::InvalidEdgeDefinition {
                        type_name: edge.name().to_string(),
                        reason: format!("discriminator references unknown attribute {}", attr_name),
                    })?;
            rendered.push(format!(
                "{} {}",
                attribute.name,
                attribute.attribute_type.to_gsql()?
            ));
        }
        statement.push_str(&format!(", DISCRIMINATOR({})", rendered.join(", ")));
    }

    for attribute in edge.attributes() {
        if discriminator_names.contains(&attribute.name.as_str()) {
            continue;
        }
        statement.push_str(&format!(
            ", {} {}",
            attribute.name,
            attribute.attribute_type.to_gsql()?
        ));
    }
    statement.push(')');

    if let Some(reverse_edge) = edge.reverse_edge() {
        statement.push_str(&format!(
            " WITH REVERSE_EDGE=\"{}\"",
            reverse_edge.resolve(edge.name())
        ));
    }
    statement.push(';');
    Ok(statement)
}

pub(crate) fn drop_vertex_statement(type_name: &str) -> String {
    format!("DROP VERTEX {};", type_name)
}

pub(crate) fn drop_edge_statement(type_name: &str) -> String {
    format!("DROP EDGE {};", type_name)
}

/// Derive a deterministic job name from the staged edit set.
///
/// Ledger maps iterate in name order, so an identical edit set always
/// hashes to the same name and a retried commit reuses its previous job;
/// phase tags keep same-named entries in different ledgers distinct.
pub(crate) fn job_name(
    vertex_edits: &EditLedger,
    edge_edits: &EditLedger,
    attribute_edits: &EditLedger,
) -> String {
    let mut hasher = crc32fast::Hasher::new();
    let phases = [
        ("vertex.add", vertex_edits.additions()),
        ("vertex.drop", vertex_edits.deletions()),
        ("edge.add", edge_edits.additions()),
        ("edge.drop", edge_edits.deletions()),
        ("attribute.add", attribute_edits.additions()),
        ("attribute.drop", attribute_edits.deletions()),
    ];
    for (phase, entries) in phases {
        for (name, statement) in entries {
            hasher.update(phase.as_bytes());
            hasher.update(b"\0");
            hasher.update(name.as_bytes());
            hasher.update(b"\0");
            hasher.update(statement.as_bytes());
            hasher.update(b"\0");
        }
    }
    format!("{}{:08x}", JOB_NAME_PREFIX, hasher.finalize())
}

/// Assemble the composite schema-change job script.
///
/// Statement order is fixed: type additions before type deletions, vertices
/// before edges within each phase, whole-type edits before attribute-level
/// edits.
pub(crate) fn schema_change_script(
    graph_name: &str,
    job_name: &str,
    vertex_edits: &EditLedger,
    edge_edits: &EditLedger,
    attribute_edits: &EditLedger,
) -> String {
    let mut script = format!("USE GRAPH {}\n", graph_name);
    script.push_str(&format!("DROP JOB {}\n", job_name));
    script.push_str(&format!(
        "CREATE SCHEMA_CHANGE JOB {} FOR GRAPH {} {{\n",
        job_name, graph_name
    ));
    let phases = [
        vertex_edits.additions(),
        edge_edits.additions(),
        vertex_edits.deletions(),
        edge_edits.deletions(),
        attribute_edits.additions(),
        attribute_edits.deletions(),
    ];
    for phase in phases {
        for statement in phase.values() {
            script.push_str(statement);
            script.push('\n');
        }
    }
    script.push_str("}\n");
    script.push_str(&format!("RUN SCHEMA_CHANGE JOB {}", job_name));
    script
}
