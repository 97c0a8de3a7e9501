// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Graph-level schema catalog and staged change set

use std::collections::HashMap;
use std::sync::Arc;

use crate::connection::snapshot::{EdgeTypeRecord, SchemaSnapshot};
use crate::connection::GraphConnection;
use crate::ddl;
use crate::schema::edge::{EdgeEndpoint, EdgeType, ReverseEdge};
use crate::schema::error::{SchemaError, SchemaResult};
use crate::schema::ledger::EditLedger;
use crate::schema::vertex::VertexType;
use crate::types::AttributeType;

/// Endpoint name the server uses for edges declared over all vertex types.
const WILDCARD_ENDPOINT: &str = "*";

/// Client-side model of one named graph's schema.
///
/// The catalog maps mirror the server's last fetched snapshot. Whole-type
/// additions and drops are staged here; attribute-level edits are staged on
/// the individual [`VertexType`] and [`EdgeType`] values reached through
/// [`SchemaGraph::vertex_type_mut`] and [`SchemaGraph::edge_type_mut`]. All
/// staged edits stay local until a commit submits them as one schema-change
/// job.
pub struct SchemaGraph {
    pub(crate) name: String,
    pub(crate) vertex_types: HashMap<String, VertexType>,
    pub(crate) edge_types: HashMap<String, EdgeType>,
    pub(crate) vertex_edits: EditLedger,
    pub(crate) edge_edits: EditLedger,
    pub(crate) connection: Option<Arc<dyn GraphConnection>>,
}

impl SchemaGraph {
    /// Create an empty schema model for the named graph.
    ///
    /// The graph does not need to exist on any server; committing through a
    /// connection creates it on demand.
    pub fn new(name: impl Into<String>) -> Self {
        SchemaGraph {
            name: name.into(),
            vertex_types: HashMap::new(),
            edge_types: HashMap::new(),
            vertex_edits: EditLedger::new(),
            edge_edits: EditLedger::new(),
            connection: None,
        }
    }

    /// Build a schema model from a live connection's current snapshot.
    pub fn from_connection(connection: Arc<dyn GraphConnection>) -> SchemaResult<Self> {
        let snapshot = connection.get_schema(true)?;
        let mut graph = SchemaGraph::new(&snapshot.graph_name);
        graph.load_snapshot(&snapshot)?;
        graph.connection = Some(connection);
        Ok(graph)
    }

    /// Replace the catalog with the contents of a server snapshot.
    ///
    /// Vertex types load first so that edge endpoints can be checked against
    /// them; an endpoint naming an unknown vertex type fails the whole load.
    pub(crate) fn load_snapshot(&mut self, snapshot: &SchemaSnapshot) -> SchemaResult<()> {
        self.vertex_types.clear();
        self.edge_types.clear();

        for record in &snapshot.vertex_types {
            let mut vertex = VertexType::new(&record.name);
            for attribute in &record.attributes {
                vertex = vertex.with_attribute(
                    &attribute.name,
                    AttributeType::from_descriptor(&attribute.attribute_type)?,
                );
            }
            let id_type = AttributeType::from_descriptor(&record.primary_id.attribute_type)?;
            vertex = vertex
                .with_attribute(&record.primary_id.name, id_type.clone())
                .with_primary_id(&record.primary_id.name, id_type, record.primary_id.as_attribute);
            self.vertex_types.insert(record.name.clone(), vertex);
        }

        for record in &snapshot.edge_types {
            let from_names = resolve_from_names(record);
            let to_names = resolve_to_names(record);
            for endpoint in from_names.iter().chain(to_names.iter()) {
                if !self.vertex_types.contains_key(endpoint) {
                    return Err(SchemaError::MissingEndpoint {
                        type_name: record.name.clone(),
                        reason: format!("endpoint references unknown vertex type {}", endpoint),
                    });
                }
            }

            let mut edge = EdgeType::new(&record.name).directed(record.is_directed);
            for attribute in &record.attributes {
                edge = edge.with_attribute(
                    &attribute.name,
                    AttributeType::from_descriptor(&attribute.attribute_type)?,
                );
            }
            if let Some(reverse) = record.config.get("REVERSE_EDGE").and_then(|v| v.as_str()) {
                edge = edge.with_reverse_edge(ReverseEdge::Named(reverse.to_string()));
            }
            edge = edge.with_endpoints(
                endpoint_from_names(from_names.clone()),
                endpoint_from_names(to_names.clone()),
            );

            for from_name in &from_names {
                if let Some(vertex) = self.vertex_types.get_mut(from_name) {
                    vertex.record_outgoing_edge(&record.name);
                }
            }
            for to_name in &to_names {
                if let Some(vertex) = self.vertex_types.get_mut(to_name) {
                    vertex.record_incoming_edge(&record.name);
                }
            }
            self.edge_types.insert(record.name.clone(), edge);
        }

        log::debug!(
            "Loaded {} vertex types and {} edge types for graph {}",
            self.vertex_types.len(),
            self.edge_types.len(),
            self.name
        );
        Ok(())
    }

    /// Stage a new vertex type with outdegree statistics enabled.
    pub fn add_vertex_type(&mut self, vertex: &VertexType) -> SchemaResult<()> {
        self.add_vertex_type_with_stats(vertex, true)
    }

    /// Stage a new vertex type, optionally collecting per-edge-type
    /// outdegree statistics on the server.
    pub fn add_vertex_type_with_stats(
        &mut self,
        vertex: &VertexType,
        outdegree_stats: bool,
    ) -> SchemaResult<()> {
        if self.vertex_types.contains_key(vertex.name()) {
            return Err(SchemaError::TypeAlreadyExists(vertex.name().to_string()));
        }
        let statement = ddl::add_vertex_statement(vertex, outdegree_stats)?;
        if self.vertex_edits.stage_addition(vertex.name(), statement).is_some() {
            log::warn!(
                "Vertex type {} is already staged for addition; the new definition replaces it",
                vertex.name()
            );
        }
        Ok(())
    }

    /// Stage a new edge type.
    pub fn add_edge_type(&mut self, edge: &EdgeType) -> SchemaResult<()> {
        if self.edge_types.contains_key(edge.name()) {
            return Err(SchemaError::TypeAlreadyExists(edge.name().to_string()));
        }
        let statement = ddl::add_edge_statement(edge)?;
        if self.edge_edits.stage_addition(edge.name(), statement).is_some() {
            log::warn!(
                "Edge type {} is already staged for addition; the new definition replaces it",
                edge.name()
            );
        }
        Ok(())
    }

    /// Stage the removal of a vertex type.
    pub fn remove_vertex_type(&mut self, vertex: &VertexType) {
        let statement = ddl::drop_vertex_statement(vertex.name());
        if self.vertex_edits.stage_deletion(vertex.name(), statement).is_some() {
            log::warn!("Vertex type {} is already staged for removal", vertex.name());
        }
    }

    /// Stage the removal of an edge type.
    pub fn remove_edge_type(&mut self, edge: &EdgeType) {
        let statement = ddl::drop_edge_statement(edge.name());
        if self.edge_edits.stage_deletion(edge.name(), statement).is_some() {
            log::warn!("Edge type {} is already staged for removal", edge.name());
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn vertex_types(&self) -> &HashMap<String, VertexType> {
        &self.vertex_types
    }

    pub fn edge_types(&self) -> &HashMap<String, EdgeType> {
        &self.edge_types
    }

    pub fn vertex_type(&self, name: &str) -> Option<&VertexType> {
        self.vertex_types.get(name)
    }

    /// Mutable access to a cataloged vertex type, for staging attribute
    /// edits.
    pub fn vertex_type_mut(&mut self, name: &str) -> Option<&mut VertexType> {
        self.vertex_types.get_mut(name)
    }

    pub fn edge_type(&self, name: &str) -> Option<&EdgeType> {
        self.edge_types.get(name)
    }

    /// Mutable access to a cataloged edge type, for staging attribute edits.
    pub fn edge_type_mut(&mut self, name: &str) -> Option<&mut EdgeType> {
        self.edge_types.get_mut(name)
    }

    pub fn staged_vertex_edits(&self) -> &EditLedger {
        &self.vertex_edits
    }

    pub fn staged_edge_edits(&self) -> &EditLedger {
        &self.edge_edits
    }
}

fn resolve_from_names(record: &EdgeTypeRecord) -> Vec<String> {
    if record.from_vertex_type_name == WILDCARD_ENDPOINT {
        record.edge_pairs.iter().map(|pair| pair.from.clone()).collect()
    } else {
        vec![record.from_vertex_type_name.clone()]
    }
}

fn resolve_to_names(record: &EdgeTypeRecord) -> Vec<String> {
    if record.to_vertex_type_name == WILDCARD_ENDPOINT {
        record.edge_pairs.iter().map(|pair| pair.to.clone()).collect()
    } else {
        vec![record.to_vertex_type_name.clone()]
    }
}

fn endpoint_from_names(mut names: Vec<String>) -> EdgeEndpoint {
    if names.len() == 1 {
        EdgeEndpoint::Single(names.remove(0))
    } else {
        EdgeEndpoint::Union(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn snapshot(payload: serde_json::Value) -> SchemaSnapshot {
        serde_json::from_value(payload).unwrap()
    }

    fn office_vertex(name: &str) -> serde_json::Value {
        json!({
            "Name": name,
            "Attributes": [],
            "PrimaryId": {
                "AttributeName": "id",
                "AttributeType": { "Name": "STRING" },
                "PrimaryIdAsAttribute": true
            }
        })
    }

    #[test]
    fn adding_a_cataloged_vertex_type_fails() {
        let mut graph = SchemaGraph::new("Office");
        graph
            .load_snapshot(&snapshot(json!({
                "GraphName": "Office",
                "VertexTypes": [office_vertex("Person")],
                "EdgeTypes": []
            })))
            .unwrap();

        let person = VertexType::new("Person").with_primary_id("id", AttributeType::String, true);
        assert!(matches!(
            graph.add_vertex_type(&person),
            Err(SchemaError::TypeAlreadyExists(name)) if name == "Person"
        ));
        assert!(graph.staged_vertex_edits().is_empty());
    }

    #[test]
    fn restaging_a_vertex_type_overwrites_the_statement() {
        let mut graph = SchemaGraph::new("Office");
        let v1 = VertexType::new("Company").with_primary_id("id", AttributeType::Uint, true);
        let v2 = VertexType::new("Company")
            .with_primary_id("id", AttributeType::Uint, true)
            .with_attribute("revenue", AttributeType::Float);

        graph.add_vertex_type(&v1).unwrap();
        graph.add_vertex_type(&v2).unwrap();

        assert_eq!(graph.staged_vertex_edits().additions().len(), 1);
        let staged = &graph.staged_vertex_edits().additions()["Company"];
        assert!(staged.contains("revenue FLOAT"));
    }

    #[test]
    fn invalid_vertex_definitions_stage_nothing() {
        let mut graph = SchemaGraph::new("Office");
        let no_id = VertexType::new("Company");
        assert!(matches!(
            graph.add_vertex_type(&no_id),
            Err(SchemaError::InvalidPrimaryId { .. })
        ));

        let bad_id = VertexType::new("Company").with_primary_id("id", AttributeType::Bool, true);
        assert!(matches!(
            graph.add_vertex_type(&bad_id),
            Err(SchemaError::InvalidPrimaryId { .. })
        ));
        assert!(graph.staged_vertex_edits().is_empty());
    }

    #[test]
    fn invalid_edge_definitions_stage_nothing() {
        let mut graph = SchemaGraph::new("Office");

        let undecided = EdgeType::new("Follows")
            .with_endpoints(EdgeEndpoint::single("Person"), EdgeEndpoint::single("Person"));
        assert!(matches!(
            graph.add_edge_type(&undecided),
            Err(SchemaError::InvalidEdgeDefinition { .. })
        ));

        let endpointless = EdgeType::new("Follows").directed(false);
        assert!(matches!(
            graph.add_edge_type(&endpointless),
            Err(SchemaError::MissingEndpoint { .. })
        ));

        let lopsided = EdgeType::new("Linked").directed(false).with_endpoints(
            EdgeEndpoint::union(["A", "B"]),
            EdgeEndpoint::union(["C"]),
        );
        assert!(matches!(
            graph.add_edge_type(&lopsided),
            Err(SchemaError::EndpointLengthMismatch { .. })
        ));

        let empty_union = EdgeType::new("Tagged")
            .directed(false)
            .with_endpoints(EdgeEndpoint::union(Vec::<String>::new()), EdgeEndpoint::single("Person"))
            .with_attribute("note", AttributeType::String);
        assert!(matches!(
            graph.add_edge_type(&empty_union),
            Err(SchemaError::MissingEndpoint { .. })
        ));

        assert!(graph.staged_edge_edits().is_empty());
    }

    #[test]
    fn removals_stage_drop_statements() {
        let mut graph = SchemaGraph::new("Office");
        let person = VertexType::new("Person").with_primary_id("id", AttributeType::String, true);
        let follows = EdgeType::new("Follows").directed(false).with_endpoints(
            EdgeEndpoint::single("Person"),
            EdgeEndpoint::single("Person"),
        );

        graph.remove_vertex_type(&person);
        graph.remove_edge_type(&follows);

        assert_eq!(
            graph.staged_vertex_edits().deletions()["Person"],
            "DROP VERTEX Person;"
        );
        assert_eq!(
            graph.staged_edge_edits().deletions()["Follows"],
            "DROP EDGE Follows;"
        );
    }

    #[test]
    fn wildcard_endpoints_expand_through_edge_pairs() {
        let mut graph = SchemaGraph::new("Office");
        graph
            .load_snapshot(&snapshot(json!({
                "GraphName": "Office",
                "VertexTypes": [office_vertex("Person"), office_vertex("Company")],
                "EdgeTypes": [{
                    "Name": "Mentions",
                    "IsDirected": false,
                    "FromVertexTypeName": "*",
                    "ToVertexTypeName": "*",
                    "EdgePairs": [
                        { "From": "Person", "To": "Person" },
                        { "From": "Person", "To": "Company" }
                    ],
                    "Attributes": [],
                    "Config": {}
                }]
            })))
            .unwrap();

        let mentions = graph.edge_type("Mentions").unwrap();
        assert_eq!(
            mentions.from_endpoint().unwrap().vertex_names(),
            vec!["Person", "Person"]
        );
        assert_eq!(
            mentions.to_endpoint().unwrap().vertex_names(),
            vec!["Person", "Company"]
        );

        let person = graph.vertex_type("Person").unwrap();
        assert!(person.outgoing_edge_types().contains("Mentions"));
        assert!(person.incoming_edge_types().contains("Mentions"));
        let company = graph.vertex_type("Company").unwrap();
        assert!(!company.outgoing_edge_types().contains("Mentions"));
        assert!(company.incoming_edge_types().contains("Mentions"));
    }

    #[test]
    fn unknown_edge_endpoints_fail_the_load() {
        let mut graph = SchemaGraph::new("Office");
        let result = graph.load_snapshot(&snapshot(json!({
            "GraphName": "Office",
            "VertexTypes": [office_vertex("Person")],
            "EdgeTypes": [{
                "Name": "WorksAt",
                "IsDirected": false,
                "FromVertexTypeName": "Person",
                "ToVertexTypeName": "Company",
                "EdgePairs": [],
                "Attributes": [],
                "Config": {}
            }]
        })));
        assert!(matches!(
            result,
            Err(SchemaError::MissingEndpoint { type_name, .. }) if type_name == "WorksAt"
        ));
    }
}
