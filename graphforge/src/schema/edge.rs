// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Edge type definitions, endpoints, and attribute staging

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ddl::{self, EntityKind};
use crate::schema::attribute::AttributeDescriptor;
use crate::schema::error::EntityEditError;
use crate::schema::ledger::EditLedger;
use crate::types::{AttributeType, Value};

/// Source or target of an edge type, referencing vertex types by name.
///
/// When both endpoints of an edge are unions they are zipped positionally,
/// pair by pair, and must have equal lengths. A union must name at least
/// one vertex type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EdgeEndpoint {
    Single(String),
    Union(Vec<String>),
}

impl EdgeEndpoint {
    pub fn single(name: impl Into<String>) -> Self {
        EdgeEndpoint::Single(name.into())
    }

    pub fn union<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        EdgeEndpoint::Union(names.into_iter().map(Into::into).collect())
    }

    /// The referenced vertex type names, in declaration order.
    pub fn vertex_names(&self) -> Vec<&str> {
        match self {
            EdgeEndpoint::Single(name) => vec![name.as_str()],
            EdgeEndpoint::Union(names) => names.iter().map(String::as_str).collect(),
        }
    }

    pub fn is_union(&self) -> bool {
        matches!(self, EdgeEndpoint::Union(_))
    }
}

/// Reverse edge maintained by the server for a directed edge type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReverseEdge {
    /// Name derived from the edge name as `reverse_<EdgeName>`.
    Auto,
    Named(String),
}

impl ReverseEdge {
    pub(crate) fn resolve(&self, edge_name: &str) -> String {
        match self {
            ReverseEdge::Auto => format!("reverse_{}", edge_name),
            ReverseEdge::Named(name) => name.clone(),
        }
    }
}

/// Edge attribute(s) distinguishing parallel edges between the same
/// endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Discriminator {
    Single(String),
    Compound(Vec<String>),
}

impl Discriminator {
    pub fn attribute_names(&self) -> Vec<&str> {
        match self {
            Discriminator::Single(name) => vec![name.as_str()],
            Discriminator::Compound(names) => names.iter().map(String::as_str).collect(),
        }
    }
}

/// An edge type in the graph schema.
///
/// Directedness must be set explicitly before the type can be registered;
/// directed edges additionally require a reverse edge definition.
#[derive(Debug, Clone)]
pub struct EdgeType {
    name: String,
    attributes: Vec<AttributeDescriptor>,
    is_directed: Option<bool>,
    reverse_edge: Option<ReverseEdge>,
    discriminator: Option<Discriminator>,
    from_endpoint: Option<EdgeEndpoint>,
    to_endpoint: Option<EdgeEndpoint>,
    edits: EditLedger,
}

impl EdgeType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            is_directed: None,
            reverse_edge: None,
            discriminator: None,
            from_endpoint: None,
            to_endpoint: None,
            edits: EditLedger::new(),
        }
    }

    pub fn directed(mut self, is_directed: bool) -> Self {
        self.is_directed = Some(is_directed);
        self
    }

    pub fn with_reverse_edge(mut self, reverse_edge: ReverseEdge) -> Self {
        self.reverse_edge = Some(reverse_edge);
        self
    }

    pub fn with_discriminator(mut self, discriminator: Discriminator) -> Self {
        self.discriminator = Some(discriminator);
        self
    }

    pub fn with_endpoints(mut self, from: EdgeEndpoint, to: EdgeEndpoint) -> Self {
        self.from_endpoint = Some(from);
        self.to_endpoint = Some(to);
        self
    }

    pub fn with_attribute(mut self, name: impl Into<String>, attribute_type: AttributeType) -> Self {
        self.attributes.push(AttributeDescriptor::new(name, attribute_type));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attributes(&self) -> &[AttributeDescriptor] {
        &self.attributes
    }

    /// Look up an attribute by name.
    pub fn attribute(&self, name: &str) -> Option<&AttributeDescriptor> {
        self.attributes.iter().find(|attr| attr.name == name)
    }

    /// `None` until directedness has been set explicitly.
    pub fn is_directed(&self) -> Option<bool> {
        self.is_directed
    }

    pub fn reverse_edge(&self) -> Option<&ReverseEdge> {
        self.reverse_edge.as_ref()
    }

    pub fn discriminator(&self) -> Option<&Discriminator> {
        self.discriminator.as_ref()
    }

    pub fn from_endpoint(&self) -> Option<&EdgeEndpoint> {
        self.from_endpoint.as_ref()
    }

    pub fn to_endpoint(&self) -> Option<&EdgeEndpoint> {
        self.to_endpoint.as_ref()
    }

    /// Attribute edits staged on this type, pending commit.
    pub fn pending_edits(&self) -> &EditLedger {
        &self.edits
    }

    /// Stage an attribute addition; see [`VertexType::stage_add_attribute`]
    /// for the overwrite semantics.
    ///
    /// [`VertexType::stage_add_attribute`]: crate::schema::VertexType::stage_add_attribute
    pub fn stage_add_attribute(
        &mut self,
        name: &str,
        attribute_type: AttributeType,
        default: Option<Value>,
    ) -> Result<(), EntityEditError> {
        if self.attribute(name).is_some() {
            return Err(EntityEditError::DuplicateAttribute {
                type_name: self.name.clone(),
                attribute: name.to_string(),
            });
        }
        let descriptor = AttributeDescriptor {
            name: name.to_string(),
            attribute_type,
            default,
        };
        let statement = ddl::add_attribute_statement(EntityKind::Edge, &self.name, &descriptor)?;
        if self.edits.stage_addition(name, statement).is_some() {
            log::warn!(
                "Attribute addition {} already staged on edge type {}, overwriting previous edit",
                name,
                self.name
            );
        }
        Ok(())
    }

    /// Stage an attribute removal. The attribute must currently exist on
    /// the type.
    pub fn stage_remove_attribute(&mut self, name: &str) -> Result<(), EntityEditError> {
        if self.attribute(name).is_none() {
            return Err(EntityEditError::UnknownAttribute {
                type_name: self.name.clone(),
                attribute: name.to_string(),
            });
        }
        let statement = ddl::drop_attribute_statement(EntityKind::Edge, &self.name, name);
        if self.edits.stage_deletion(name, statement).is_some() {
            log::warn!(
                "Attribute removal {} already staged on edge type {}, overwriting previous edit",
                name,
                self.name
            );
        }
        Ok(())
    }
}

/// Edge types are identified by name plus endpoint pair: the same name with
/// different endpoints describes a different edge type.
impl PartialEq for EdgeType {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.from_endpoint == other.from_endpoint
            && self.to_endpoint == other.to_endpoint
    }
}

impl fmt::Display for EdgeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
