// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Vertex type definitions and attribute staging

use std::collections::BTreeSet;
use std::fmt;

use crate::ddl::{self, EntityKind};
use crate::schema::attribute::{AttributeDescriptor, PrimaryId};
use crate::schema::error::EntityEditError;
use crate::schema::ledger::EditLedger;
use crate::types::{AttributeType, Value};

/// A vertex type in the graph schema.
///
/// Catalog instances are built from server snapshots; new types are built
/// with [`VertexType::new`] and the `with_*` builders before registration.
/// Incoming and outgoing edge-type references are held by name and
/// populated only during catalog builds.
#[derive(Debug, Clone)]
pub struct VertexType {
    name: String,
    attributes: Vec<AttributeDescriptor>,
    primary_id: Option<PrimaryId>,
    outgoing_edge_types: BTreeSet<String>,
    incoming_edge_types: BTreeSet<String>,
    edits: EditLedger,
}

impl VertexType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            primary_id: None,
            outgoing_edge_types: BTreeSet::new(),
            incoming_edge_types: BTreeSet::new(),
            edits: EditLedger::new(),
        }
    }

    /// Define the primary id. `as_attribute` controls whether the id is
    /// also readable as a regular attribute.
    pub fn with_primary_id(
        mut self,
        name: impl Into<String>,
        id_type: AttributeType,
        as_attribute: bool,
    ) -> Self {
        self.primary_id = Some(PrimaryId {
            name: name.into(),
            id_type,
            as_attribute,
        });
        self
    }

    pub fn with_attribute(mut self, name: impl Into<String>, attribute_type: AttributeType) -> Self {
        self.attributes.push(AttributeDescriptor::new(name, attribute_type));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn primary_id(&self) -> Option<&PrimaryId> {
        self.primary_id.as_ref()
    }

    pub fn attributes(&self) -> &[AttributeDescriptor] {
        &self.attributes
    }

    /// Look up an attribute by name.
    pub fn attribute(&self, name: &str) -> Option<&AttributeDescriptor> {
        self.attributes.iter().find(|attr| attr.name == name)
    }

    /// Edge types arriving at this vertex type, by name.
    pub fn incoming_edge_types(&self) -> &BTreeSet<String> {
        &self.incoming_edge_types
    }

    /// Edge types leaving this vertex type, by name.
    pub fn outgoing_edge_types(&self) -> &BTreeSet<String> {
        &self.outgoing_edge_types
    }

    /// Attribute edits staged on this type, pending commit.
    pub fn pending_edits(&self) -> &EditLedger {
        &self.edits
    }

    /// Stage an attribute addition.
    ///
    /// Fails if the attribute already exists on the type. Staging over an
    /// attribute already pending addition overwrites the previous edit with
    /// a warning.
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
        let statement = ddl::add_attribute_statement(EntityKind::Vertex, &self.name, &descriptor)?;
        if self.edits.stage_addition(name, statement).is_some() {
            log::warn!(
                "Attribute addition {} already staged on vertex type {}, overwriting previous edit",
                name,
                self.name
            );
        }
        Ok(())
    }

    /// Stage an attribute removal.
    ///
    /// The primary id attribute is protected while it doubles as a regular
    /// attribute; otherwise the attribute must currently exist on the type.
    pub fn stage_remove_attribute(&mut self, name: &str) -> Result<(), EntityEditError> {
        if let Some(primary_id) = &self.primary_id {
            if primary_id.as_attribute && primary_id.name == name {
                return Err(EntityEditError::CannotRemovePrimaryId(name.to_string()));
            }
        }
        if self.attribute(name).is_none() {
            return Err(EntityEditError::UnknownAttribute {
                type_name: self.name.clone(),
                attribute: name.to_string(),
            });
        }
        let statement = ddl::drop_attribute_statement(EntityKind::Vertex, &self.name, name);
        if self.edits.stage_deletion(name, statement).is_some() {
            log::warn!(
                "Attribute removal {} already staged on vertex type {}, overwriting previous edit",
                name,
                self.name
            );
        }
        Ok(())
    }

    pub(crate) fn record_outgoing_edge(&mut self, edge_type: &str) {
        self.outgoing_edge_types.insert(edge_type.to_string());
    }

    pub(crate) fn record_incoming_edge(&mut self, edge_type: &str) {
        self.incoming_edge_types.insert(edge_type.to_string());
    }
}

/// Vertex types are identified by name within a graph.
impl PartialEq for VertexType {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl fmt::Display for VertexType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
