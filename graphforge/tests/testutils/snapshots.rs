//! Canned schema description payloads in the server's JSON shape

use graphforge::SchemaSnapshot;
use serde_json::json;

/// A graph with no types, as the server describes a freshly created graph.
pub fn empty(graph_name: &str) -> SchemaSnapshot {
    SchemaSnapshot::from_json(json!({
        "GraphName": graph_name,
        "VertexTypes": [],
        "EdgeTypes": []
    }))
    .expect("canned payload must decode")
}

/// One vertex type `Person` and one directed edge type `Follows` from
/// Person to Person with an explicit reverse edge.
pub fn office() -> SchemaSnapshot {
    SchemaSnapshot::from_json(json!({
        "GraphName": "Office",
        "VertexTypes": [{
            "Name": "Person",
            "Attributes": [
                { "AttributeName": "name", "AttributeType": { "Name": "STRING" } }
            ],
            "PrimaryId": {
                "AttributeName": "id",
                "AttributeType": { "Name": "STRING" },
                "PrimaryIdAsAttribute": false
            }
        }],
        "EdgeTypes": [{
            "Name": "Follows",
            "IsDirected": true,
            "FromVertexTypeName": "Person",
            "ToVertexTypeName": "Person",
            "EdgePairs": [{ "From": "Person", "To": "Person" }],
            "Attributes": [],
            "Config": { "REVERSE_EDGE": "Followed" }
        }]
    }))
    .expect("canned payload must decode")
}

/// A freshly created office graph holding only the `Company` vertex type,
/// as the server would describe it after committing that one addition.
pub fn company_only() -> SchemaSnapshot {
    SchemaSnapshot::from_json(json!({
        "GraphName": "Office",
        "VertexTypes": [{
            "Name": "Company",
            "Attributes": [
                { "AttributeName": "revenue", "AttributeType": { "Name": "FLOAT" } }
            ],
            "PrimaryId": {
                "AttributeName": "id",
                "AttributeType": { "Name": "UINT" },
                "PrimaryIdAsAttribute": true
            }
        }],
        "EdgeTypes": []
    }))
    .expect("canned payload must decode")
}

/// The office graph after a committed change that added a `Company` vertex
/// type whose primary id doubles as a regular attribute.
pub fn office_with_company() -> SchemaSnapshot {
    SchemaSnapshot::from_json(json!({
        "GraphName": "Office",
        "VertexTypes": [
            {
                "Name": "Person",
                "Attributes": [
                    { "AttributeName": "name", "AttributeType": { "Name": "STRING" } }
                ],
                "PrimaryId": {
                    "AttributeName": "id",
                    "AttributeType": { "Name": "STRING" },
                    "PrimaryIdAsAttribute": false
                }
            },
            {
                "Name": "Company",
                "Attributes": [
                    { "AttributeName": "revenue", "AttributeType": { "Name": "FLOAT" } }
                ],
                "PrimaryId": {
                    "AttributeName": "id",
                    "AttributeType": { "Name": "UINT" },
                    "PrimaryIdAsAttribute": true
                }
            }
        ],
        "EdgeTypes": [{
            "Name": "Follows",
            "IsDirected": true,
            "FromVertexTypeName": "Person",
            "ToVertexTypeName": "Person",
            "EdgePairs": [{ "From": "Person", "To": "Person" }],
            "Attributes": [],
            "Config": { "REVERSE_EDGE": "Followed" }
        }]
    }))
    .expect("canned payload must decode")
}
