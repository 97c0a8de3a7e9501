// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Attribute default values and their DDL literal forms

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Literal value usable as an attribute default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    String(String),
    Int(i64),
    Uint(u64),
    Double(f64),
    Bool(bool),
    Datetime(NaiveDateTime),
}

impl Value {
    /// Render the value as a DDL default literal.
    ///
    /// Strings and datetimes are single-quoted, numeric and boolean values
    /// are emitted bare.
    pub fn to_gsql_literal(&self) -> String {
        match self {
            Value::String(s) => format!("'{}'", s),
            Value::Int(i) => i.to_string(),
            Value::Uint(u) => u.to_string(),
            Value::Double(d) => d.to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Datetime(dt) => format!("'{}'", dt.format("%Y-%m-%d %H:%M:%S")),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_gsql_literal())
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Value::Uint(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Double(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(value: NaiveDateTime) -> Self {
        Value::Datetime(value)
    }
}
