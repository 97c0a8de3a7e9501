// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Staged schema edits awaiting commit

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Pending additions and deletions, keyed by the edited name with the
/// rendered DDL statement as the value.
///
/// BTreeMap keeps iteration order stable so job scripts and content hashes
/// do not depend on staging order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EditLedger {
    additions: BTreeMap<String, String>,
    deletions: BTreeMap<String, String>,
}

impl EditLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage an addition, returning the statement it replaced if one was
    /// already pending under the same name.
    pub(crate) fn stage_addition(&mut self, name: &str, statement: String) -> Option<String> {
        self.additions.insert(name.to_string(), statement)
    }

    /// Stage a deletion, returning the statement it replaced if one was
    /// already pending under the same name.
    pub(crate) fn stage_deletion(&mut self, name: &str, statement: String) -> Option<String> {
        self.deletions.insert(name.to_string(), statement)
    }

    pub fn additions(&self) -> &BTreeMap<String, String> {
        &self.additions
    }

    pub fn deletions(&self) -> &BTreeMap<String, String> {
        &self.deletions
    }

    pub fn is_empty(&self) -> bool {
        self.additions.is_empty() && self.deletions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.additions.len() + self.deletions.len()
    }

    pub(crate) fn clear(&mut self) {
        self.additions.clear();
        self.deletions.clear();
    }
}
