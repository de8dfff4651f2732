// Cluster Netmap - Alias Model
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! Firewall alias model.

use serde::{Deserialize, Serialize};

/// A named indirection for a CIDR.
///
/// Rules may reference a zone through an alias name instead of the CIDR
/// itself. Alias names are matched case-insensitively.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Alias {
    pub name: String,
    pub cidr: String,
    #[serde(default)]
    pub comment: Option<String>,
}

impl Alias {
    /// Create a new alias.
    pub fn new(name: &str, cidr: &str) -> Self {
        Self {
            name: name.to_string(),
            cidr: cidr.to_string(),
            comment: None,
        }
    }
}
