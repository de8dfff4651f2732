// Cluster Netmap - Zone Model
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! Network zone model.

use serde::{Deserialize, Serialize};

/// A named network segment declared on the cluster.
///
/// The zone name is the canonical identifier used throughout the
/// reachability analysis; the CIDR is compared by exact string equality
/// only (zones are first-class records, not computed subnets).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub name: String,
    pub cidr: String,
    #[serde(default)]
    pub gateway: Option<String>,
    #[serde(default)]
    pub has_gateway: bool,
    /// Whether a base security group is applied to members of this zone.
    #[serde(default)]
    pub has_base_sg: bool,
}

impl Zone {
    /// Create a new zone.
    pub fn new(name: &str, cidr: &str) -> Self {
        Self {
            name: name.to_string(),
            cidr: cidr.to_string(),
            ..Default::default()
        }
    }
}
