// Cluster Netmap - Workload Model
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! Workload (virtual machine) summary model.

use serde::{Deserialize, Serialize};

/// A workload as reported by the cluster inventory.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VmSummary {
    pub vmid: u32,
    pub name: String,
    /// Run state string from the API ("running", "stopped", ...).
    #[serde(default)]
    pub status: String,
    /// Primary network, if the workload declares a single one.
    #[serde(default)]
    pub network: Option<String>,
    /// Member networks, if the workload declares several.
    #[serde(default)]
    pub networks: Vec<String>,
    #[serde(default)]
    pub is_isolated: bool,
    #[serde(default)]
    pub firewall_enabled: bool,
    /// Security groups applied to this workload.
    #[serde(default)]
    pub applied_sgs: Vec<String>,
    #[serde(default)]
    pub node: Option<String>,
}

impl VmSummary {
    /// Create a new workload summary.
    pub fn new(vmid: u32, name: &str) -> Self {
        Self {
            vmid,
            name: name.to_string(),
            ..Default::default()
        }
    }

    /// Whether the workload is currently running.
    pub fn is_running(&self) -> bool {
        self.status == "running"
    }

    /// Whether the workload is a member of the named network.
    ///
    /// Matches the primary network or any entry of the member list, by
    /// exact name.
    pub fn is_member_of(&self, network: &str) -> bool {
        self.network.as_deref() == Some(network)
            || self.networks.iter().any(|n| n == network)
    }
}
