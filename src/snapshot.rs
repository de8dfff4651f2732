// Cluster Netmap - Snapshot
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! Inventory snapshots and analysis reports.
//!
//! A snapshot bundles the six inventory collections the analysis consumes.
//! It either comes from the cluster API or from a captured JSON file for
//! offline runs; every derivation pass recomputes matrix and graph from the
//! snapshot in full.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{
    Alias, ClusterFirewallOptions, FirewallRule, SecurityGroup, VmSummary, Zone,
};
use crate::reachability::{MatrixExport, ReachabilityMatrix};
use crate::topology::{build_graph, FilterOptions, TopologyGraph};

/// All inventory the analysis runs on, as one document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClusterSnapshot {
    #[serde(default)]
    pub zones: Vec<Zone>,
    #[serde(default)]
    pub aliases: Vec<Alias>,
    /// Cluster-wide firewall rules.
    #[serde(default)]
    pub rules: Vec<FirewallRule>,
    #[serde(default)]
    pub groups: Vec<SecurityGroup>,
    #[serde(default)]
    pub firewall: ClusterFirewallOptions,
    #[serde(default)]
    pub vms: Vec<VmSummary>,
}

/// The derived output handed to downstream consumers.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub generated_at: DateTime<Utc>,
    pub matrix: MatrixExport,
    pub graph: TopologyGraph,
}

impl ClusterSnapshot {
    /// Load a captured snapshot from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read snapshot {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse snapshot {}", path.display()))
    }

    /// Derive the reachability matrix and topology graph.
    pub fn analyze(&self, filter: &FilterOptions) -> AnalysisReport {
        let matrix =
            ReachabilityMatrix::build(&self.zones, &self.rules, &self.groups, &self.aliases);
        let graph = build_graph(
            &self.zones,
            &self.vms,
            &self.firewall,
            self.rules.len(),
            &matrix,
            filter,
        );

        AnalysisReport {
            generated_at: Utc::now(),
            matrix: matrix.export(),
            graph,
        }
    }
}
