// Cluster Netmap - Topology
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! Topology graph construction from zones, workloads, and the derived
//! reachability matrix. The output is plain node/edge data consumed by an
//! external layout and rendering layer.

mod graph;
pub mod style;

pub use graph::{
    build_graph, TopologyEdge, TopologyGraph, TopologyNode, ZoneVm, FIREWALL_NODE_ID,
    INGRESS_NODE_ID,
};

/// Display filters applied while building the graph.
#[derive(Debug, Clone, Copy)]
pub struct FilterOptions {
    /// Drop zones whose names look like cluster infrastructure
    /// (storage, replication, cluster-internal segments).
    pub hide_infra_zones: bool,
    /// Drop workloads that are not currently running.
    pub hide_stopped_vms: bool,
    /// Keyword set used for the infrastructure test; injectable so tests
    /// and callers are not tied to the built-in list.
    pub infra_keywords: &'static [&'static str],
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            hide_infra_zones: false,
            hide_stopped_vms: false,
            infra_keywords: style::INFRA_ZONE_KEYWORDS,
        }
    }
}
