// Cluster Netmap - Topology Graph
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! Node/edge graph construction.

use serde::Serialize;
use tracing::debug;

use super::style;
use super::FilterOptions;
use crate::models::{ClusterFirewallOptions, VmSummary, Zone};
use crate::reachability::{ReachStatus, ReachabilityMatrix};

/// Node id of the singleton internet ingress node.
pub const INGRESS_NODE_ID: &str = "ingress";

/// Node id of the singleton cluster-firewall node.
pub const FIREWALL_NODE_ID: &str = "cluster-firewall";

/// Workload summary carried on a zone node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZoneVm {
    pub vmid: u32,
    pub name: String,
    pub status: String,
    pub is_isolated: bool,
    pub firewall_enabled: bool,
    pub security_groups: Vec<String>,
}

impl ZoneVm {
    fn from_vm(vm: &VmSummary) -> Self {
        Self {
            vmid: vm.vmid,
            name: vm.name.clone(),
            status: vm.status.clone(),
            is_isolated: vm.is_isolated,
            firewall_enabled: vm.firewall_enabled,
            security_groups: vm.applied_sgs.clone(),
        }
    }
}

/// A node of the topology graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TopologyNode {
    Ingress {
        id: String,
    },
    ClusterFirewall {
        id: String,
        enabled: bool,
        policy_in: String,
        policy_out: String,
        rule_count: usize,
    },
    Zone {
        id: String,
        name: String,
        cidr: String,
        color: String,
        vms: Vec<ZoneVm>,
    },
}

impl TopologyNode {
    /// The node's graph id.
    pub fn id(&self) -> &str {
        match self {
            Self::Ingress { id } => id,
            Self::ClusterFirewall { id, .. } => id,
            Self::Zone { id, .. } => id,
        }
    }
}

/// A directed link between two nodes, with display style hints.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopologyEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    /// Animated/highlighted style (active firewall link, allowed pair).
    pub animated: bool,
    /// Dashed style (partially allowed pair).
    pub dashed: bool,
    pub color: String,
    /// Protocol summary annotation, absent when there is nothing to show.
    pub label: Option<String>,
}

/// The topology graph handed to the rendering layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TopologyGraph {
    pub nodes: Vec<TopologyNode>,
    pub edges: Vec<TopologyEdge>,
}

fn zone_node_id(name: &str) -> String {
    format!("zone-{}", name)
}

/// Build the topology graph.
///
/// Emits the ingress and cluster-firewall singletons, one node per retained
/// zone with its member workloads, the static hierarchy edges, and one
/// zone-to-zone edge per unordered retained pair whose matrix cell is
/// allowed or partial. Blocked pairs and the reverse direction produce no
/// edge.
pub fn build_graph(
    zones: &[Zone],
    vms: &[VmSummary],
    options: &ClusterFirewallOptions,
    rule_count: usize,
    matrix: &ReachabilityMatrix,
    filter: &FilterOptions,
) -> TopologyGraph {
    let retained: Vec<&Zone> = zones
        .iter()
        .filter(|z| {
            !(filter.hide_infra_zones && style::is_infrastructure(&z.name, filter.infra_keywords))
        })
        .collect();
    debug!(
        zones = zones.len(),
        retained = retained.len(),
        "building topology graph"
    );

    let mut nodes = Vec::with_capacity(retained.len() + 2);
    let mut edges = Vec::new();

    nodes.push(TopologyNode::Ingress {
        id: INGRESS_NODE_ID.to_string(),
    });
    nodes.push(TopologyNode::ClusterFirewall {
        id: FIREWALL_NODE_ID.to_string(),
        enabled: options.enable,
        policy_in: options.policy_in.clone(),
        policy_out: options.policy_out.clone(),
        rule_count,
    });
    edges.push(TopologyEdge {
        id: "ingress-firewall".to_string(),
        source: INGRESS_NODE_ID.to_string(),
        target: FIREWALL_NODE_ID.to_string(),
        animated: options.enable,
        dashed: false,
        color: style::EDGE_STATIC.to_string(),
        label: None,
    });

    for (index, zone) in retained.iter().enumerate() {
        let members: Vec<ZoneVm> = vms
            .iter()
            .filter(|vm| vm.is_member_of(&zone.name))
            .filter(|vm| !filter.hide_stopped_vms || vm.is_running())
            .map(ZoneVm::from_vm)
            .collect();

        let id = zone_node_id(&zone.name);
        nodes.push(TopologyNode::Zone {
            id: id.clone(),
            name: zone.name.clone(),
            cidr: zone.cidr.clone(),
            color: style::zone_color(index).to_string(),
            vms: members,
        });
        edges.push(TopologyEdge {
            id: format!("firewall-{}", zone.name),
            source: FIREWALL_NODE_ID.to_string(),
            target: id,
            animated: false,
            dashed: false,
            color: style::EDGE_STATIC.to_string(),
            label: None,
        });
    }

    for i in 0..retained.len() {
        for j in (i + 1)..retained.len() {
            let from = &retained[i].name;
            let to = &retained[j].name;
            let cell = match matrix.cell(from, to) {
                Some(cell) => cell,
                None => continue,
            };

            let (animated, dashed, color) = match cell.status {
                ReachStatus::Allowed => (true, false, style::EDGE_ALLOWED),
                ReachStatus::Partial => (false, true, style::EDGE_PARTIAL),
                ReachStatus::Blocked | ReachStatus::SelfZone => continue,
            };
            debug!(from = %from, to = %to, status = cell.status.as_str(), "reachability edge");

            let label = if cell.protocol_summary.is_empty() || cell.protocol_summary == "None" {
                None
            } else {
                Some(cell.protocol_summary.clone())
            };

            edges.push(TopologyEdge {
                id: format!("reach-{}-{}", from, to),
                source: zone_node_id(from),
                target: zone_node_id(to),
                animated,
                dashed,
                color: color.to_string(),
                label,
            });
        }
    }

    TopologyGraph { nodes, edges }
}
