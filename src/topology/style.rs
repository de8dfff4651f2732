// Cluster Netmap - Topology Style
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! Static styling tables for the topology graph.

/// Zone names containing any of these (case-insensitive) are treated as
/// cluster infrastructure rather than workload segments.
pub const INFRA_ZONE_KEYWORDS: &[&str] = &[
    "ceph",
    "storage",
    "replication",
    "backup",
    "corosync",
    "cluster",
    "migration",
    "iscsi",
    "nfs",
];

/// Zone node colors, assigned by input index.
pub const ZONE_PALETTE: &[&str] = &[
    "#3584e4", // blue
    "#33d17a", // green
    "#f6d32d", // yellow
    "#ff7800", // orange
    "#9141ac", // purple
    "#986a44", // brown
    "#62a0ea", // light blue
    "#57e389", // light green
];

/// Edge color for an allowed pair.
pub const EDGE_ALLOWED: &str = "#33d17a";

/// Edge color for a partially allowed pair.
pub const EDGE_PARTIAL: &str = "#f6d32d";

/// Edge color for the static hierarchy links.
pub const EDGE_STATIC: &str = "#9a9996";

/// Deterministic color for a zone by its position in the input order.
pub fn zone_color(index: usize) -> &'static str {
    ZONE_PALETTE[index % ZONE_PALETTE.len()]
}

/// Whether a zone name matches the infrastructure keyword set.
pub fn is_infrastructure(name: &str, keywords: &[&str]) -> bool {
    let lower = name.to_lowercase();
    keywords.iter().any(|k| lower.contains(k))
}
