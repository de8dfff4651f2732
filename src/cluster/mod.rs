// Cluster Netmap - Cluster API
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! REST client for the cluster inventory API.

mod client;

pub use client::ClusterClient;

/// API paths for the inventory collections.
pub mod paths {
    pub const ZONES: &str = "/api2/json/cluster/network/zones";
    pub const ALIASES: &str = "/api2/json/cluster/firewall/aliases";
    pub const RULES: &str = "/api2/json/cluster/firewall/rules";
    /// Group list; per-group rule bundles live under `groups/<name>`.
    pub const GROUPS: &str = "/api2/json/cluster/firewall/groups";
    pub const OPTIONS: &str = "/api2/json/cluster/firewall/options";
    pub const WORKLOADS: &str = "/api2/json/cluster/workloads";
}

/// Request timeout for inventory fetches, in seconds.
pub const REQUEST_TIMEOUT_SECS: u64 = 10;
