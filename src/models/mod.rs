// Cluster Netmap - Models
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! Data models for cluster network entities.

mod alias;
mod firewall_options;
mod rule;
mod vm;
mod zone;

pub use alias::Alias;
pub use firewall_options::ClusterFirewallOptions;
pub use rule::{FirewallRule, RuleAction, RuleEndpoint, RuleKind, SecurityGroup};
pub use vm::VmSummary;
pub use zone::Zone;
