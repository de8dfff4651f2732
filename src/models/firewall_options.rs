// Cluster Netmap - Cluster Firewall Options
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! Cluster-wide firewall options model.

use serde::{Deserialize, Serialize};

/// Cluster-wide firewall options.
///
/// A missing `enable` flag is treated as disabled; the default policies
/// mirror what the cluster applies when none are configured.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterFirewallOptions {
    #[serde(default)]
    pub enable: bool,
    #[serde(default = "default_policy_in")]
    pub policy_in: String,
    #[serde(default = "default_policy_out")]
    pub policy_out: String,
}

fn default_policy_in() -> String {
    "DROP".to_string()
}

fn default_policy_out() -> String {
    "ACCEPT".to_string()
}

impl Default for ClusterFirewallOptions {
    fn default() -> Self {
        Self {
            enable: false,
            policy_in: default_policy_in(),
            policy_out: default_policy_out(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default_restrictive() {
        let opts: ClusterFirewallOptions = serde_json::from_str("{}").unwrap();
        assert!(!opts.enable);
        assert_eq!(opts.policy_in, "DROP");
        assert_eq!(opts.policy_out, "ACCEPT");
    }
}
