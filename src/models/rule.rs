// Cluster Netmap - Firewall Rule Model
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! Firewall rule and security group models.

use serde::{Deserialize, Serialize};

/// Rule origin/direction discriminator as served by the cluster API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleKind {
    #[default]
    In,
    Out,
    /// A reference to a security group, not a policy line of its own.
    Group,
}

/// The verdict a rule applies to matching traffic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleAction {
    Accept,
    Drop,
    Reject,
}

impl RuleAction {
    /// Parse an action string from the API.
    ///
    /// Group-reference rows carry a group name in the action field, which
    /// parses to `None` here.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "ACCEPT" => Some(Self::Accept),
            "DROP" => Some(Self::Drop),
            "REJECT" => Some(Self::Reject),
            _ => None,
        }
    }
}

/// A rule's source or destination, parsed once at the ingestion boundary.
///
/// An absent or empty token is an explicit wildcard; everything else is an
/// opaque token the endpoint resolver classifies (zone name, alias name,
/// or CIDR literal).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleEndpoint {
    Wildcard,
    Named(String),
}

impl RuleEndpoint {
    /// Parse a raw source/dest field.
    pub fn parse(token: Option<&str>) -> Self {
        match token.map(str::trim) {
            None | Some("") => Self::Wildcard,
            Some(t) => Self::Named(t.to_string()),
        }
    }
}

/// One firewall policy line.
///
/// Rules come from two origins, the cluster-wide rule set and security
/// group bundles; both flatten into one collection before analysis, so the
/// record itself does not track its origin.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FirewallRule {
    #[serde(rename = "type", default)]
    pub kind: RuleKind,
    /// Raw action string ("ACCEPT", "DROP", "REJECT", or a group name on
    /// group-reference rows).
    #[serde(default)]
    pub action: String,
    #[serde(default)]
    pub enable: bool,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub dest: Option<String>,
    #[serde(default)]
    pub proto: Option<String>,
    #[serde(default)]
    pub dport: Option<String>,
    /// Named protocol bundle, e.g. "SSH" or "HTTP".
    #[serde(rename = "macro", default)]
    pub macro_name: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
}

impl FirewallRule {
    /// Create an enabled accept rule between two endpoints (tests and
    /// fixtures).
    pub fn accept(source: Option<&str>, dest: Option<&str>) -> Self {
        Self {
            action: "ACCEPT".to_string(),
            enable: true,
            source: source.map(str::to_string),
            dest: dest.map(str::to_string),
            ..Default::default()
        }
    }

    /// Create an enabled drop rule between two endpoints.
    pub fn drop(source: Option<&str>, dest: Option<&str>) -> Self {
        Self {
            action: "DROP".to_string(),
            enable: true,
            source: source.map(str::to_string),
            dest: dest.map(str::to_string),
            ..Default::default()
        }
    }

    /// The typed verdict, if the action field holds one.
    pub fn verdict(&self) -> Option<RuleAction> {
        RuleAction::parse(&self.action)
    }

    /// The parsed source endpoint.
    pub fn source_endpoint(&self) -> RuleEndpoint {
        RuleEndpoint::parse(self.source.as_deref())
    }

    /// The parsed destination endpoint.
    pub fn dest_endpoint(&self) -> RuleEndpoint {
        RuleEndpoint::parse(self.dest.as_deref())
    }

    /// Whether this row takes part in reachability analysis.
    ///
    /// Disabled rules and group-reference rows are excluded; the latter are
    /// indirection whose bundles are flattened separately.
    pub fn is_analyzable(&self) -> bool {
        self.enable && self.kind != RuleKind::Group
    }
}

/// A named, reusable bundle of firewall rules.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SecurityGroup {
    pub group: String,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub rules: Vec<FirewallRule>,
}
