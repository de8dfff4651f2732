// Cluster Netmap - Reachability Matrix
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! Pairwise zone reachability derivation.

use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use super::resolver::EndpointResolver;
use super::summary::summarize;
use crate::models::{Alias, FirewallRule, RuleAction, SecurityGroup, Zone};

/// Classification of one ordered zone pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReachStatus {
    /// Diagonal entry; intra-zone traffic is outside the analysis.
    #[serde(rename = "self")]
    SelfZone,
    Allowed,
    Blocked,
    /// Both allowing and denying rules apply to the pair.
    Partial,
}

impl ReachStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SelfZone => "self",
            Self::Allowed => "allowed",
            Self::Blocked => "blocked",
            Self::Partial => "partial",
        }
    }
}

/// One cell of the reachability matrix.
///
/// Carries the matched rules for drill-down and the collapsed protocol
/// summary for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReachabilityCell {
    pub from: String,
    pub to: String,
    pub status: ReachStatus,
    pub matching_rules: Vec<FirewallRule>,
    pub protocol_summary: String,
}

/// The full pairwise reachability classification.
///
/// Cells are keyed by zone name internally; the index-ordered grid is
/// materialized only when exporting, so zone filtering downstream cannot
/// introduce index drift.
#[derive(Debug, Clone, PartialEq)]
pub struct ReachabilityMatrix {
    labels: Vec<String>,
    cells: HashMap<String, HashMap<String, ReachabilityCell>>,
}

/// Index-ordered view of the matrix for serialization.
#[derive(Debug, Clone, Serialize)]
pub struct MatrixExport {
    pub labels: Vec<String>,
    pub cells: Vec<Vec<ReachabilityCell>>,
}

impl ReachabilityMatrix {
    /// Derive the matrix from the declared inventory.
    ///
    /// Cluster rules and every security-group bundle are flattened into one
    /// candidate set; disabled rules and group-reference rows are excluded.
    /// The derivation is a pure function of its inputs and is recomputed
    /// from scratch on every call.
    pub fn build(
        zones: &[Zone],
        rules: &[FirewallRule],
        groups: &[SecurityGroup],
        aliases: &[Alias],
    ) -> Self {
        let resolver = EndpointResolver::new(zones, aliases);
        let candidates = flatten_rules(rules, groups);
        debug!(
            zones = zones.len(),
            candidates = candidates.len(),
            "deriving reachability matrix"
        );

        let labels: Vec<String> = zones.iter().map(|z| z.name.clone()).collect();
        let mut cells: HashMap<String, HashMap<String, ReachabilityCell>> = HashMap::new();

        for from in &labels {
            let row = cells.entry(from.clone()).or_default();
            for to in &labels {
                let cell = if from == to {
                    ReachabilityCell {
                        from: from.clone(),
                        to: to.clone(),
                        status: ReachStatus::SelfZone,
                        matching_rules: Vec::new(),
                        protocol_summary: String::new(),
                    }
                } else {
                    classify_pair(&resolver, &candidates, from, to)
                };
                row.insert(to.clone(), cell);
            }
        }

        Self { labels, cells }
    }

    /// Zone names in input order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Look up a cell by zone names.
    pub fn cell(&self, from: &str, to: &str) -> Option<&ReachabilityCell> {
        self.cells.get(from).and_then(|row| row.get(to))
    }

    /// Materialize the index-ordered grid for output.
    pub fn export(&self) -> MatrixExport {
        let cells = self
            .labels
            .iter()
            .map(|from| {
                self.labels
                    .iter()
                    .filter_map(|to| self.cell(from, to).cloned())
                    .collect()
            })
            .collect();
        MatrixExport {
            labels: self.labels.clone(),
            cells,
        }
    }
}

/// Flatten cluster rules and group bundles into one candidate set.
fn flatten_rules<'a>(
    rules: &'a [FirewallRule],
    groups: &'a [SecurityGroup],
) -> Vec<&'a FirewallRule> {
    rules
        .iter()
        .chain(groups.iter().flat_map(|g| g.rules.iter()))
        .filter(|r| r.is_analyzable())
        .collect()
}

/// Classify one ordered pair of distinct zones.
fn classify_pair(
    resolver: &EndpointResolver,
    candidates: &[&FirewallRule],
    from: &str,
    to: &str,
) -> ReachabilityCell {
    let matching_rules: Vec<FirewallRule> = candidates
        .iter()
        .filter(|rule| {
            resolver.matches(&rule.source_endpoint(), from)
                && resolver.matches(&rule.dest_endpoint(), to)
        })
        .map(|rule| (*rule).clone())
        .collect();

    let mut accepts = 0usize;
    let mut denies = 0usize;
    for rule in &matching_rules {
        match rule.verdict() {
            Some(RuleAction::Accept) => accepts += 1,
            Some(RuleAction::Drop) | Some(RuleAction::Reject) => denies += 1,
            None => {}
        }
    }

    let status = if matching_rules.is_empty() {
        ReachStatus::Blocked
    } else if accepts > 0 && denies > 0 {
        ReachStatus::Partial
    } else if accepts > 0 {
        ReachStatus::Allowed
    } else {
        ReachStatus::Blocked
    };

    let protocol_summary = summarize(&matching_rules);

    ReachabilityCell {
        from: from.to_string(),
        to: to.to_string(),
        status,
        matching_rules,
        protocol_summary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RuleKind;

    fn zones() -> Vec<Zone> {
        vec![
            Zone::new("dmz", "10.0.1.0/24"),
            Zone::new("lan", "10.0.2.0/24"),
            Zone::new("backup", "10.0.3.0/24"),
        ]
    }

    #[test]
    fn test_diagonal_is_self() {
        let zones = zones();
        let rules = vec![FirewallRule::accept(None, None)];
        let matrix = ReachabilityMatrix::build(&zones, &rules, &[], &[]);

        for zone in matrix.labels() {
            let cell = matrix.cell(zone, zone).unwrap();
            assert_eq!(cell.status, ReachStatus::SelfZone);
            assert!(cell.matching_rules.is_empty());
            assert_eq!(cell.protocol_summary, "");
        }
    }

    #[test]
    fn test_directions_are_independent() {
        let zones = zones();
        let rules = vec![FirewallRule::accept(Some("dmz"), Some("lan"))];
        let matrix = ReachabilityMatrix::build(&zones, &rules, &[], &[]);

        assert_eq!(matrix.cell("dmz", "lan").unwrap().status, ReachStatus::Allowed);
        assert_eq!(matrix.cell("lan", "dmz").unwrap().status, ReachStatus::Blocked);
    }

    #[test]
    fn test_conflict_is_partial_in_any_order() {
        let zones = zones();
        let accept = FirewallRule::accept(Some("dmz"), Some("lan"));
        let deny = FirewallRule::drop(Some("dmz"), Some("lan"));

        let forward = ReachabilityMatrix::build(
            &zones,
            &[accept.clone(), deny.clone()],
            &[],
            &[],
        );
        let reversed = ReachabilityMatrix::build(&zones, &[deny, accept], &[], &[]);

        assert_eq!(
            forward.cell("dmz", "lan").unwrap().status,
            ReachStatus::Partial
        );
        assert_eq!(
            reversed.cell("dmz", "lan").unwrap().status,
            ReachStatus::Partial
        );
    }

    #[test]
    fn test_wildcard_source_matches_every_origin() {
        let zones = zones();
        let rules = vec![FirewallRule::accept(None, Some("lan"))];
        let matrix = ReachabilityMatrix::build(&zones, &rules, &[], &[]);

        assert_eq!(matrix.cell("dmz", "lan").unwrap().status, ReachStatus::Allowed);
        assert_eq!(
            matrix.cell("backup", "lan").unwrap().status,
            ReachStatus::Allowed
        );
        // The diagonal never evaluates rules
        assert_eq!(matrix.cell("lan", "lan").unwrap().status, ReachStatus::SelfZone);
    }

    #[test]
    fn test_disabled_rules_are_excluded() {
        let zones = zones();
        let mut rule = FirewallRule::accept(Some("dmz"), Some("lan"));
        rule.enable = false;
        let matrix = ReachabilityMatrix::build(&zones, &[rule], &[], &[]);

        let cell = matrix.cell("dmz", "lan").unwrap();
        assert_eq!(cell.status, ReachStatus::Blocked);
        assert!(cell.matching_rules.is_empty());
    }

    #[test]
    fn test_group_bundles_are_flattened() {
        let zones = zones();
        let group = SecurityGroup {
            group: "webservers".to_string(),
            comment: None,
            rules: vec![FirewallRule::accept(Some("lan"), Some("dmz"))],
        };
        let matrix = ReachabilityMatrix::build(&zones, &[], &[group], &[]);

        assert_eq!(matrix.cell("lan", "dmz").unwrap().status, ReachStatus::Allowed);
    }

    #[test]
    fn test_group_reference_rows_are_skipped() {
        let zones = zones();
        let mut reference = FirewallRule::accept(None, None);
        reference.kind = RuleKind::Group;
        reference.action = "webservers".to_string();
        let matrix = ReachabilityMatrix::build(&zones, &[reference], &[], &[]);

        let cell = matrix.cell("dmz", "lan").unwrap();
        assert_eq!(cell.status, ReachStatus::Blocked);
        assert!(cell.matching_rules.is_empty());
    }

    #[test]
    fn test_alias_endpoints_resolve() {
        let zones = zones();
        let aliases = vec![Alias::new("Frontend", "10.0.1.0/24")];
        let rules = vec![FirewallRule::accept(Some("frontend"), Some("lan"))];
        let matrix = ReachabilityMatrix::build(&zones, &rules, &[], &aliases);

        assert_eq!(matrix.cell("dmz", "lan").unwrap().status, ReachStatus::Allowed);
        assert_eq!(
            matrix.cell("backup", "lan").unwrap().status,
            ReachStatus::Blocked
        );
    }

    #[test]
    fn test_rebuild_is_idempotent() {
        let zones = zones();
        let rules = vec![
            FirewallRule::accept(Some("dmz"), Some("lan")),
            FirewallRule::drop(None, Some("backup")),
        ];
        let aliases = vec![Alias::new("Frontend", "10.0.1.0/24")];

        let first = ReachabilityMatrix::build(&zones, &rules, &[], &aliases);
        let second = ReachabilityMatrix::build(&zones, &rules, &[], &aliases);
        assert_eq!(first, second);
    }

    #[test]
    fn test_end_to_end_pair_classification() {
        let zones = vec![Zone::new("a", "10.0.1.0/24"), Zone::new("b", "10.0.2.0/24")];
        let mut rule = FirewallRule::accept(Some("a"), Some("b"));
        rule.proto = Some("tcp".to_string());
        rule.dport = Some("22".to_string());
        let matrix = ReachabilityMatrix::build(&zones, &[rule], &[], &[]);

        let forward = matrix.cell("a", "b").unwrap();
        assert_eq!(forward.status, ReachStatus::Allowed);
        assert_eq!(forward.protocol_summary, "TCP 22");

        let reverse = matrix.cell("b", "a").unwrap();
        assert_eq!(reverse.status, ReachStatus::Blocked);
        assert_eq!(reverse.protocol_summary, "None");
    }

    #[test]
    fn test_export_preserves_label_order() {
        let zones = zones();
        let matrix = ReachabilityMatrix::build(&zones, &[], &[], &[]);
        let export = matrix.export();

        assert_eq!(export.labels, vec!["dmz", "lan", "backup"]);
        assert_eq!(export.cells.len(), 3);
        for (i, row) in export.cells.iter().enumerate() {
            assert_eq!(row.len(), 3);
            for (j, cell) in row.iter().enumerate() {
                assert_eq!(cell.from, export.labels[i]);
                assert_eq!(cell.to, export.labels[j]);
            }
        }
    }
}
