// Cluster Netmap - Endpoint Resolver
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! Resolution of rule endpoints to canonical zone names.

use std::collections::{HashMap, HashSet};

use crate::models::{Alias, RuleEndpoint, Zone};

/// Outcome of resolving a rule endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EndpointResolution {
    /// Explicit wildcard, matches every zone.
    Any,
    /// Resolved to a known zone.
    Zone(String),
    /// Unknown token; treated as a wildcard by the matcher.
    Unresolved,
}

/// Maps raw rule endpoints to canonical zone names.
///
/// Lookup tables are built once per analysis pass. Precedence is strict:
/// exact zone name (case-sensitive), then alias name (case-insensitive)
/// through the alias CIDR, then a zone CIDR literal. CIDRs compare by
/// exact string equality; no subnet containment is attempted.
#[derive(Debug)]
pub struct EndpointResolver {
    zone_names: HashSet<String>,
    cidr_to_zone: HashMap<String, String>,
    alias_to_cidr: HashMap<String, String>,
}

impl EndpointResolver {
    /// Build the resolver's lookup tables from the declared inventory.
    pub fn new(zones: &[Zone], aliases: &[Alias]) -> Self {
        let mut zone_names = HashSet::new();
        let mut cidr_to_zone = HashMap::new();
        for zone in zones {
            zone_names.insert(zone.name.clone());
            if !zone.cidr.is_empty() {
                // First declaration wins on duplicate CIDRs
                cidr_to_zone
                    .entry(zone.cidr.clone())
                    .or_insert_with(|| zone.name.clone());
            }
        }

        let mut alias_to_cidr = HashMap::new();
        for alias in aliases {
            alias_to_cidr
                .entry(alias.name.to_lowercase())
                .or_insert_with(|| alias.cidr.clone());
        }

        Self {
            zone_names,
            cidr_to_zone,
            alias_to_cidr,
        }
    }

    /// Resolve a parsed endpoint to a zone, a wildcard, or unresolved.
    pub fn resolve(&self, endpoint: &RuleEndpoint) -> EndpointResolution {
        let token = match endpoint {
            RuleEndpoint::Wildcard => return EndpointResolution::Any,
            RuleEndpoint::Named(token) => token,
        };

        // Direct zone name match wins over any alias collision
        if self.zone_names.contains(token) {
            return EndpointResolution::Zone(token.clone());
        }

        if let Some(cidr) = self.alias_to_cidr.get(&token.to_lowercase()) {
            if let Some(zone) = self.cidr_to_zone.get(cidr) {
                return EndpointResolution::Zone(zone.clone());
            }
        }

        if let Some(zone) = self.cidr_to_zone.get(token) {
            return EndpointResolution::Zone(zone.clone());
        }

        EndpointResolution::Unresolved
    }

    /// Whether an endpoint matches the given zone.
    ///
    /// Wildcards and unresolved tokens match every zone.
    pub fn matches(&self, endpoint: &RuleEndpoint, zone: &str) -> bool {
        match self.resolve(endpoint) {
            EndpointResolution::Any | EndpointResolution::Unresolved => true,
            EndpointResolution::Zone(name) => name == zone,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(token: &str) -> RuleEndpoint {
        RuleEndpoint::Named(token.to_string())
    }

    fn fixture() -> EndpointResolver {
        let zones = vec![
            Zone::new("dmz", "10.0.1.0/24"),
            Zone::new("lan", "10.0.2.0/24"),
        ];
        let aliases = vec![
            Alias::new("Frontend", "10.0.1.0/24"),
            Alias::new("unattached", "192.168.99.0/24"),
        ];
        EndpointResolver::new(&zones, &aliases)
    }

    #[test]
    fn test_wildcard() {
        let resolver = fixture();
        assert_eq!(
            resolver.resolve(&RuleEndpoint::Wildcard),
            EndpointResolution::Any
        );
    }

    #[test]
    fn test_zone_name_match_is_case_sensitive() {
        let resolver = fixture();
        assert_eq!(
            resolver.resolve(&named("dmz")),
            EndpointResolution::Zone("dmz".to_string())
        );
        assert_eq!(
            resolver.resolve(&named("DMZ")),
            EndpointResolution::Unresolved
        );
    }

    #[test]
    fn test_alias_match_is_case_insensitive() {
        let resolver = fixture();
        assert_eq!(
            resolver.resolve(&named("frontend")),
            EndpointResolution::Zone("dmz".to_string())
        );
        assert_eq!(
            resolver.resolve(&named("FRONTEND")),
            EndpointResolution::Zone("dmz".to_string())
        );
    }

    #[test]
    fn test_cidr_literal_match() {
        let resolver = fixture();
        assert_eq!(
            resolver.resolve(&named("10.0.2.0/24")),
            EndpointResolution::Zone("lan".to_string())
        );
    }

    #[test]
    fn test_zone_name_beats_alias_collision() {
        // A token that is both a zone name and an alias name resolves
        // through the zone-name path
        let zones = vec![
            Zone::new("shared", "10.0.5.0/24"),
            Zone::new("other", "10.0.6.0/24"),
        ];
        let aliases = vec![Alias::new("shared", "10.0.6.0/24")];
        let resolver = EndpointResolver::new(&zones, &aliases);

        assert_eq!(
            resolver.resolve(&named("shared")),
            EndpointResolution::Zone("shared".to_string())
        );
    }

    #[test]
    fn test_alias_to_unknown_cidr_is_unresolved() {
        let resolver = fixture();
        assert_eq!(
            resolver.resolve(&named("unattached")),
            EndpointResolution::Unresolved
        );
    }

    #[test]
    fn test_unresolved_matches_everything() {
        let resolver = fixture();
        assert!(resolver.matches(&named("no-such-thing"), "dmz"));
        assert!(resolver.matches(&named("no-such-thing"), "lan"));
        assert!(resolver.matches(&named("dmz"), "dmz"));
        assert!(!resolver.matches(&named("dmz"), "lan"));
    }
}
