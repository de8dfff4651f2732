// Cluster Netmap - Protocol Summary
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! Compact protocol summaries for matched rule sets.

use crate::models::{FirewallRule, RuleAction};

/// Collapse the rules matching a zone pair into a short description.
///
/// Only accepting rules contribute. An accept with neither a macro nor a
/// protocol is unrestricted and dominates the whole summary. Otherwise
/// macros come first, in rule order, followed by the unique
/// `PROTOCOL PORT` (or bare protocol) tokens, joined with `" / "`.
pub fn summarize(rules: &[FirewallRule]) -> String {
    let accepts: Vec<&FirewallRule> = rules
        .iter()
        .filter(|r| r.verdict() == Some(RuleAction::Accept))
        .collect();

    if accepts.is_empty() {
        return "None".to_string();
    }

    if accepts
        .iter()
        .any(|r| r.macro_name.is_none() && r.proto.is_none())
    {
        return "All".to_string();
    }

    let mut macros: Vec<String> = Vec::new();
    let mut tokens: Vec<String> = Vec::new();

    for rule in accepts {
        if let Some(name) = &rule.macro_name {
            macros.push(name.clone());
        } else if let Some(proto) = &rule.proto {
            let token = match &rule.dport {
                Some(port) => format!("{} {}", proto.to_uppercase(), port),
                None => proto.to_uppercase(),
            };
            if !tokens.contains(&token) {
                tokens.push(token);
            }
        }
    }

    macros.extend(tokens);
    if macros.is_empty() {
        return "All".to_string();
    }
    macros.join(" / ")
}
