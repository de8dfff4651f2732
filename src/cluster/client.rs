// Cluster Netmap - Cluster API Client
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! Cluster inventory client implementation.

use anyhow::{bail, Context, Result};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, info};

use super::{paths, REQUEST_TIMEOUT_SECS};
use crate::models::{
    Alias, ClusterFirewallOptions, FirewallRule, SecurityGroup, VmSummary, Zone,
};
use crate::snapshot::ClusterSnapshot;

/// Response envelope the cluster API wraps every payload in.
#[derive(Debug, Deserialize)]
struct ApiResponse<T> {
    data: T,
}

/// The security-analysis half of the inventory.
#[derive(Debug, Default)]
struct SecurityInventory {
    zones: Vec<Zone>,
    aliases: Vec<Alias>,
    rules: Vec<FirewallRule>,
    groups: Vec<SecurityGroup>,
    firewall: ClusterFirewallOptions,
}

/// Client for the cluster inventory API.
pub struct ClusterClient {
    http: reqwest::Client,
    base_url: String,
}

impl ClusterClient {
    /// Create a new client against the given API base URL.
    pub fn new(base_url: &str, token: Option<&str>, verify_tls: bool) -> Result<Self> {
        let mut builder = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(concat!("cluster-netmap/", env!("CARGO_PKG_VERSION")))
            .danger_accept_invalid_certs(!verify_tls);

        if let Some(token) = token {
            let mut headers = reqwest::header::HeaderMap::new();
            let mut value = reqwest::header::HeaderValue::from_str(token)
                .context("Invalid API token value")?;
            value.set_sensitive(true);
            headers.insert(reqwest::header::AUTHORIZATION, value);
            builder = builder.default_headers(headers);
        }

        let http = builder.build().context("Failed to build HTTP client")?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch one collection and unwrap the response envelope.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Request to {} failed", url))?;

        if !response.status().is_success() {
            bail!("Cluster API returned HTTP {} for {}", response.status(), url);
        }

        let envelope: ApiResponse<T> = response
            .json()
            .await
            .with_context(|| format!("Failed to parse response from {}", url))?;
        Ok(envelope.data)
    }

    /// Fetch security groups together with their rule bundles.
    async fn fetch_groups(&self) -> Result<Vec<SecurityGroup>> {
        let mut groups: Vec<SecurityGroup> = self.get_json(paths::GROUPS).await?;
        for group in &mut groups {
            group.rules = self
                .get_json(&format!("{}/{}", paths::GROUPS, group.group))
                .await
                .with_context(|| format!("Failed to fetch rules of group '{}'", group.group))?;
        }
        Ok(groups)
    }

    /// Fetch the zone/rule/alias side of the inventory.
    async fn fetch_security(&self) -> Result<SecurityInventory> {
        let zones = self.get_json(paths::ZONES).await?;
        let aliases = self.get_json(paths::ALIASES).await?;
        let rules = self.get_json(paths::RULES).await?;
        let groups = self.fetch_groups().await?;
        let firewall = self.get_json(paths::OPTIONS).await?;

        Ok(SecurityInventory {
            zones,
            aliases,
            rules,
            groups,
            firewall,
        })
    }

    /// Fetch the workload inventory.
    async fn fetch_vms(&self) -> Result<Vec<VmSummary>> {
        self.get_json(paths::WORKLOADS).await
    }

    /// Fetch the complete snapshot the analysis runs on.
    ///
    /// The security and workload inventories are independent and are
    /// fetched concurrently; a failure in either aborts the refresh cycle
    /// rather than producing a partial snapshot.
    pub async fn fetch_snapshot(&self) -> Result<ClusterSnapshot> {
        info!("Fetching cluster inventory from {}", self.base_url);

        let (security, vms) = tokio::try_join!(self.fetch_security(), self.fetch_vms())?;

        info!(
            zones = security.zones.len(),
            rules = security.rules.len(),
            groups = security.groups.len(),
            vms = vms.len(),
            "inventory fetched"
        );

        Ok(ClusterSnapshot {
            zones: security.zones,
            aliases: security.aliases,
            rules: security.rules,
            groups: security.groups,
            firewall: security.firewall,
            vms,
        })
    }
}
