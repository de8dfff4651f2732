// Cluster Netmap - Configuration
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! Application settings from a local JSON file.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    /// Base URL of the cluster API.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Authorization header value for the cluster API, if required.
    #[serde(default)]
    pub api_token: Option<String>,
    /// Verify the API's TLS certificate.
    #[serde(default = "default_verify_tls")]
    pub verify_tls: bool,
    /// Hide infrastructure zones in the topology by default.
    #[serde(default)]
    pub hide_infra_zones: bool,
    /// Hide stopped workloads in the topology by default.
    #[serde(default)]
    pub hide_stopped_vms: bool,
}

fn default_api_url() -> String {
    "https://localhost:8006".to_string()
}

fn default_verify_tls() -> bool {
    true
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            api_token: None,
            verify_tls: default_verify_tls(),
            hide_infra_zones: false,
            hide_stopped_vms: false,
        }
    }
}

impl AppSettings {
    /// Path of the settings file.
    pub fn path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("cluster-netmap")
            .join("settings.json")
    }

    /// Load settings from disk, falling back to defaults on any problem.
    pub fn load() -> Self {
        let path = Self::path();
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(settings) => settings,
                Err(e) => {
                    warn!("Failed to parse settings: {}", e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read settings: {}", e);
                Self::default()
            }
        }
    }
}
