// Cluster Netmap - Main Entry Point
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! Cluster Netmap - network reachability and topology analyzer for
//! virtualization clusters.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use tracing::info;

mod cluster;
mod config;
mod models;
mod reachability;
mod snapshot;
mod topology;

use cluster::ClusterClient;
use config::AppSettings;
use snapshot::ClusterSnapshot;
use topology::FilterOptions;

const USAGE: &str = "usage: cluster-netmap [--snapshot <file>] [--output <file>] \
[--hide-infra] [--hide-stopped]";

/// Parsed command line.
#[derive(Debug, Default)]
struct CliArgs {
    /// Analyze a captured snapshot file instead of fetching from the API.
    snapshot: Option<PathBuf>,
    /// Write the report here instead of stdout.
    output: Option<PathBuf>,
    hide_infra: bool,
    hide_stopped: bool,
}

fn parse_args() -> Result<CliArgs> {
    let mut args = CliArgs::default();
    let mut iter = std::env::args().skip(1);

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--snapshot" => {
                let path = iter.next().context("--snapshot needs a file argument")?;
                args.snapshot = Some(PathBuf::from(path));
            }
            "--output" => {
                let path = iter.next().context("--output needs a file argument")?;
                args.output = Some(PathBuf::from(path));
            }
            "--hide-infra" => args.hide_infra = true,
            "--hide-stopped" => args.hide_stopped = true,
            "--help" | "-h" => {
                println!("{}", USAGE);
                std::process::exit(0);
            }
            other => bail!("Unknown argument '{}'\n{}", other, USAGE),
        }
    }

    Ok(args)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = parse_args()?;
    let settings = AppSettings::load();

    let filter = FilterOptions {
        hide_infra_zones: args.hide_infra || settings.hide_infra_zones,
        hide_stopped_vms: args.hide_stopped || settings.hide_stopped_vms,
        ..Default::default()
    };

    let snapshot = match &args.snapshot {
        Some(path) => {
            info!("Analyzing snapshot {}", path.display());
            ClusterSnapshot::load(path)?
        }
        None => {
            let client = ClusterClient::new(
                &settings.api_url,
                settings.api_token.as_deref(),
                settings.verify_tls,
            )?;
            client.fetch_snapshot().await?
        }
    };

    let report = snapshot.analyze(&filter);
    info!(
        zones = report.matrix.labels.len(),
        nodes = report.graph.nodes.len(),
        edges = report.graph.edges.len(),
        "analysis complete"
    );

    let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
    match &args.output {
        Some(path) => {
            fs::write(path, json)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            info!("Report written to {}", path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}
