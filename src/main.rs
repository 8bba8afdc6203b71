// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use tracing::{info, warn};

use pathfinder::kubernetes::ClientSet;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting Pathfinder cluster detection");

    // Resolve configuration, build the base client and probe for extensions.
    // An error here is fatal: without a base client nothing else can run.
    let clients = ClientSet::initialize().await?;
    info!("Connected to Kubernetes cluster");

    info!(
        "Capabilities: openshift={}, argo_rollouts={}",
        clients.is_openshift(),
        clients.is_argo_rollouts()
    );

    if clients.is_openshift() && clients.openshift_apps.is_none() {
        warn!("OpenShift detected but the Apps client could not be constructed");
    }
    if clients.is_argo_rollouts() && clients.argo_rollouts.is_none() {
        warn!("Argo Rollouts detected but the Rollouts client could not be constructed");
    }

    Ok(())
}
