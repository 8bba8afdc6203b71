// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Assembly of the client bundle handed to the application.

use crate::error::Result;
use crate::kubernetes::capabilities::Capabilities;
use crate::kubernetes::client::{build_client, ArgoRolloutsClient, OpenshiftAppsClient};
use crate::kubernetes::config::resolve_config;
use kube::{Client, Config};
use tracing::warn;

/// All client handles for one cluster, built once at startup.
///
/// The base client is mandatory. The extension handles are present only when
/// the matching capability was detected and the handle could be constructed;
/// callers must treat them as optional even when the capability flag is true.
pub struct ClientSet {
    pub kubernetes: Client,
    pub openshift_apps: Option<OpenshiftAppsClient>,
    pub argo_rollouts: Option<ArgoRolloutsClient>,
    openshift_detected: bool,
    argo_rollouts_detected: bool,
}

impl std::fmt::Debug for ClientSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientSet")
            .field("openshift_apps", &self.openshift_apps.is_some())
            .field("argo_rollouts", &self.argo_rollouts.is_some())
            .field("openshift_detected", &self.openshift_detected)
            .field("argo_rollouts_detected", &self.argo_rollouts_detected)
            .finish_non_exhaustive()
    }
}

impl ClientSet {
    /// Resolve the cluster configuration, build the base client and probe for
    /// extensions. An error here means no cluster is reachable; the caller
    /// decides whether that is fatal.
    pub async fn initialize() -> Result<Self> {
        let config = resolve_config().await?;
        Self::from_config(config).await
    }

    /// Build the client set from an already resolved configuration.
    pub async fn from_config(config: Config) -> Result<Self> {
        let client = build_client(config.clone())?;
        Ok(Self::with_client(client, config).await)
    }

    /// Assemble the set around an existing base client. The extension clients
    /// are built from the same configuration the capabilities were probed
    /// with; a construction failure leaves the handle empty.
    pub async fn with_client(client: Client, config: Config) -> Self {
        let capabilities = Capabilities::new(client.clone());
        let openshift_detected = capabilities.openshift().await;
        let argo_rollouts_detected = capabilities.argo_rollouts().await;

        let openshift_apps = if openshift_detected {
            match OpenshiftAppsClient::new(config.clone()) {
                Ok(apps) => Some(apps),
                Err(e) => {
                    warn!("Unable to create OpenShift Apps client: {}", e);
                    None
                }
            }
        } else {
            None
        };

        let argo_rollouts = if argo_rollouts_detected {
            match ArgoRolloutsClient::new(config) {
                Ok(rollouts) => Some(rollouts),
                Err(e) => {
                    warn!("Unable to create Argo Rollouts client: {}", e);
                    None
                }
            }
        } else {
            None
        };

        Self {
            kubernetes: client,
            openshift_apps,
            argo_rollouts,
            openshift_detected,
            argo_rollouts_detected,
        }
    }

    /// True if the OpenShift platform extension was detected at startup.
    pub fn is_openshift(&self) -> bool {
        self.openshift_detected
    }

    /// True if Argo Rollouts resources were detected at startup.
    pub fn is_argo_rollouts(&self) -> bool {
        self.argo_rollouts_detected
    }
}
