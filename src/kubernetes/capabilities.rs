// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Capability detection for optional control plane extensions.
//!
//! Each probe runs at most once per [`Capabilities`] instance; the result is
//! cached for all subsequent reads. Probe failures are never fatal: a probe
//! that cannot reach the API degrades to "not detected".

use crate::constants::{argo, openshift};
use http::Request;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::APIResourceList;
use kube::Client;
use tokio::sync::OnceCell;
use tracing::{debug, info, warn};

/// Outcome of a single capability probe.
///
/// `Unknown` records a probe-level failure that is not a definitive "absent"
/// (e.g. connection refused). It collapses to `false` at the boundary, same
/// as `Absent`, but keeps the two cases distinguishable internally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Detection {
    Present,
    Absent,
    Unknown,
}

impl Detection {
    pub fn is_present(self) -> bool {
        matches!(self, Detection::Present)
    }
}

/// Memoized capability flags for a single cluster.
pub struct Capabilities {
    client: Client,
    openshift: OnceCell<Detection>,
    argo_rollouts: OnceCell<Detection>,
}

impl Capabilities {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            openshift: OnceCell::new(),
            argo_rollouts: OnceCell::new(),
        }
    }

    /// Whether the OpenShift platform extension was detected. Probes on first
    /// call, cached afterwards.
    pub async fn openshift(&self) -> bool {
        self.openshift
            .get_or_init(|| async {
                let detection = detect_openshift(&self.client).await;
                if detection.is_present() {
                    info!("Environment: OpenShift");
                } else {
                    info!("Environment: Kubernetes");
                }
                detection
            })
            .await
            .is_present()
    }

    /// Whether the Argo Rollouts extension was detected. Probes on first
    /// call, cached afterwards.
    pub async fn argo_rollouts(&self) -> bool {
        self.argo_rollouts
            .get_or_init(|| async {
                let detection = detect_argo_rollouts(&self.client).await;
                if detection.is_present() {
                    info!("Argo Rollouts resources detected");
                }
                detection
            })
            .await
            .is_present()
    }
}

/// Probe for the OpenShift platform extension by requesting a well-known API
/// path only OpenShift serves. The response body is discarded.
pub async fn detect_openshift(client: &Client) -> Detection {
    let request = match Request::get(openshift::PROJECT_API_PATH).body(Vec::new()) {
        Ok(request) => request,
        Err(e) => {
            warn!("Failed to build OpenShift probe request: {}", e);
            return Detection::Unknown;
        }
    };

    match client.request_text(request).await {
        Ok(_) => Detection::Present,
        Err(kube::Error::Api(err)) => {
            debug!(
                "OpenShift API group not served (status {}): {}",
                err.code, err.message
            );
            Detection::Absent
        }
        Err(e) => {
            warn!("OpenShift probe failed: {}", e);
            Detection::Unknown
        }
    }
}

/// Probe for the Argo Rollouts extension by listing the resources advertised
/// for its group/version and matching the rollouts resource by name.
pub async fn detect_argo_rollouts(client: &Client) -> Detection {
    match client.list_api_group_resources(argo::GROUP_VERSION).await {
        Ok(resources) => {
            if has_rollouts(&resources) {
                Detection::Present
            } else {
                Detection::Absent
            }
        }
        Err(kube::Error::Api(err)) => {
            debug!(
                "{} not served (status {}): {}",
                argo::GROUP_VERSION,
                err.code,
                err.message
            );
            Detection::Absent
        }
        Err(e) => {
            warn!("Argo Rollouts discovery failed: {}", e);
            Detection::Unknown
        }
    }
}

fn has_rollouts(resources: &APIResourceList) -> bool {
    resources
        .resources
        .iter()
        .any(|r| r.name == argo::ROLLOUTS_RESOURCE)
}
