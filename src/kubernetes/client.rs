// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Client construction for the base cluster API and the optional extensions.

use crate::error::{PathfinderError, Result};
use crate::types::{DeploymentConfig, Rollout};
use kube::{Api, Client, Config};

/// Build the base cluster client. Construction performs no network I/O.
pub fn build_client(config: Config) -> Result<Client> {
    Client::try_from(config)
        .map_err(|e| PathfinderError::ClientConstruction(format!("Kubernetes client: {}", e)))
}

/// Typed handle for the OpenShift Apps API (apps.openshift.io/v1)
#[derive(Clone)]
pub struct OpenshiftAppsClient {
    client: Client,
}

impl OpenshiftAppsClient {
    pub fn new(config: Config) -> Result<Self> {
        let client = Client::try_from(config).map_err(|e| {
            PathfinderError::ClientConstruction(format!("OpenShift Apps client: {}", e))
        })?;
        Ok(Self { client })
    }

    pub fn deployment_configs(&self, namespace: &str) -> Api<DeploymentConfig> {
        Api::namespaced(self.client.clone(), namespace)
    }

    pub fn all_deployment_configs(&self) -> Api<DeploymentConfig> {
        Api::all(self.client.clone())
    }
}

/// Typed handle for the Argo Rollouts API (argoproj.io/v1alpha1)
#[derive(Clone)]
pub struct ArgoRolloutsClient {
    client: Client,
}

impl ArgoRolloutsClient {
    pub fn new(config: Config) -> Result<Self> {
        let client = Client::try_from(config).map_err(|e| {
            PathfinderError::ClientConstruction(format!("Argo Rollouts client: {}", e))
        })?;
        Ok(Self { client })
    }

    pub fn rollouts(&self, namespace: &str) -> Api<Rollout> {
        Api::namespaced(self.client.clone(), namespace)
    }

    pub fn all_rollouts(&self) -> Api<Rollout> {
        Api::all(self.client.clone())
    }
}
