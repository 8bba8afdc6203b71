// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Cluster connection configuration resolution.
//!
//! Resolution order: an explicit `KUBECONFIG` file, then `~/.kube/config`,
//! then in-cluster service account credentials.

use crate::constants::kubeconfig::{DEFAULT_RELATIVE_PATH, ENV_VAR};
use crate::error::{PathfinderError, Result};
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::Config;
use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Resolve how to reach the cluster control plane.
///
/// If a kubeconfig file exists at the resolved path it is parsed; otherwise
/// in-cluster credentials are used. A file that exists but cannot be parsed
/// is an error, as is the absence of both sources.
pub async fn resolve_config() -> Result<Config> {
    resolve_config_from(env::var_os(ENV_VAR), env::var_os("HOME")).await
}

async fn resolve_config_from(
    kubeconfig: Option<OsString>,
    home: Option<OsString>,
) -> Result<Config> {
    match kubeconfig_path(kubeconfig, home) {
        Some(path) if path.exists() => {
            info!("Using kubeconfig at {}", path.display());
            config_from_file(&path).await
        }
        _ => {
            debug!("No kubeconfig file found, falling back to in-cluster configuration");
            Config::incluster().map_err(|e| {
                PathfinderError::ConfigResolution(format!(
                    "In-cluster configuration unavailable: {}",
                    e
                ))
            })
        }
    }
}

/// Determine the kubeconfig file location from the environment.
///
/// A non-empty `KUBECONFIG` takes precedence; otherwise the default path
/// under the home directory is used. Returns `None` if neither is set.
fn kubeconfig_path(kubeconfig: Option<OsString>, home: Option<OsString>) -> Option<PathBuf> {
    match kubeconfig {
        Some(p) if !p.is_empty() => Some(PathBuf::from(p)),
        _ => home.map(|h| Path::new(&h).join(DEFAULT_RELATIVE_PATH)),
    }
}

/// Build a client configuration from a kubeconfig file.
async fn config_from_file(path: &Path) -> Result<Config> {
    let kubeconfig = Kubeconfig::read_from(path).map_err(|e| {
        PathfinderError::ConfigResolution(format!(
            "Failed to parse kubeconfig at {}: {}",
            path.display(),
            e
        ))
    })?;

    Config::from_custom_kubeconfig(kubeconfig, &KubeConfigOptions::default())
        .await
        .map_err(|e| {
            PathfinderError::ConfigResolution(format!(
                "Failed to build configuration from {}: {}",
                path.display(),
                e
            ))
        })
}
