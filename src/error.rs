// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PathfinderError {
    #[error("Kubernetes API error: {0}")]
    KubeError(#[from] kube::Error),

    #[error("Failed to resolve cluster configuration: {0}")]
    ConfigResolution(String),

    #[error("Failed to construct client: {0}")]
    ClientConstruction(String),
}

pub type Result<T> = std::result::Result<T, PathfinderError>;
