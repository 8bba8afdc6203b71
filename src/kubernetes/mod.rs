// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes utilities for configuration resolution, capability detection
//! and client construction.

pub mod capabilities;
pub mod client;
pub mod clientset;
pub mod config;

pub use capabilities::{Capabilities, Detection};
pub use client::{build_client, ArgoRolloutsClient, OpenshiftAppsClient};
pub use clientset::ClientSet;
pub use config::resolve_config;
