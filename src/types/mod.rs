// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Typed custom resources for the optional cluster extensions.

pub mod deployment_config;
pub mod rollout;

pub use deployment_config::DeploymentConfig;
pub use rollout::Rollout;
