// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Kubeconfig resolution
pub mod kubeconfig {
    /// Environment variable overriding the kubeconfig file location
    pub const ENV_VAR: &str = "KUBECONFIG";
    /// Default kubeconfig location relative to the user's home directory
    pub const DEFAULT_RELATIVE_PATH: &str = ".kube/config";
}

/// OpenShift detection
pub mod openshift {
    /// API path that only an OpenShift control plane serves
    pub const PROJECT_API_PATH: &str = "/apis/project.openshift.io";
}

/// Argo Rollouts detection
pub mod argo {
    /// Group/version advertised by clusters with Argo Rollouts installed
    pub const GROUP_VERSION: &str = "argoproj.io/v1alpha1";
    /// Resource name to match in the discovery response
    pub const ROLLOUTS_RESOURCE: &str = "rollouts";
}
