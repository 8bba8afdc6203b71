// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Test utilities for mocking Kubernetes API responses.

use http::{Request, Response};
use kube::client::Body;
use kube::Client;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use tower::Service;

/// A mock HTTP service that returns predefined responses based on request
/// paths, counts requests, and can simulate transport failures.
#[derive(Clone)]
pub struct MockService {
    responses: Arc<Mutex<HashMap<(String, String), (u16, String)>>>,
    failures: Arc<Mutex<HashSet<(String, String)>>>,
    hits: Arc<Mutex<HashMap<(String, String), usize>>>,
}

impl MockService {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(HashMap::new())),
            failures: Arc::new(Mutex::new(HashSet::new())),
            hits: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Add a response for GET requests matching the exact path
    pub fn on_get(self, path: &str, status: u16, body: &str) -> Self {
        self.responses.lock().unwrap().insert(
            ("GET".to_string(), path.to_string()),
            (status, body.to_string()),
        );
        self
    }

    /// Make GET requests for the exact path fail at the transport level,
    /// as a refused connection would
    pub fn fail_on_get(self, path: &str) -> Self {
        self.failures
            .lock()
            .unwrap()
            .insert(("GET".to_string(), path.to_string()));
        self
    }

    /// Number of requests seen for this method and exact path
    pub fn hits(&self, method: &str, path: &str) -> usize {
        self.hits
            .lock()
            .unwrap()
            .get(&(method.to_string(), path.to_string()))
            .copied()
            .unwrap_or(0)
    }

    /// Build a kube Client from this mock service
    pub fn into_client(self) -> Client {
        Client::new(self, "default")
    }

    fn find_response(&self, method: &str, path: &str) -> Option<(u16, String)> {
        let responses = self.responses.lock().unwrap();

        // Try exact match first
        if let Some(resp) = responses.get(&(method.to_string(), path.to_string())) {
            return Some(resp.clone());
        }

        // Try prefix match for paths like /api/v1/namespaces/foo
        for ((m, p), resp) in responses.iter() {
            if m == method && path.starts_with(p) {
                return Some(resp.clone());
            }
        }

        None
    }
}

impl Default for MockService {
    fn default() -> Self {
        Self::new()
    }
}

impl Service<Request<Body>> for MockService {
    type Response = Response<Body>;
    type Error = tower::BoxError;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let method = req.method().to_string();
        let path = req.uri().path().to_string();

        *self
            .hits
            .lock()
            .unwrap()
            .entry((method.clone(), path.clone()))
            .or_insert(0) += 1;

        let fail = self
            .failures
            .lock()
            .unwrap()
            .contains(&(method.clone(), path.clone()));
        let response = self.find_response(&method, &path);

        Box::pin(async move {
            if fail {
                return Err(Box::new(std::io::Error::new(
                    std::io::ErrorKind::ConnectionRefused,
                    "connection refused",
                )) as tower::BoxError);
            }

            match response {
                Some((status, body)) => Ok(Response::builder()
                    .status(status)
                    .header("content-type", "application/json")
                    .body(Body::from(body.into_bytes()))
                    .unwrap()),
                None => {
                    // Default 404 for unmatched requests
                    let body = r#"{"kind":"Status","apiVersion":"v1","status":"Failure","message":"not found","reason":"NotFound","code":404}"#;
                    Ok(Response::builder()
                        .status(404)
                        .header("content-type", "application/json")
                        .body(Body::from(body.as_bytes().to_vec()))
                        .unwrap())
                }
            }
        })
    }
}

/// Create an API discovery response advertising the given resource names
pub fn api_resource_list_json(group_version: &str, names: &[&str]) -> String {
    let resources: Vec<serde_json::Value> = names
        .iter()
        .map(|name| {
            serde_json::json!({
                "name": name,
                "singularName": name.trim_end_matches('s'),
                "namespaced": true,
                "kind": "Resource",
                "verbs": ["get", "list", "watch"]
            })
        })
        .collect();

    serde_json::json!({
        "kind": "APIResourceList",
        "apiVersion": "v1",
        "groupVersion": group_version,
        "resources": resources
    })
    .to_string()
}

/// Create a 404 not found response
pub fn not_found_json(resource: &str, name: &str) -> String {
    serde_json::json!({
        "kind": "Status",
        "apiVersion": "v1",
        "status": "Failure",
        "message": format!("{} \"{}\" not found", resource, name),
        "reason": "NotFound",
        "code": 404
    })
    .to_string()
}
