// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Remote parameter store for values that live outside the environment.
//!
//! [`ParameterStore`] is a thin handle over a backend: AWS Systems Manager
//! in deployments, an in-memory map in tests. Reads and writes pass
//! through as-is. A failed read is logged once with the parameter name
//! (never the value) and then returned to the caller unchanged; there is
//! no retry, caching, or fallback layer here.

mod memory;
mod ssm;

use std::sync::Arc;

use crate::environment::Environment;

pub use memory::MemoryBackend;
pub use ssm::SsmBackend;

/// Errors raised by parameter store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The store has no parameter under this name.
    #[error("parameter {0} not found in the parameter store")]
    NotFound(String),
    /// The request itself failed (connectivity, permissions, throttling).
    #[error("parameter store request for {name} failed")]
    Backend {
        name: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl StoreError {
    pub(crate) fn backend(
        name: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Backend {
            name: name.into(),
            source: source.into(),
        }
    }

    /// Name of the parameter the failed operation was about.
    pub fn parameter_name(&self) -> &str {
        match self {
            Self::NotFound(name) => name,
            Self::Backend { name, .. } => name,
        }
    }
}

/// Storage the [`ParameterStore`] delegates to.
#[async_trait::async_trait]
pub trait ParameterBackend: Send + Sync {
    /// Store `value` under `name`, replacing any existing value.
    async fn put(&self, name: &str, value: &str) -> Result<(), StoreError>;

    /// Fetch the value stored under `name`.
    async fn fetch(&self, name: &str) -> Result<String, StoreError>;
}

/// Handle to the deployment's parameter store.
///
/// Cheap to clone; clones share the underlying backend.
#[derive(Clone)]
pub struct ParameterStore {
    backend: Arc<dyn ParameterBackend>,
}

impl ParameterStore {
    /// Wrap an explicit backend.
    pub fn with_backend(backend: impl ParameterBackend + 'static) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    /// Connect to AWS Systems Manager, optionally pinning the region.
    ///
    /// With no region the SDK's own resolution (profile, instance
    /// metadata) decides.
    pub async fn ssm(region: Option<String>) -> Self {
        Self::with_backend(SsmBackend::connect(region).await)
    }

    /// Connect to AWS Systems Manager in the region the environment
    /// names, if any.
    pub async fn from_environment(env: &Environment) -> Self {
        Self::ssm(env.aws_region().map(str::to_owned)).await
    }

    /// Store backed by an in-process map. Used in tests.
    pub fn in_memory() -> Self {
        Self::with_backend(MemoryBackend::new())
    }

    /// Write a parameter, overwriting any previous value.
    pub async fn put_parameter(&self, name: &str, value: &str) -> Result<(), StoreError> {
        self.backend.put(name, value).await
    }

    /// Read a parameter.
    ///
    /// On failure the parameter name is logged once and the error is
    /// returned unchanged for the caller to handle.
    pub async fn get_parameter(&self, name: &str) -> Result<String, StoreError> {
        match self.backend.fetch(name).await {
            Ok(value) => Ok(value),
            Err(error) => {
                tracing::error!(
                    parameter = %name,
                    error = %error,
                    "Failed to read parameter from parameter store"
                );
                Err(error)
            }
        }
    }
}
