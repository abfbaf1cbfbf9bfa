// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! In-process parameter backend used in tests.

use std::collections::HashMap;

use tokio::sync::RwLock;

use super::{ParameterBackend, StoreError};

/// Parameter backend holding values in a map. Last write wins.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend pre-seeded with the given parameters.
    pub fn with_values<N, V>(values: impl IntoIterator<Item = (N, V)>) -> Self
    where
        N: Into<String>,
        V: Into<String>,
    {
        let values = values
            .into_iter()
            .map(|(name, value)| (name.into(), value.into()))
            .collect();
        Self {
            values: RwLock::new(values),
        }
    }
}

#[async_trait::async_trait]
impl ParameterBackend for MemoryBackend {
    async fn put(&self, name: &str, value: &str) -> Result<(), StoreError> {
        self.values
            .write()
            .await
            .insert(name.to_owned(), value.to_owned());
        Ok(())
    }

    async fn fetch(&self, name: &str) -> Result<String, StoreError> {
        self.values
            .read()
            .await
            .get(name)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(name.to_owned()))
    }
}
