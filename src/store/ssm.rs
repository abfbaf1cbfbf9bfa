// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! AWS Systems Manager parameter backend.

use aws_config::BehaviorVersion;
use aws_sdk_ssm::config::Region;
use aws_sdk_ssm::operation::get_parameter::GetParameterError;
use aws_sdk_ssm::types::ParameterType;
use aws_sdk_ssm::Client;

use super::{ParameterBackend, StoreError};

/// Parameter backend talking to AWS Systems Manager.
#[derive(Debug, Clone)]
pub struct SsmBackend {
    client: Client,
}

impl SsmBackend {
    /// Connect using the default credential chain, optionally pinning the
    /// region. With no region the SDK's own resolution decides.
    pub async fn connect(region: Option<String>) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = region {
            loader = loader.region(Region::new(region));
        }
        let config = loader.load().await;
        Self::new(Client::new(&config))
    }

    /// Wrap an already configured client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl ParameterBackend for SsmBackend {
    async fn put(&self, name: &str, value: &str) -> Result<(), StoreError> {
        self.client
            .put_parameter()
            .name(name)
            .value(value)
            .r#type(ParameterType::String)
            .overwrite(true)
            .send()
            .await
            .map_err(|error| StoreError::backend(name, error))?;
        Ok(())
    }

    async fn fetch(&self, name: &str) -> Result<String, StoreError> {
        let output = self
            .client
            .get_parameter()
            .name(name)
            .send()
            .await
            .map_err(|error| {
                if error
                    .as_service_error()
                    .is_some_and(GetParameterError::is_parameter_not_found)
                {
                    StoreError::NotFound(name.to_owned())
                } else {
                    StoreError::backend(name, error)
                }
            })?;

        output
            .parameter
            .and_then(|parameter| parameter.value)
            .ok_or_else(|| StoreError::NotFound(name.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use aws_sdk_ssm::config::retry::RetryConfig;
    use aws_sdk_ssm::config::{Credentials, Region};

    use super::*;

    #[tokio::test]
    async fn unreachable_endpoint_maps_to_a_backend_error() {
        let config = aws_sdk_ssm::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new("eu-west-2"))
            .endpoint_url("http://127.0.0.1:9")
            .credentials_provider(Credentials::new("akid", "secret", None, None, "static-test"))
            .retry_config(RetryConfig::disabled())
            .build();
        let backend = SsmBackend::new(Client::from_conf(config));

        let error = backend.fetch("/deploy/param").await.unwrap_err();
        assert!(matches!(&error, StoreError::Backend { name, .. } if name == "/deploy/param"));
        assert_eq!(error.parameter_name(), "/deploy/param");
    }
}
