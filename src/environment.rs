// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Snapshot of the process environment with typed accessors.
//!
//! Construction reads the environment exactly once; everything downstream
//! receives the [`Environment`] value instead of reaching for ambient
//! process state. A variable that is unset or set to the empty string is
//! treated as missing. Values are otherwise passed through verbatim, so
//! whitespace in a value survives to the caller.

use std::collections::HashMap;

use crate::chains;
use crate::config;

/// A required environment variable was unset or empty.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("environment variable {0} not found")]
pub struct MissingVariable(pub String);

/// Immutable snapshot of environment variables.
#[derive(Debug, Clone)]
pub struct Environment {
    vars: HashMap<String, String>,
}

impl Environment {
    /// Snapshot the current process environment.
    ///
    /// Entries whose name or value is not valid unicode are skipped.
    pub fn from_process() -> Self {
        let vars = std::env::vars_os()
            .filter_map(|(name, value)| {
                Some((name.into_string().ok()?, value.into_string().ok()?))
            })
            .collect();
        Self { vars }
    }

    /// Build an environment from explicit pairs. Used by tests and by
    /// callers that source configuration from somewhere other than the
    /// process environment.
    pub fn from_pairs<N, V>(pairs: impl IntoIterator<Item = (N, V)>) -> Self
    where
        N: Into<String>,
        V: Into<String>,
    {
        let vars = pairs
            .into_iter()
            .map(|(name, value)| (name.into(), value.into()))
            .collect();
        Self { vars }
    }

    /// Look up a variable, treating empty values as absent.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars
            .get(name)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    /// Look up a variable that must be present and non-empty.
    pub fn require(&self, name: &str) -> Result<String, MissingVariable> {
        self.get(name)
            .map(str::to_owned)
            .ok_or_else(|| MissingVariable(name.to_owned()))
    }

    /// AWS region for the parameter store client, if configured.
    ///
    /// Absent means the client falls back to the SDK's own region
    /// resolution.
    pub fn aws_region(&self) -> Option<&str> {
        self.get(config::AWS_REGION_ENV)
    }

    /// ARN of the lambda that signs transactions.
    pub fn signing_lambda_arn(&self) -> Result<String, MissingVariable> {
        self.require(config::SIGNING_LAMBDA_ARN_ENV)
    }

    /// ARN of the S3 bucket holding token assets.
    pub fn s3_asset_bucket_arn(&self) -> Result<String, MissingVariable> {
        self.require(config::S3_ASSET_BUCKET_ARN_ENV)
    }

    /// Chain id of the network this deployment targets.
    pub fn chain_id(&self) -> Result<String, MissingVariable> {
        self.require(config::CHAIN_ID_ENV)
    }

    /// Address of the account-abstraction entry point contract.
    pub fn entry_point_address(&self) -> Result<String, MissingVariable> {
        self.require(config::ENTRY_POINT_ADDRESS_ENV)
    }

    /// Address of the smart wallet factory contract.
    pub fn wallet_factory_address(&self) -> Result<String, MissingVariable> {
        self.require(config::WALLET_FACTORY_ADDRESS_ENV)
    }

    /// Bundler API key for the given network name.
    ///
    /// The network name is interpolated into the variable name as-is; the
    /// caller is expected to pass the short names from [`crate::chains`].
    pub fn api_key(&self, network: &str) -> Result<String, MissingVariable> {
        self.require(&config::api_key_var(network))
    }

    /// Gas sponsorship policy id for the given network name.
    pub fn alchemy_policy_id(&self, network: &str) -> Result<String, MissingVariable> {
        self.require(&config::policy_id_var(network))
    }

    /// Short name of the configured network, resolved through the chain
    /// identity table. Unknown chain ids resolve to the default network's
    /// name; a missing `CHAIN_ID` is still an error.
    pub fn chain_name(&self) -> Result<&'static str, MissingVariable> {
        Ok(chains::network_name(&self.chain_id()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_returns_the_configured_value() {
        let env = Environment::from_pairs([("CHAIN_ID", "80002")]);
        assert_eq!(env.require("CHAIN_ID").unwrap(), "80002");
    }

    #[test]
    fn require_rejects_an_unset_variable() {
        let env = Environment::from_pairs::<&str, &str>([]);
        assert_eq!(
            env.require("CHAIN_ID"),
            Err(MissingVariable("CHAIN_ID".to_owned()))
        );
    }

    #[test]
    fn require_rejects_an_empty_variable() {
        let env = Environment::from_pairs([("CHAIN_ID", "")]);
        assert_eq!(
            env.require("CHAIN_ID"),
            Err(MissingVariable("CHAIN_ID".to_owned()))
        );
    }

    #[test]
    fn values_pass_through_verbatim() {
        let env = Environment::from_pairs([("ARN_LAMBDA_SIGNING", " padded ")]);
        assert_eq!(env.signing_lambda_arn().unwrap(), " padded ");
    }

    #[test]
    fn missing_variable_names_the_variable() {
        let error = MissingVariable("AA_ENTRY_POINT_ADDRESS".to_owned());
        assert_eq!(
            error.to_string(),
            "environment variable AA_ENTRY_POINT_ADDRESS not found"
        );
    }

    #[test]
    fn fixed_accessors_read_their_variables() {
        let env = Environment::from_pairs([
            ("ARN_LAMBDA_SIGNING", "arn:aws:lambda:us-east-1:1:function:sign"),
            ("ARN_S3_ASSET_BUCKET", "arn:aws:s3:::assets"),
            ("CHAIN_ID", "11155111"),
            ("AA_ENTRY_POINT_ADDRESS", "0x0576a174D229E3cFA37253523E645A78A0C91B57"),
            ("AA_WALLET_FACTORY_ADDRESS", "0x9406Cc6185a346906296840746125a0E44976454"),
        ]);
        assert_eq!(
            env.signing_lambda_arn().unwrap(),
            "arn:aws:lambda:us-east-1:1:function:sign"
        );
        assert_eq!(env.s3_asset_bucket_arn().unwrap(), "arn:aws:s3:::assets");
        assert_eq!(env.chain_id().unwrap(), "11155111");
        assert_eq!(
            env.entry_point_address().unwrap(),
            "0x0576a174D229E3cFA37253523E645A78A0C91B57"
        );
        assert_eq!(
            env.wallet_factory_address().unwrap(),
            "0x9406Cc6185a346906296840746125a0E44976454"
        );
    }

    #[test]
    fn api_key_interpolates_the_network_name_exactly() {
        let env = Environment::from_pairs([
            ("AA_API_KEY_sepolia", "key-sepolia"),
            ("AA_POLICY_ID_sepolia", "policy-sepolia"),
        ]);
        assert_eq!(env.api_key("sepolia").unwrap(), "key-sepolia");
        assert_eq!(env.alchemy_policy_id("sepolia").unwrap(), "policy-sepolia");

        // No case normalization happens on the way in.
        assert_eq!(
            env.api_key("Sepolia"),
            Err(MissingVariable("AA_API_KEY_Sepolia".to_owned()))
        );
    }

    #[test]
    fn chain_name_resolves_known_ids() {
        let env = Environment::from_pairs([("CHAIN_ID", "5")]);
        assert_eq!(env.chain_name().unwrap(), "goerli");
    }

    #[test]
    fn chain_name_falls_back_for_unknown_ids() {
        let env = Environment::from_pairs([("CHAIN_ID", "424242")]);
        assert_eq!(env.chain_name().unwrap(), "mumbai");
    }

    #[test]
    fn chain_name_still_requires_a_chain_id() {
        let env = Environment::from_pairs::<&str, &str>([]);
        assert_eq!(
            env.chain_name(),
            Err(MissingVariable("CHAIN_ID".to_owned()))
        );
    }

    #[test]
    fn aws_region_is_optional() {
        let env = Environment::from_pairs::<&str, &str>([]);
        assert_eq!(env.aws_region(), None);

        let env = Environment::from_pairs([("AWS_REGION", "")]);
        assert_eq!(env.aws_region(), None);

        let env = Environment::from_pairs([("AWS_REGION", "eu-west-2")]);
        assert_eq!(env.aws_region(), Some("eu-west-2"));
    }

    #[test]
    fn from_process_sees_the_process_environment() {
        temp_env::with_var("AA_CONFIG_SNAPSHOT_PROBE", Some("present"), || {
            let env = Environment::from_process();
            assert_eq!(env.get("AA_CONFIG_SNAPSHOT_PROBE"), Some("present"));
        });
    }

    #[test]
    fn from_process_omits_unset_variables() {
        temp_env::with_var_unset("AA_CONFIG_SNAPSHOT_ABSENT", || {
            let env = Environment::from_process();
            assert_eq!(env.get("AA_CONFIG_SNAPSHOT_ABSENT"), None);
        });
    }
}
