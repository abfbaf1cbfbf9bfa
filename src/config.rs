// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Deployment Configuration Variables
//!
//! This module defines the environment variable names the deployment
//! consumes. Values are read through [`crate::Environment`], which is
//! snapshotted once at startup, rather than ad hoc from the process
//! environment.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Required |
//! |----------|-------------|----------|
//! | `AWS_REGION` | Target region for the parameter store client | No (SDK default chain applies) |
//! | `ARN_LAMBDA_SIGNING` | ARN of the transaction-signing Lambda | Yes |
//! | `ARN_S3_ASSET_BUCKET` | ARN of the asset S3 bucket | Yes |
//! | `CHAIN_ID` | Numeric-string chain id of the target network | Yes |
//! | `AA_ENTRY_POINT_ADDRESS` | ERC-4337 entry point contract address | Yes |
//! | `AA_WALLET_FACTORY_ADDRESS` | Smart wallet factory contract address | Yes |
//! | `AA_API_KEY_<network>` | Bundler API key for one network | Per network |
//! | `AA_POLICY_ID_<network>` | Alchemy gas policy id for one network | Per network |

/// Environment variable for the AWS region of the parameter store client.
///
/// Optional: when unset, the SDK's own default region chain decides.
pub const AWS_REGION_ENV: &str = "AWS_REGION";

/// Environment variable holding the ARN of the transaction-signing Lambda.
pub const SIGNING_LAMBDA_ARN_ENV: &str = "ARN_LAMBDA_SIGNING";

/// Environment variable holding the ARN of the asset S3 bucket.
pub const S3_ASSET_BUCKET_ARN_ENV: &str = "ARN_S3_ASSET_BUCKET";

/// Environment variable holding the chain id of the target network.
///
/// The value is a numeric string (e.g. `"80002"`); see [`crate::chains`]
/// for the networks the deployment recognizes.
pub const CHAIN_ID_ENV: &str = "CHAIN_ID";

/// Environment variable holding the ERC-4337 entry point contract address.
pub const ENTRY_POINT_ADDRESS_ENV: &str = "AA_ENTRY_POINT_ADDRESS";

/// Environment variable holding the smart wallet factory contract address.
pub const WALLET_FACTORY_ADDRESS_ENV: &str = "AA_WALLET_FACTORY_ADDRESS";

/// Prefix of the per-network bundler API key variables.
pub const API_KEY_VAR_PREFIX: &str = "AA_API_KEY_";

/// Prefix of the per-network Alchemy gas policy id variables.
pub const POLICY_ID_VAR_PREFIX: &str = "AA_POLICY_ID_";

/// Variable name carrying the bundler API key for `network`.
///
/// The network name is concatenated exactly as given; it is not
/// case-transformed or otherwise normalized.
pub fn api_key_var(network: &str) -> String {
    format!("{API_KEY_VAR_PREFIX}{network}")
}

/// Variable name carrying the Alchemy gas policy id for `network`.
///
/// Same exact-concatenation rule as [`api_key_var`].
pub fn policy_id_var(network: &str) -> String {
    format!("{POLICY_ID_VAR_PREFIX}{network}")
}
