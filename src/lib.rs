// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Deployment configuration for the account-abstraction services.
//!
//! Configuration comes from two places: the process environment, read
//! once into an [`Environment`] snapshot, and AWS Systems Manager for
//! values written and read at runtime through a [`ParameterStore`].
//! Failures propagate to the caller; this crate never retries, caches,
//! or substitutes defaults for configuration it cannot resolve.
//!
//! ## Modules
//!
//! - `chains` - chain id to network name mapping
//! - `config` - environment variable names
//! - `environment` - process environment snapshot and typed accessors
//! - `store` - remote parameter store client

pub mod chains;
pub mod config;
pub mod environment;
pub mod store;

pub use chains::{ChainNetwork, DEFAULT_NETWORK, find_network, KNOWN_NETWORKS, network_name};
pub use environment::{Environment, MissingVariable};
pub use store::{MemoryBackend, ParameterBackend, ParameterStore, SsmBackend, StoreError};
