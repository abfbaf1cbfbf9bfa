// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Chain identity for the networks the deployment can target.
//!
//! Chain ids travel through configuration as numeric strings (the form
//! `CHAIN_ID` carries them in); this module maps them to the short network
//! names used in per-network variable names such as `AA_API_KEY_<name>`.

/// A network the deployment knows how to target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainNetwork {
    /// Chain id as it appears in `CHAIN_ID`.
    pub chain_id: &'static str,
    /// Short network name used in per-network variable names.
    pub name: &'static str,
}

/// Ethereum Goerli testnet.
pub const GOERLI: ChainNetwork = ChainNetwork {
    chain_id: "5",
    name: "goerli",
};

/// Ethereum Sepolia testnet.
pub const SEPOLIA: ChainNetwork = ChainNetwork {
    chain_id: "11155111",
    name: "sepolia",
};

/// Polygon Mumbai testnet.
pub const MUMBAI: ChainNetwork = ChainNetwork {
    chain_id: "80001",
    name: "mumbai",
};

/// Polygon Amoy testnet.
pub const AMOY: ChainNetwork = ChainNetwork {
    chain_id: "80002",
    name: "amoy",
};

/// Every network the deployment recognizes.
pub const KNOWN_NETWORKS: [ChainNetwork; 4] = [GOERLI, SEPOLIA, MUMBAI, AMOY];

/// Network assumed when a chain id is not one of the known entries.
pub const DEFAULT_NETWORK: ChainNetwork = MUMBAI;

/// Strict lookup of a known network by chain id.
pub fn find_network(chain_id: &str) -> Option<ChainNetwork> {
    KNOWN_NETWORKS
        .iter()
        .copied()
        .find(|network| network.chain_id == chain_id)
}

/// Resolve a chain id to its network name.
///
/// Unrecognized ids resolve to [`DEFAULT_NETWORK`]'s name instead of
/// failing, so a misconfigured `CHAIN_ID` silently selects
/// `"mumbai"`-scoped keys. Callers that need to detect unknown ids should
/// use [`find_network`].
pub fn network_name(chain_id: &str) -> &'static str {
    find_network(chain_id)
        .map(|network| network.name)
        .unwrap_or(DEFAULT_NETWORK.name)
}
