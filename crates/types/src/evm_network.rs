use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// 20 gwei, the price the Bahamut testnet accepts without a fee market.
const BAHAMUT_GAS_PRICE_WEI: u64 = 20_000_000_000;

#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    ValueEnum,
    EnumIter,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum EvmNetwork {
    #[default]
    Localhost,
    Bahamut,
    /// Any node reachable through `--rpc-url`; its chain ID is taken from the node.
    Custom,
}

impl EvmNetwork {
    /// Chain ID the node is expected to report, `None` for [`EvmNetwork::Custom`].
    #[must_use]
    pub fn chain_id(&self) -> Option<u64> {
        match self {
            EvmNetwork::Localhost => Some(1337),
            EvmNetwork::Bahamut => Some(38),
            EvmNetwork::Custom => None,
        }
    }

    #[must_use]
    pub fn default_rpc_url(&self) -> Option<&'static str> {
        match self {
            EvmNetwork::Localhost => Some("http://127.0.0.1:8545"),
            EvmNetwork::Bahamut => Some("https://testnet.rpc.bahamut.io"),
            EvmNetwork::Custom => None,
        }
    }

    /// Fixed legacy gas price in wei. `None` leaves pricing to the node.
    #[must_use]
    pub fn gas_price(&self) -> Option<u64> {
        match self {
            EvmNetwork::Bahamut => Some(BAHAMUT_GAS_PRICE_WEI),
            EvmNetwork::Localhost | EvmNetwork::Custom => None,
        }
    }

    /// Blocks to wait for after each transaction. Local and custom nodes may
    /// only mine on demand, so they wait for inclusion alone.
    #[must_use]
    pub fn confirmations(&self) -> usize {
        match self {
            EvmNetwork::Bahamut => 6,
            EvmNetwork::Localhost | EvmNetwork::Custom => 1,
        }
    }

    /// Whether the well-known development accounts may sign on this network.
    #[must_use]
    pub fn allows_dev_accounts(&self) -> bool {
        matches!(self, EvmNetwork::Localhost)
    }
}
