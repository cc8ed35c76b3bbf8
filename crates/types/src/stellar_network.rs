use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString};

pub const FUTURENET_PASSPHRASE: &str = "Test SDF Future Network ; October 2022";
pub const TESTNET_PASSPHRASE: &str = "Test SDF Network ; September 2015";
pub const PUBLIC_PASSPHRASE: &str = "Public Global Stellar Network ; September 2015";

/// Stellar networks the CycleBuddy front-end can talk to through Soroban.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum StellarNetwork {
    Futurenet,
    #[default]
    Testnet,
    #[strum(to_string = "mainnet", serialize = "public")]
    Mainnet,
}

impl StellarNetwork {
    pub fn passphrase(&self) -> &'static str {
        match self {
            StellarNetwork::Futurenet => FUTURENET_PASSPHRASE,
            StellarNetwork::Testnet => TESTNET_PASSPHRASE,
            StellarNetwork::Mainnet => PUBLIC_PASSPHRASE,
        }
    }

    /// SDF does not run a public Soroban RPC for mainnet.
    pub fn soroban_rpc_url(&self) -> Option<&'static str> {
        match self {
            StellarNetwork::Futurenet => Some("https://rpc-futurenet.stellar.org"),
            StellarNetwork::Testnet => Some("https://soroban-testnet.stellar.org"),
            StellarNetwork::Mainnet => None,
        }
    }

    pub fn horizon_url(&self) -> &'static str {
        match self {
            StellarNetwork::Futurenet => "https://horizon-futurenet.stellar.org",
            StellarNetwork::Testnet => "https://horizon-testnet.stellar.org",
            StellarNetwork::Mainnet => "https://horizon.stellar.org",
        }
    }

    pub fn is_testnet(&self) -> bool {
        *self == StellarNetwork::Testnet
    }

    pub fn is_futurenet(&self) -> bool {
        *self == StellarNetwork::Futurenet
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn passphrases() {
        assert_eq!(
            StellarNetwork::Testnet.passphrase(),
            "Test SDF Network ; September 2015"
        );
        assert_eq!(
            StellarNetwork::Futurenet.passphrase(),
            "Test SDF Future Network ; October 2022"
        );
        assert_eq!(
            StellarNetwork::Mainnet.passphrase(),
            "Public Global Stellar Network ; September 2015"
        );
    }

    #[test]
    fn default_is_testnet() {
        assert!(StellarNetwork::default().is_testnet());
        assert!(!StellarNetwork::default().is_futurenet());
    }

    #[test]
    fn parses_names() {
        assert_eq!(
            StellarNetwork::from_str("FUTURENET").unwrap(),
            StellarNetwork::Futurenet
        );
        assert_eq!(
            StellarNetwork::from_str("public").unwrap(),
            StellarNetwork::Mainnet
        );
        assert!(StellarNetwork::from_str("devnet").is_err());
    }

    #[test]
    fn urls_are_https() {
        for network in StellarNetwork::iter() {
            assert!(network.horizon_url().starts_with("https://"));
            if let Some(rpc) = network.soroban_rpc_url() {
                assert!(rpc.starts_with("https://"));
            }
        }
    }
}
