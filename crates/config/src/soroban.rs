use std::str::FromStr;

use anyhow::Context;
use cyclebuddy_cli_types::StellarNetwork;
use serde::Serialize;
use url::Url;

/// A real token contract on Stellar testnet, used until the CycleBuddy
/// contracts are deployed there.
pub const PLACEHOLDER_CONTRACT_ID: &str = "CDODVYRDXBFQS5M45IV4UULMCEGWPVIQ3MK7JJV3XPS7AUGED3ZXKUIP";

const STRKEY_LEN: usize = 56;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SorobanContractIds {
    pub registry: String,
    pub auth: String,
    pub data: String,
    pub community: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SorobanConfig {
    pub network: StellarNetwork,
    pub network_passphrase: String,
    pub soroban_rpc_url: Option<Url>,
    pub horizon_url: Url,
    pub contracts: SorobanContractIds,
}

impl Default for SorobanContractIds {
    fn default() -> Self {
        Self {
            registry: PLACEHOLDER_CONTRACT_ID.to_owned(),
            auth: PLACEHOLDER_CONTRACT_ID.to_owned(),
            data: PLACEHOLDER_CONTRACT_ID.to_owned(),
            community: PLACEHOLDER_CONTRACT_ID.to_owned(),
        }
    }
}

impl SorobanConfig {
    /// Built-in endpoints of `network` with placeholder contract IDs.
    pub fn for_network(network: StellarNetwork) -> Self {
        Self {
            network,
            network_passphrase: network.passphrase().to_owned(),
            soroban_rpc_url: network
                .soroban_rpc_url()
                .map(|url| Url::parse(url).expect("built-in Soroban URL is valid")),
            horizon_url: Url::parse(network.horizon_url()).expect("built-in Horizon URL is valid"),
            contracts: SorobanContractIds::default(),
        }
    }

    /// Reads the process environment. An explicit `network` replaces
    /// `STELLAR_NETWORK`; the other overrides still apply.
    pub fn from_env(network: Option<StellarNetwork>) -> anyhow::Result<Self> {
        Self::from_lookup_with_network(network, |key| std::env::var(key).ok())
    }

    /// Resolves the configuration from `STELLAR_NETWORK`, `STELLAR_RPC_URL`,
    /// `HORIZON_URL` and the `*_CONTRACT_ID` variables.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        Self::from_lookup_with_network(None, lookup)
    }

    pub fn from_lookup_with_network(
        network: Option<StellarNetwork>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> anyhow::Result<Self> {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let network = match (network, get("STELLAR_NETWORK")) {
            (Some(network), _) => network,
            (None, Some(name)) => StellarNetwork::from_str(name.trim())
                .with_context(|| format!("Unknown STELLAR_NETWORK {name:?}"))?,
            (None, None) => StellarNetwork::default(),
        };
        let mut config = Self::for_network(network);

        if let Some(url) = get("STELLAR_RPC_URL") {
            config.soroban_rpc_url = Some(Url::parse(&url).context("Invalid STELLAR_RPC_URL")?);
        }
        if let Some(url) = get("HORIZON_URL") {
            config.horizon_url = Url::parse(&url).context("Invalid HORIZON_URL")?;
        }

        let contract = |key: &str| -> anyhow::Result<String> {
            match get(key) {
                Some(id) => {
                    let id = id.trim().to_owned();
                    anyhow::ensure!(is_contract_id(&id), "{key} is not a Soroban contract ID");
                    Ok(id)
                }
                None => Ok(PLACEHOLDER_CONTRACT_ID.to_owned()),
            }
        };
        config.contracts = SorobanContractIds {
            registry: contract("REGISTRY_CONTRACT_ID")?,
            auth: contract("AUTH_CONTRACT_ID")?,
            data: contract("DATA_CONTRACT_ID")?,
            community: contract("COMMUNITY_CONTRACT_ID")?,
        };

        Ok(config)
    }
}

/// Contract strkeys are 56 base32 characters starting with `C`.
pub fn is_contract_id(id: &str) -> bool {
    id.len() == STRKEY_LEN
        && id.starts_with('C')
        && id
            .bytes()
            .all(|b| b.is_ascii_uppercase() || (b'2'..=b'7').contains(&b))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_to_testnet() {
        let config = SorobanConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.network, StellarNetwork::Testnet);
        assert_eq!(config.network_passphrase, "Test SDF Network ; September 2015");
        assert_eq!(
            config.soroban_rpc_url.unwrap().as_str(),
            "https://soroban-testnet.stellar.org/"
        );
        assert_eq!(config.contracts, SorobanContractIds::default());
    }

    #[test]
    fn mainnet_has_no_default_rpc() {
        let config = SorobanConfig::from_lookup(lookup(&[("STELLAR_NETWORK", "mainnet")])).unwrap();
        assert_eq!(
            config.network_passphrase,
            "Public Global Stellar Network ; September 2015"
        );
        assert!(config.soroban_rpc_url.is_none());
        assert_eq!(config.horizon_url.as_str(), "https://horizon.stellar.org/");
    }

    #[test]
    fn env_overrides_apply() {
        let registry = "CA3D5KRYM6CB7OWQ6TWYRR3Z4T7GNZLKERYNZGGA5SOAOPIFY6YQGAXE";
        let config = SorobanConfig::from_lookup(lookup(&[
            ("STELLAR_NETWORK", "futurenet"),
            ("STELLAR_RPC_URL", "http://localhost:8000/soroban/rpc"),
            ("REGISTRY_CONTRACT_ID", registry),
            ("AUTH_CONTRACT_ID", "  "),
        ]))
        .unwrap();
        assert!(config.network.is_futurenet());
        assert_eq!(
            config.soroban_rpc_url.unwrap().as_str(),
            "http://localhost:8000/soroban/rpc"
        );
        assert_eq!(config.contracts.registry, registry);
        assert_eq!(config.contracts.auth, PLACEHOLDER_CONTRACT_ID);
    }

    #[test]
    fn explicit_network_keeps_env_overrides() {
        let config = SorobanConfig::from_lookup_with_network(
            Some(StellarNetwork::Mainnet),
            lookup(&[
                ("STELLAR_NETWORK", "testnet"),
                ("HORIZON_URL", "http://localhost:8000"),
                ("COMMUNITY_CONTRACT_ID", PLACEHOLDER_CONTRACT_ID),
            ]),
        )
        .unwrap();
        assert_eq!(config.network, StellarNetwork::Mainnet);
        assert_eq!(
            config.network_passphrase,
            "Public Global Stellar Network ; September 2015"
        );
        assert_eq!(config.horizon_url.as_str(), "http://localhost:8000/");
        assert_eq!(config.contracts.community, PLACEHOLDER_CONTRACT_ID);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(SorobanConfig::from_lookup(lookup(&[("STELLAR_NETWORK", "devnet")])).is_err());
        assert!(SorobanConfig::from_lookup(lookup(&[("DATA_CONTRACT_ID", "GABC")])).is_err());
        assert!(SorobanConfig::from_lookup(lookup(&[("HORIZON_URL", "::")])).is_err());
    }

    #[test]
    fn contract_id_shape() {
        assert!(is_contract_id(PLACEHOLDER_CONTRACT_ID));
        assert!(!is_contract_id(&PLACEHOLDER_CONTRACT_ID.replacen('C', "G", 1)));
        assert!(!is_contract_id(&PLACEHOLDER_CONTRACT_ID.to_lowercase()));
        assert!(!is_contract_id("C1BBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBB"));
    }
}
