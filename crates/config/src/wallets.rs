use std::path::Path;

use anyhow::Context;
use cyclebuddy_cli_common::wallets::Wallet;
use cyclebuddy_cli_types::{EvmNetwork, WalletSource};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use xshell::Shell;

use crate::{
    consts::{DEPLOYER_PRIVATE_KEY_ENV, WALLETS_FILE},
    traits::{FileConfigTrait, FileConfigWithDefaultName, ReadConfig},
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalletsConfig {
    pub deployer: Wallet,
}

impl FileConfigTrait for WalletsConfig {}

impl FileConfigWithDefaultName for WalletsConfig {
    const FILE_NAME: &'static str = WALLETS_FILE;
}

/// The account that signs the deployment, and where its key was found.
#[derive(Debug, Clone)]
pub struct DeployerAccount {
    pub wallet: Wallet,
    pub source: WalletSource,
}

/// Reads `DEPLOYER_PRIVATE_KEY`. An empty value counts as unset.
pub fn deployer_key_from_env() -> Option<SecretString> {
    std::env::var(DEPLOYER_PRIVATE_KEY_ENV)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(SecretString::new)
}

/// Picks the deployer: the environment key, then the wallets file, then
/// (localhost only) the first development account.
pub fn resolve_deployer(
    shell: &Shell,
    network: EvmNetwork,
    env_key: Option<SecretString>,
    wallets_path: &Path,
) -> anyhow::Result<DeployerAccount> {
    if let Some(secret) = env_key {
        let wallet = Wallet::from_secret(&secret)
            .with_context(|| format!("{DEPLOYER_PRIVATE_KEY_ENV} is not a valid private key"))?;
        return Ok(DeployerAccount {
            wallet,
            source: WalletSource::Env,
        });
    }

    if shell.path_exists(wallets_path) {
        let wallets = WalletsConfig::read(shell, wallets_path)?;
        anyhow::ensure!(
            wallets.deployer.private_key.is_some(),
            "Deployer wallet in {wallets_path:?} has no private key"
        );
        return Ok(DeployerAccount {
            wallet: wallets.deployer,
            source: WalletSource::File,
        });
    }

    if network.allows_dev_accounts() {
        return Ok(DeployerAccount {
            wallet: Wallet::dev_account(0)?,
            source: WalletSource::DevMnemonic,
        });
    }

    anyhow::bail!(
        "No deployer key for {network}: set {DEPLOYER_PRIVATE_KEY_ENV} or create {wallets_path:?} with `cyclebuddy wallet generate --save`"
    )
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use ethers::types::Address;

    use super::*;
    use crate::traits::SaveConfig;

    const HARDHAT_ACCOUNT_1_KEY: &str =
        "0x59c6995e998f97a5a0044966f0945389dc9e86dae88c7a8412f4603b6b78690d";

    fn dev_address(index: u32) -> Address {
        Wallet::dev_account(index).unwrap().address
    }

    #[test]
    fn env_key_takes_precedence() {
        let dir = tempfile::tempdir().unwrap();
        let shell = Shell::new().unwrap();
        let wallets_path = dir.path().join(WALLETS_FILE);
        WalletsConfig {
            deployer: Wallet::dev_account(2).unwrap(),
        }
        .save(&shell, &wallets_path)
        .unwrap();

        let account = resolve_deployer(
            &shell,
            EvmNetwork::Bahamut,
            Some(SecretString::new(HARDHAT_ACCOUNT_1_KEY.into())),
            &wallets_path,
        )
        .unwrap();
        assert_eq!(account.source, WalletSource::Env);
        assert_eq!(account.wallet.address, dev_address(1));
    }

    #[test]
    fn wallets_file_is_used_without_env() {
        let dir = tempfile::tempdir().unwrap();
        let shell = Shell::new().unwrap();
        let wallets_path = dir.path().join(WALLETS_FILE);
        WalletsConfig {
            deployer: Wallet::dev_account(2).unwrap(),
        }
        .save(&shell, &wallets_path)
        .unwrap();

        let account = resolve_deployer(&shell, EvmNetwork::Bahamut, None, &wallets_path).unwrap();
        assert_eq!(account.source, WalletSource::File);
        assert_eq!(account.wallet.address, dev_address(2));
    }

    #[test]
    fn dev_account_only_on_localhost() {
        let dir = tempfile::tempdir().unwrap();
        let shell = Shell::new().unwrap();
        let wallets_path = dir.path().join(WALLETS_FILE);

        let account =
            resolve_deployer(&shell, EvmNetwork::Localhost, None, &wallets_path).unwrap();
        assert_eq!(account.source, WalletSource::DevMnemonic);
        assert_eq!(
            account.wallet.address,
            Address::from_str("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266").unwrap()
        );

        let err = resolve_deployer(&shell, EvmNetwork::Bahamut, None, &wallets_path).unwrap_err();
        assert!(err.to_string().contains(DEPLOYER_PRIVATE_KEY_ENV));
    }

    #[test]
    fn wallets_file_without_key_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let shell = Shell::new().unwrap();
        let wallets_path = dir.path().join(WALLETS_FILE);
        let mut deployer = Wallet::dev_account(0).unwrap();
        deployer.private_key = None;
        WalletsConfig { deployer }.save(&shell, &wallets_path).unwrap();

        assert!(resolve_deployer(&shell, EvmNetwork::Localhost, None, &wallets_path).is_err());
    }

    #[test]
    fn invalid_env_key_is_reported_by_name() {
        let dir = tempfile::tempdir().unwrap();
        let shell = Shell::new().unwrap();
        let err = resolve_deployer(
            &shell,
            EvmNetwork::Localhost,
            Some(SecretString::new("nope".into())),
            &dir.path().join(WALLETS_FILE),
        )
        .unwrap_err();
        assert!(err.to_string().contains(DEPLOYER_PRIVATE_KEY_ENV));
    }
}
