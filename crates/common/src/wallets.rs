use std::str::FromStr;

use anyhow::Context;
use ethers::{
    signers::{coins_bip39::English, LocalWallet, MnemonicBuilder, Signer},
    types::{Address, H256},
};
use rand::{CryptoRng, Rng};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::ethereum::get_address_from_private_key;

/// The mnemonic every Hardhat and Anvil node funds by default. Its keys are public.
pub const DEV_MNEMONIC: &str = "test test test test test test test test test test test junk";
pub const DEV_DERIVATION_PATH: &str = "m/44'/60'/0'/0";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wallet {
    pub address: Address,
    pub private_key: Option<H256>,
}

impl Wallet {
    pub fn random<R>(rng: &mut R) -> Self
    where
        R: Rng + CryptoRng,
    {
        let wallet = LocalWallet::new(rng);
        Self {
            address: wallet.address(),
            private_key: Some(H256::from_slice(&wallet.signer().to_bytes())),
        }
    }

    pub fn new_with_key(private_key: H256) -> anyhow::Result<Self> {
        Ok(Self {
            address: get_address_from_private_key(&private_key)?,
            private_key: Some(private_key),
        })
    }

    /// Parses a hex private key, with or without the `0x` prefix.
    pub fn from_secret(secret: &SecretString) -> anyhow::Result<Self> {
        let raw = secret.expose_secret().trim();
        let hex = raw.strip_prefix("0x").unwrap_or(raw);
        anyhow::ensure!(
            hex.len() == 64,
            "Private key must be 32 bytes of hex, got {} characters",
            hex.len()
        );
        // The parse error would echo the input, so it is replaced.
        let private_key =
            H256::from_str(hex).map_err(|_| anyhow::anyhow!("Private key is not valid hex"))?;
        Self::new_with_key(private_key)
    }

    pub fn from_mnemonic(mnemonic: &str, base_path: &str, index: u32) -> anyhow::Result<Self> {
        let wallet = MnemonicBuilder::<English>::default()
            .phrase(mnemonic)
            .derivation_path(&format!("{}/{}", base_path, index))?
            .build()
            .context("Failed to derive wallet from mnemonic")?;
        Self::new_with_key(H256::from_slice(&wallet.signer().to_bytes()))
    }

    pub fn dev_account(index: u32) -> anyhow::Result<Self> {
        Self::from_mnemonic(DEV_MNEMONIC, DEV_DERIVATION_PATH, index)
    }

    pub fn private_key_h256(&self) -> Option<H256> {
        self.private_key
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dev_account_zero_is_hardhat_default() {
        let wallet = Wallet::dev_account(0).unwrap();
        assert_eq!(
            wallet.address,
            Address::from_str("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266").unwrap()
        );
        assert_eq!(
            wallet.private_key.unwrap(),
            H256::from_str("0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80")
                .unwrap()
        );
    }

    #[test]
    fn dev_account_one() {
        let wallet = Wallet::dev_account(1).unwrap();
        assert_eq!(
            wallet.address,
            Address::from_str("0x70997970C51812dc3A010C7d01b50e0d17dc79C8").unwrap()
        );
    }

    #[test]
    fn from_secret_accepts_both_prefixes() {
        let bare = SecretString::new(
            "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80".to_string(),
        );
        let prefixed = SecretString::new(
            "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80\n".to_string(),
        );
        let a = Wallet::from_secret(&bare).unwrap();
        let b = Wallet::from_secret(&prefixed).unwrap();
        assert_eq!(a.address, b.address);
    }

    #[test]
    fn from_secret_does_not_echo_the_key() {
        let secret = SecretString::new(format!("0x{}", "zz".repeat(32)));
        let err = Wallet::from_secret(&secret).unwrap_err().to_string();
        assert!(!err.contains("zz"));

        let short = SecretString::new("0x1234".to_string());
        assert!(Wallet::from_secret(&short).is_err());
    }

    #[test]
    fn random_wallet_address_matches_key() {
        let wallet = Wallet::random(&mut rand::thread_rng());
        let derived = get_address_from_private_key(&wallet.private_key.unwrap()).unwrap();
        assert_eq!(wallet.address, derived);
    }
}
