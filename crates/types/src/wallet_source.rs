use serde::{Deserialize, Serialize};

/// Where the deployer's signing key came from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
pub enum WalletSource {
    /// `DEPLOYER_PRIVATE_KEY`, possibly loaded from `.env`.
    #[strum(to_string = "environment")]
    Env,
    /// The uncommitted wallets file.
    #[strum(to_string = "wallets file")]
    File,
    /// Account 0 of the Hardhat development mnemonic, localhost only.
    #[strum(to_string = "development mnemonic")]
    DevMnemonic,
}
