/// Recommended deployer balance (0.01 ETH) before sending the deployment transactions.
pub(super) const MINIMUM_BALANCE_FOR_DEPLOYER: u128 = 10_000_000_000_000_000;
pub(super) const BAHAMUT_RPC_URL_ENV: &str = "BAHAMUT_RPC_URL";
pub(super) const BINARY_NAME: &str = "cyclebuddy";
