/// Name of the optional project configuration file
pub const PROJECT_CONFIG_FILE: &str = "cyclebuddy.yaml";
/// Name of the wallets file, never to be committed
pub const WALLETS_FILE: &str = "wallets.yaml";
/// Flat deployment record read by the front-end
pub const FRONTEND_ADDRESSES_FILE: &str = "deployed-addresses.json";

pub const DEFAULT_ARTIFACTS_PATH: &str = "artifacts";
pub const DEFAULT_DEPLOYMENTS_PATH: &str = "deployments";

pub const TOKEN_CONTRACT_NAME: &str = "CycleStreakToken";
pub const REWARDS_CONTRACT_NAME: &str = "DailyRewards";

pub const DEPLOYER_PRIVATE_KEY_ENV: &str = "DEPLOYER_PRIVATE_KEY";
