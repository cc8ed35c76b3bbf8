use std::path::Path;

use cyclebuddy_cli_common::ethereum::format_address;
use cyclebuddy_cli_types::{EvmNetwork, WalletSource};
use ethers::{
    types::{Address, H256, U256},
    utils::format_ether,
};

/// Common messages
pub(super) const MSG_PROJECT_DIR_NOT_FOUND_ERR: &str = "Project directory does not exist";
pub(super) const MSG_NETWORK_HELP: &str = "EVM network to use";
pub(super) const MSG_RPC_URL_HELP: &str =
    "RPC URL, overrides the project config and the network default";
pub(super) const MSG_WALLETS_PATH_HELP: &str =
    "Path to the wallets file [default: <project>/wallets.yaml]";
pub(super) const MSG_DEPLOYER_PK_NOT_SET_ERR: &str = "Deployer private key is not set";
pub(super) const MSG_CHAIN_ID_CHECKED: &str = "Connected to the node";

pub(super) fn msg_project_dir(path: &Path) -> String {
    format!("Using project directory {}", path.display())
}

pub(super) fn msg_connected_to(network: EvmNetwork, chain_id: u64, rpc_url: &str) -> String {
    format!("{MSG_CHAIN_ID_CHECKED}: {network} (chain ID {chain_id}) at {rpc_url}")
}

pub(super) fn msg_deployer_account(address: Address, source: WalletSource) -> String {
    format!(
        "Deployer account {} (from {source})",
        format_address(address)
    )
}

pub(super) fn msg_deployer_balance(balance: U256) -> String {
    format!("Deployer balance: {} ETH", format_ether(balance))
}

/// Autocomplete messages
pub(super) const MSG_AUTOCOMPLETE_OUT_HELP: &str =
    "Directory to write the completion file to, prints to stdout when omitted";
pub(super) fn msg_generate_autocomplete_file(filename: &str) -> String {
    format!("Generating completion file: {filename}")
}
pub(super) const MSG_OUTRO_AUTOCOMPLETE_GENERATION: &str =
    "Autocompletion file correctly generated";

/// Balance check messages
pub(super) const MSG_BALANCE_CONTINUE: &str = "Proceed with the deployment";
pub(super) const MSG_BALANCE_CHECK_AGAIN: &str = "Check the balance again";
pub(super) const MSG_BALANCE_EXIT: &str = "Exit";
pub(super) const MSG_BALANCE_CHECK_ABORTED_ERR: &str = "Deployment aborted by user";

pub(super) fn msg_address_doesnt_have_enough_money_prompt(
    address: Address,
    actual: U256,
    expected: U256,
) -> String {
    let actual = format_ether(actual);
    let expected = format_ether(expected);
    format!(
        "It is recommended to have {expected} ETH on the address {} to deploy contracts. Current balance is {actual} ETH. How do you want to proceed?",
        format_address(address)
    )
}

pub(super) fn msg_low_balance_skipped(actual: U256, expected: U256) -> String {
    format!(
        "Balance {} ETH is below the recommended {} ETH, continuing because of --yes",
        format_ether(actual),
        format_ether(expected)
    )
}

/// Deploy related messages
pub(super) const MSG_TOKEN_SOURCE_HELP: &str =
    "Solidity source file of CycleStreakToken, e.g. CycleStreakToken.local.sol";
pub(super) const MSG_REWARDS_SOURCE_HELP: &str = "Solidity source file of DailyRewards";
pub(super) const MSG_TOKEN_OWNER_ARG_HELP: &str =
    "Pass the deployer address as `initialOwner` to the token constructor";
pub(super) const MSG_LAYOUT_HELP: &str = "Layout of the deployment record";
pub(super) const MSG_OUT_HELP: &str =
    "Where to write the deployment record [default: deployments/<network>.json]";
pub(super) const MSG_YES_HELP: &str = "Do not prompt when the deployer balance is low";
pub(super) const MSG_SKIP_VERIFY_HELP: &str = "Skip the on-chain check after deploying";
pub(super) const MSG_VERIFY_SOURCE_HELP: &str =
    "Publish contract sources with `npx hardhat verify` after deploying";
pub(super) const MSG_DEPLOYING: &str = "Deploying CycleBuddy contracts";
pub(super) const MSG_GRANTING_MINTER_SPINNER: &str = "Granting minter role to DailyRewards...";
pub(super) const MSG_VERIFYING_SOURCES: &str = "Publishing contract sources";
pub(super) const MSG_SOURCE_VERIFICATION_LOCALHOST: &str =
    "Source verification needs a block explorer, skipping it on localhost";
pub(super) const MSG_DEPLOYMENT_SUMMARY: &str = "Deployment summary";
pub(super) const MSG_DEPLOYMENT_COMPLETE: &str = "Deployment completed successfully";

pub(super) fn msg_loaded_artifact(name: &str, path: &Path) -> String {
    format!("Loaded {name} artifact from {}", path.display())
}

pub(super) fn msg_deploying_contract_spinner(name: &str) -> String {
    format!("Deploying {name}...")
}

pub(super) fn msg_contract_deployed(name: &str, address: Address, tx_hash: H256) -> String {
    format!(
        "{name} deployed at {} (tx {tx_hash:#x})",
        format_address(address)
    )
}

pub(super) fn msg_deploy_failed(name: &str) -> String {
    format!("Failed to deploy {name}")
}

pub(super) fn msg_transaction_dropped(what: &str) -> String {
    format!("{what} transaction was dropped from the mempool")
}

pub(super) fn msg_source_verified(name: &str) -> String {
    format!("{name} source verified")
}

pub(super) fn msg_source_verification_failed(name: &str) -> String {
    format!("Could not verify {name} source, run `npx hardhat verify` by hand")
}

pub(super) fn msg_transaction_reverted(what: &str, tx_hash: H256) -> String {
    format!("{what} reverted (tx {tx_hash:#x})")
}

pub(super) fn msg_minter_granted(minter: Address, tx_hash: H256) -> String {
    format!(
        "Minter role granted to {} (tx {tx_hash:#x})",
        format_address(minter)
    )
}

pub(super) fn msg_deployment_saved(path: &Path) -> String {
    format!("Deployment record saved to {}", path.display())
}

pub(super) fn msg_missing_function(contract: &str, function: &str) -> String {
    format!("{contract} artifact has no {function} function, is it the CycleBuddy contract?")
}

pub(super) fn msg_token_owner_arg_hint(name: &str) -> String {
    format!("{name} constructor expects an argument, rerun with --token-owner-arg")
}

/// Verify related messages
pub(super) const MSG_DEPLOYMENT_FILE_HELP: &str =
    "Deployment record to check [default: deployments/<network>.json, then deployed-addresses.json]";
pub(super) const MSG_VERIFYING: &str = "Checking the deployment on chain";
pub(super) const MSG_VERIFICATION_PASSED: &str = "All deployment checks passed";
pub(super) const MSG_VERIFICATION_FAILED_ERR: &str = "Deployment check failed";
pub(super) const MSG_DEPLOYMENT_FILE_NOT_FOUND_ERR: &str =
    "No deployment record found, pass --deployment";

pub(super) fn msg_reading_deployment(path: &Path) -> String {
    format!("Reading deployment record {}", path.display())
}

pub(super) fn msg_record_chain_mismatch(recorded: u64, actual: u64) -> String {
    format!("Deployment record was written for chain ID {recorded}, node reports {actual}")
}

pub(super) fn msg_token_details(name: &str, symbol: &str) -> String {
    format!("Token: {name} ({symbol})")
}

pub(super) fn msg_check_in_window(minimum: u32, maximum: u32) -> String {
    format!("DailyRewards check-in window: {minimum}s to {maximum}s")
}

/// Compile related messages
pub(super) const MSG_COMPILING_SPINNER: &str = "Compiling contracts with Hardhat...";
pub(super) const MSG_COMPILED: &str = "Contracts compiled";

pub(super) fn msg_hardhat_version(version: &str) -> String {
    format!("Hardhat {version}")
}

/// Wallet related messages
pub(super) const MSG_SAVE_WALLET_HELP: &str = "Save the wallet to the wallets file instead of printing the key";
pub(super) const MSG_WALLET_GENERATED: &str = "New wallet generated";
pub(super) const MSG_STORE_KEY_SECURELY: &str =
    "Store this private key securely and never share it. Fund the address before deploying.";
pub(super) const MSG_WALLETS_FILE_COMMENT: &str =
    "Deployer wallet generated by cyclebuddy. Do not commit this file.";
pub(super) const MSG_WALLET_NOT_OVERWRITTEN: &str = "Existing wallets file kept";
pub(super) const MSG_WALLET_ACCOUNT: &str = "Deployer wallet";

pub(super) fn msg_wallets_file_exists_prompt(path: &Path) -> String {
    format!("{} already exists. Overwrite it?", path.display())
}

pub(super) fn msg_wallet_saved(address: Address, path: &Path) -> String {
    format!(
        "Wallet {} saved to {}",
        format_address(address),
        path.display()
    )
}

pub(super) fn msg_generated_wallet(address: Address, private_key: H256) -> String {
    format!(
        "Address: {}\nPrivate key: {private_key:#x}\nPrivate key (without 0x): {private_key:x}",
        format_address(address)
    )
}

pub(super) fn msg_wallet_details(
    address: Address,
    source: WalletSource,
    network: EvmNetwork,
    balance: U256,
) -> String {
    format!(
        "Address: {}\nSource: {source}\nBalance on {network}: {} ETH",
        format_address(address),
        format_ether(balance)
    )
}

/// Stellar related messages
pub(super) const MSG_STELLAR_NETWORK_HELP: &str =
    "Stellar network to show, overrides STELLAR_NETWORK (other variables still apply)";
pub(super) const MSG_STELLAR_CONFIG: &str = "Stellar configuration";

pub(super) fn msg_stellar_network(name: &str, testnet: bool, futurenet: bool) -> String {
    format!("Active Stellar network: {name} (testnet: {testnet}, futurenet: {futurenet})")
}
