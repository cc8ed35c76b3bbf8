use std::path::Path;

use cyclebuddy_cli_common::{
    ethereum::{check_chain_id, create_provider},
    logger,
};
use cyclebuddy_cli_config::{deployer_key_from_env, resolve_deployer, DeployerAccount};
use ethers::providers::{Http, Provider};
use url::Url;
use xshell::Shell;

use crate::{
    commands::args::{NetworkArgs, WalletsArgs},
    messages::{msg_connected_to, msg_deployer_account},
};

/// A read-only connection whose chain ID has been checked against the network.
pub struct Connection {
    pub provider: Provider<Http>,
    pub rpc_url: Url,
    pub chain_id: u64,
}

pub async fn connect(args: &NetworkArgs, rpc_url: Url) -> anyhow::Result<Connection> {
    let provider = create_provider(rpc_url.as_str())?;
    let chain_id = check_chain_id(&provider, args.network.chain_id()).await?;
    logger::info(msg_connected_to(args.network, chain_id, rpc_url.as_str()));
    Ok(Connection {
        provider,
        rpc_url,
        chain_id,
    })
}

pub fn load_deployer(
    shell: &Shell,
    network: &NetworkArgs,
    wallets: &WalletsArgs,
    project_dir: &Path,
) -> anyhow::Result<DeployerAccount> {
    let account = resolve_deployer(
        shell,
        network.network,
        deployer_key_from_env(),
        &wallets.wallets_path(project_dir),
    )?;
    logger::info(msg_deployer_account(account.wallet.address, account.source));
    Ok(account)
}
