use clap::Parser;
use cyclebuddy_cli_common::{ethereum::get_balance, logger};
use cyclebuddy_cli_config::ProjectConfig;
use xshell::Shell;

use crate::{
    commands::args::{NetworkArgs, WalletsArgs},
    messages::{msg_wallet_details, MSG_WALLET_ACCOUNT},
    utils::connect::{connect, load_deployer},
};

#[derive(Debug, Parser)]
pub struct ShowWalletArgs {
    #[clap(flatten)]
    pub network: NetworkArgs,
    #[clap(flatten)]
    pub wallets: WalletsArgs,
}

pub async fn run(args: ShowWalletArgs, shell: &Shell) -> anyhow::Result<()> {
    let project_dir = shell.current_dir();
    let project = ProjectConfig::load_or_default(shell, &project_dir)?;
    let account = load_deployer(shell, &args.network, &args.wallets, &project_dir)?;

    let connection = connect(&args.network, args.network.rpc_url(&project)?).await?;
    let balance = get_balance(&connection.provider, account.wallet.address).await?;

    logger::note(
        MSG_WALLET_ACCOUNT,
        msg_wallet_details(
            account.wallet.address,
            account.source,
            args.network.network,
            balance,
        ),
    );
    logger::outro(MSG_WALLET_ACCOUNT);
    Ok(())
}
