use clap::Subcommand;
use xshell::Shell;

use crate::commands::wallet::{generate::GenerateWalletArgs, show::ShowWalletArgs};

mod generate;
mod show;

#[derive(Subcommand, Debug)]
pub enum WalletCommands {
    /// Generate a random deployer wallet
    Generate(GenerateWalletArgs),
    /// Show the deployer account and its balance
    Show(ShowWalletArgs),
}

pub(crate) async fn run(shell: &Shell, args: WalletCommands) -> anyhow::Result<()> {
    match args {
        WalletCommands::Generate(args) => generate::run(args, shell),
        WalletCommands::Show(args) => show::run(args, shell).await,
    }
}
