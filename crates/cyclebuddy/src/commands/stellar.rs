use clap::{Parser, Subcommand};
use cyclebuddy_cli_common::logger;
use cyclebuddy_cli_config::SorobanConfig;
use cyclebuddy_cli_types::StellarNetwork;

use crate::messages::{msg_stellar_network, MSG_STELLAR_CONFIG, MSG_STELLAR_NETWORK_HELP};

#[derive(Subcommand, Debug)]
pub enum StellarCommands {
    /// Print the resolved Stellar / Soroban configuration
    Config(StellarConfigArgs),
}

#[derive(Debug, Parser)]
pub struct StellarConfigArgs {
    #[clap(long, help = MSG_STELLAR_NETWORK_HELP)]
    pub network: Option<StellarNetwork>,
}

pub fn run(args: StellarCommands) -> anyhow::Result<()> {
    match args {
        StellarCommands::Config(args) => show_config(args),
    }
}

fn show_config(args: StellarConfigArgs) -> anyhow::Result<()> {
    let config = SorobanConfig::from_env(args.network)?;

    logger::note(MSG_STELLAR_CONFIG, logger::object_to_string(&config));
    logger::outro(msg_stellar_network(
        &config.network.to_string(),
        config.network.is_testnet(),
        config.network.is_futurenet(),
    ));
    Ok(())
}
