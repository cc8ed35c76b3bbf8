use std::path::PathBuf;

use clap::{Parser, Subcommand};
use cyclebuddy_cli_common::{
    config::{init_global_config, GlobalConfig},
    error::log_error,
    logger,
};
use xshell::Shell;

use crate::{
    commands::{
        args::AutocompleteArgs, deploy::DeployArgs, stellar::StellarCommands,
        verify::VerifyArgs, wallet::WalletCommands,
    },
    messages::{msg_project_dir, MSG_PROJECT_DIR_NOT_FOUND_ERR},
};

mod abi;
mod commands;
mod consts;
mod messages;
mod utils;

#[derive(Parser, Debug)]
#[command(name = "cyclebuddy", version, about)]
struct CycleBuddy {
    #[command(subcommand)]
    command: CycleBuddySubcommands,
    #[clap(flatten)]
    global: CycleBuddyGlobalArgs,
}

#[derive(Subcommand, Debug)]
pub enum CycleBuddySubcommands {
    /// Deploy CycleStreakToken and DailyRewards,
    /// grant DailyRewards the minter role and record the addresses
    Deploy(DeployArgs),
    /// Check a recorded deployment on chain
    Verify(VerifyArgs),
    /// Compile the Hardhat project
    Compile,
    /// Deployer wallet related commands
    #[command(subcommand)]
    Wallet(WalletCommands),
    /// Stellar / Soroban network settings used by the front-end
    #[command(subcommand)]
    Stellar(StellarCommands),
    /// Create shell autocompletion files
    Autocomplete(AutocompleteArgs),
}

#[derive(Parser, Debug)]
#[clap(next_help_heading = "Global options")]
struct CycleBuddyGlobalArgs {
    /// Verbose mode
    #[clap(short, long, global = true)]
    verbose: bool,
    /// Hardhat project directory
    #[clap(long, global = true, default_value = ".")]
    project: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    human_panic::setup_panic!();

    // A missing `.env` is fine, the variables may come from the shell.
    dotenv::dotenv().ok();

    let args = CycleBuddy::parse();

    logger::new_empty_line();
    logger::intro();

    let shell = Shell::new()?;
    init_global_config(GlobalConfig {
        verbose: args.global.verbose,
    });

    match run_subcommand(args, &shell).await {
        Ok(_) => {}
        Err(error) => {
            log_error(error);
            std::process::exit(1);
        }
    }
    Ok(())
}

async fn run_subcommand(args: CycleBuddy, shell: &Shell) -> anyhow::Result<()> {
    anyhow::ensure!(
        shell.path_exists(&args.global.project),
        "{MSG_PROJECT_DIR_NOT_FOUND_ERR}: {}",
        args.global.project.display()
    );
    shell.change_dir(&args.global.project);
    logger::debug(msg_project_dir(&shell.current_dir()));

    match args.command {
        CycleBuddySubcommands::Deploy(args) => commands::deploy::run(args, shell).await?,
        CycleBuddySubcommands::Verify(args) => commands::verify::run(args, shell).await?,
        CycleBuddySubcommands::Compile => commands::compile::run(shell)?,
        CycleBuddySubcommands::Wallet(args) => commands::wallet::run(shell, args).await?,
        CycleBuddySubcommands::Stellar(args) => commands::stellar::run(args)?,
        CycleBuddySubcommands::Autocomplete(args) => commands::autocomplete::run(shell, args)?,
    }
    Ok(())
}
