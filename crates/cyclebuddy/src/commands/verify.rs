use std::{path::PathBuf, sync::Arc};

use anyhow::Context;
use clap::Parser;
use cyclebuddy_cli_common::{
    ethereum::{format_address, has_code},
    logger,
};
use cyclebuddy_cli_config::{traits::ReadConfig, DeployedContracts, DeploymentFile, ProjectConfig};
use cyclebuddy_cli_types::DeploymentLayout;
use ethers::providers::Middleware;
use xshell::Shell;

use crate::{
    abi::{CycleStreakTokenAbi, DailyRewardsAbi},
    commands::args::NetworkArgs,
    messages::{
        msg_check_in_window, msg_reading_deployment, msg_record_chain_mismatch,
        msg_token_details, MSG_DEPLOYMENT_FILE_HELP, MSG_DEPLOYMENT_FILE_NOT_FOUND_ERR,
        MSG_VERIFICATION_FAILED_ERR, MSG_VERIFICATION_PASSED, MSG_VERIFYING,
    },
    utils::connect::connect,
};

#[derive(Debug, Parser)]
pub struct VerifyArgs {
    #[clap(flatten)]
    pub network: NetworkArgs,
    #[clap(long, help = MSG_DEPLOYMENT_FILE_HELP)]
    pub deployment: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Check {
    description: String,
    passed: bool,
}

impl Check {
    fn new(description: impl Into<String>, passed: bool) -> Self {
        Self {
            description: description.into(),
            passed,
        }
    }
}

pub async fn run(args: VerifyArgs, shell: &Shell) -> anyhow::Result<()> {
    let project_dir = shell.current_dir();
    let project = ProjectConfig::load_or_default(shell, &project_dir)?;

    let path = match args.deployment {
        Some(path) => path,
        None => find_deployment_file(shell, &project, &args.network)?,
    };
    logger::info(msg_reading_deployment(&path));
    let deployment = DeploymentFile::read(shell, &path)?;

    let connection = connect(&args.network, args.network.rpc_url(&project)?).await?;
    if let Some(recorded) = deployment.chain_id() {
        anyhow::ensure!(
            recorded == connection.chain_id,
            msg_record_chain_mismatch(recorded, connection.chain_id)
        );
    }

    let client = Arc::new(connection.provider);
    verify_deployment(client.clone(), deployment.contracts()).await?;
    log_contract_details(client, deployment.contracts()).await?;

    logger::outro(MSG_VERIFICATION_PASSED);
    Ok(())
}

/// Nested record of the selected network first, then the front-end file.
fn find_deployment_file(
    shell: &Shell,
    project: &ProjectConfig,
    network: &NetworkArgs,
) -> anyhow::Result<PathBuf> {
    let project_dir = shell.current_dir();
    [DeploymentLayout::Nested, DeploymentLayout::Flat]
        .into_iter()
        .map(|layout| {
            DeploymentFile::default_path(
                &project_dir,
                &project.deployments_path,
                &network.network.to_string(),
                layout,
            )
        })
        .find(|path| shell.path_exists(path))
        .context(MSG_DEPLOYMENT_FILE_NOT_FOUND_ERR)
}

/// Checks that both contracts exist and are wired together, reporting
/// every check before failing.
pub async fn verify_deployment<M: Middleware + 'static>(
    client: Arc<M>,
    contracts: &DeployedContracts,
) -> anyhow::Result<()> {
    logger::step(MSG_VERIFYING);
    let checks = run_checks(client, contracts).await?;
    report(&checks)
}

async fn run_checks<M: Middleware + 'static>(
    client: Arc<M>,
    contracts: &DeployedContracts,
) -> anyhow::Result<Vec<Check>> {
    let mut checks = Vec::new();
    let mut all_deployed = true;
    for (name, address) in contracts.iter() {
        if address.is_zero() {
            checks.push(Check::new(format!("{name} address is not set"), false));
            all_deployed = false;
            continue;
        }
        let deployed = has_code(client.as_ref(), address).await?;
        checks.push(Check::new(
            format!("{name} has code at {}", format_address(address)),
            deployed,
        ));
        all_deployed &= deployed;
    }
    // Calls into an address without code decode garbage.
    if !all_deployed {
        return Ok(checks);
    }

    let token = CycleStreakTokenAbi::new(contracts.cycle_streak_token, client.clone());
    let is_minter = token
        .is_minter(contracts.daily_rewards)
        .call()
        .await
        .context("Failed to call CycleStreakToken.isMinter")?;
    checks.push(Check::new(
        "DailyRewards is a minter of CycleStreakToken",
        is_minter,
    ));

    let rewards = DailyRewardsAbi::new(contracts.daily_rewards, client);
    let linked_token = rewards
        .cycle_streak_token()
        .call()
        .await
        .context("Failed to call DailyRewards.cycleStreakToken")?;
    checks.push(Check::new(
        format!(
            "DailyRewards mints CycleStreakToken (points at {})",
            format_address(linked_token)
        ),
        linked_token == contracts.cycle_streak_token,
    ));

    Ok(checks)
}

fn report(checks: &[Check]) -> anyhow::Result<()> {
    for check in checks {
        if check.passed {
            logger::success(&check.description);
        } else {
            logger::error(&check.description);
        }
    }
    let failed = checks.iter().filter(|check| !check.passed).count();
    anyhow::ensure!(
        failed == 0,
        "{MSG_VERIFICATION_FAILED_ERR}: {failed} of {} checks failed",
        checks.len()
    );
    Ok(())
}

async fn log_contract_details<M: Middleware + 'static>(
    client: Arc<M>,
    contracts: &DeployedContracts,
) -> anyhow::Result<()> {
    let token = CycleStreakTokenAbi::new(contracts.cycle_streak_token, client.clone());
    let name = token.name().call().await?;
    let symbol = token.symbol().call().await?;
    logger::info(msg_token_details(&name, &symbol));

    let rewards = DailyRewardsAbi::new(contracts.daily_rewards, client);
    let minimum = rewards.minimum_check_in_interval().call().await?;
    let maximum = rewards.maximum_check_in_interval().call().await?;
    logger::info(msg_check_in_window(minimum, maximum));
    Ok(())
}
