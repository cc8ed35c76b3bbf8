use std::path::PathBuf;

use clap::Parser;
use cyclebuddy_cli_config::{ArtifactRef, REWARDS_CONTRACT_NAME, TOKEN_CONTRACT_NAME};
use cyclebuddy_cli_types::DeploymentLayout;

use crate::{
    commands::args::{NetworkArgs, WalletsArgs},
    messages::{
        MSG_LAYOUT_HELP, MSG_OUT_HELP, MSG_REWARDS_SOURCE_HELP, MSG_SKIP_VERIFY_HELP,
        MSG_TOKEN_OWNER_ARG_HELP, MSG_TOKEN_SOURCE_HELP, MSG_VERIFY_SOURCE_HELP, MSG_YES_HELP,
    },
};

#[derive(Debug, Parser)]
pub struct DeployArgs {
    #[clap(flatten)]
    pub network: NetworkArgs,
    #[clap(flatten)]
    pub wallets: WalletsArgs,
    #[clap(long, help = MSG_TOKEN_SOURCE_HELP)]
    pub token_source: Option<String>,
    #[clap(long, help = MSG_REWARDS_SOURCE_HELP)]
    pub rewards_source: Option<String>,
    #[clap(long, help = MSG_TOKEN_OWNER_ARG_HELP)]
    pub token_owner_arg: bool,
    #[clap(long, value_enum, default_value_t, help = MSG_LAYOUT_HELP)]
    pub layout: DeploymentLayout,
    #[clap(long, help = MSG_OUT_HELP)]
    pub out: Option<PathBuf>,
    #[clap(long, short, help = MSG_YES_HELP)]
    pub yes: bool,
    #[clap(long, help = MSG_SKIP_VERIFY_HELP)]
    pub skip_verify: bool,
    #[clap(long, help = MSG_VERIFY_SOURCE_HELP)]
    pub verify_source: bool,
}

impl DeployArgs {
    pub fn token_artifact(&self) -> ArtifactRef {
        artifact_ref(TOKEN_CONTRACT_NAME, self.token_source.as_deref())
    }

    pub fn rewards_artifact(&self) -> ArtifactRef {
        artifact_ref(REWARDS_CONTRACT_NAME, self.rewards_source.as_deref())
    }
}

fn artifact_ref(contract: &str, source: Option<&str>) -> ArtifactRef {
    let artifact = ArtifactRef::new(contract);
    match source {
        Some(source) => artifact.with_source(source),
        None => artifact,
    }
}
