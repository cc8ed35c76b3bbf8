use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::Context;
use clap::Parser;
use cyclebuddy_cli_config::{
    traits::{comment_prefix, FileConfigWithDefaultName},
    ProjectConfig, WalletsConfig,
};
use cyclebuddy_cli_types::EvmNetwork;
use url::Url;

use crate::{
    consts::BAHAMUT_RPC_URL_ENV,
    messages::{MSG_NETWORK_HELP, MSG_RPC_URL_HELP, MSG_WALLETS_PATH_HELP},
};

/// Network selection shared by every command that talks to a node.
#[derive(Debug, Clone, Parser)]
pub struct NetworkArgs {
    #[clap(long, value_enum, default_value_t, help = MSG_NETWORK_HELP)]
    pub network: EvmNetwork,
    #[clap(long, help = MSG_RPC_URL_HELP)]
    pub rpc_url: Option<Url>,
}

/// Where to look for the deployer key when it is not in the environment.
#[derive(Debug, Clone, Parser)]
pub struct WalletsArgs {
    #[clap(long, help = MSG_WALLETS_PATH_HELP)]
    pub wallets: Option<PathBuf>,
}

impl NetworkArgs {
    /// `--rpc-url` wins, then `BAHAMUT_RPC_URL` for the Bahamut network, then
    /// the project config and the built-in default.
    pub fn rpc_url(&self, project: &ProjectConfig) -> anyhow::Result<Url> {
        let from_env = match self.network {
            EvmNetwork::Bahamut => bahamut_rpc_url_from_env()?,
            _ => None,
        };
        project.rpc_url(self.network, self.rpc_url.as_ref().or(from_env.as_ref()))
    }
}

impl WalletsArgs {
    pub fn wallets_path(&self, project_dir: &Path) -> PathBuf {
        self.wallets
            .clone()
            .unwrap_or_else(|| WalletsConfig::get_path_with_base_path(project_dir))
    }

    /// Like [`Self::wallets_path`], but rejects formats the wallet file
    /// cannot be written in before any key material is created.
    pub fn writable_wallets_path(&self, project_dir: &Path) -> anyhow::Result<PathBuf> {
        let path = self.wallets_path(project_dir);
        comment_prefix(&path)?;
        Ok(path)
    }
}

fn bahamut_rpc_url_from_env() -> anyhow::Result<Option<Url>> {
    match env::var(BAHAMUT_RPC_URL_ENV) {
        Ok(value) if !value.trim().is_empty() => Url::parse(value.trim())
            .with_context(|| format!("{BAHAMUT_RPC_URL_ENV} is not a valid URL"))
            .map(Some),
        _ => Ok(None),
    }
}
