use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use anyhow::Context;
use cyclebuddy_cli_types::EvmNetwork;
use serde::{Deserialize, Serialize};
use url::Url;
use xshell::Shell;

use crate::{
    consts::{DEFAULT_ARTIFACTS_PATH, DEFAULT_DEPLOYMENTS_PATH, PROJECT_CONFIG_FILE},
    traits::{FileConfigTrait, FileConfigWithDefaultName, ReadConfigWithBasePath},
};

/// Optional `cyclebuddy.yaml` next to the Hardhat project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectConfig {
    #[serde(default = "default_artifacts_path")]
    pub artifacts_path: PathBuf,
    #[serde(default = "default_deployments_path")]
    pub deployments_path: PathBuf,
    #[serde(default)]
    pub networks: BTreeMap<EvmNetwork, NetworkOverride>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkOverride {
    pub rpc_url: Option<Url>,
    /// Legacy gas price in wei
    pub gas_price: Option<u64>,
}

fn default_artifacts_path() -> PathBuf {
    PathBuf::from(DEFAULT_ARTIFACTS_PATH)
}

fn default_deployments_path() -> PathBuf {
    PathBuf::from(DEFAULT_DEPLOYMENTS_PATH)
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            artifacts_path: default_artifacts_path(),
            deployments_path: default_deployments_path(),
            networks: BTreeMap::new(),
        }
    }
}

impl FileConfigTrait for ProjectConfig {}

impl FileConfigWithDefaultName for ProjectConfig {
    const FILE_NAME: &'static str = PROJECT_CONFIG_FILE;
}

impl ProjectConfig {
    /// Reads `cyclebuddy.yaml` from `project_dir`, falling back to defaults when absent.
    pub fn load_or_default(shell: &Shell, project_dir: &Path) -> anyhow::Result<Self> {
        if !shell.path_exists(Self::get_path_with_base_path(project_dir)) {
            return Ok(Self::default());
        }
        Self::read_with_base_path(shell, project_dir)
    }

    pub fn artifacts_dir(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(&self.artifacts_path)
    }

    /// Endpoint precedence: command line, project config, built-in default.
    pub fn rpc_url(&self, network: EvmNetwork, cli_override: Option<&Url>) -> anyhow::Result<Url> {
        if let Some(url) = cli_override {
            return Ok(url.clone());
        }
        if let Some(url) = self
            .networks
            .get(&network)
            .and_then(|overrides| overrides.rpc_url.as_ref())
        {
            return Ok(url.clone());
        }
        let default = network
            .default_rpc_url()
            .with_context(|| format!("Network {network} has no default RPC URL, pass --rpc-url"))?;
        Ok(Url::parse(default)?)
    }

    pub fn gas_price(&self, network: EvmNetwork) -> Option<u64> {
        self.networks
            .get(&network)
            .and_then(|overrides| overrides.gas_price)
            .or_else(|| network.gas_price())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::SaveConfigWithBasePath;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let shell = Shell::new().unwrap();
        let config = ProjectConfig::load_or_default(&shell, dir.path()).unwrap();
        assert_eq!(config, ProjectConfig::default());
        assert_eq!(
            config.artifacts_dir(Path::new("/work")),
            Path::new("/work/artifacts")
        );
    }

    #[test]
    fn partial_file_fills_defaults() {
        let yaml = "networks:\n  bahamut:\n    rpc_url: https://rpc1.bahamut.io\n";
        let config: ProjectConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.deployments_path, Path::new("deployments"));
        assert_eq!(
            config.rpc_url(EvmNetwork::Bahamut, None).unwrap().as_str(),
            "https://rpc1.bahamut.io/"
        );
        assert_eq!(config.gas_price(EvmNetwork::Bahamut), Some(20_000_000_000));
    }

    #[test]
    fn cli_override_wins() {
        let config = ProjectConfig::default();
        let cli = Url::parse("http://10.0.0.2:8545").unwrap();
        assert_eq!(
            config.rpc_url(EvmNetwork::Localhost, Some(&cli)).unwrap(),
            cli
        );
        assert_eq!(
            config.rpc_url(EvmNetwork::Localhost, None).unwrap().as_str(),
            "http://127.0.0.1:8545/"
        );
    }

    #[test]
    fn custom_network_requires_rpc() {
        let config = ProjectConfig::default();
        let err = config.rpc_url(EvmNetwork::Custom, None).unwrap_err();
        assert!(err.to_string().contains("--rpc-url"));
    }

    #[test]
    fn saved_config_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let shell = Shell::new().unwrap();
        let mut config = ProjectConfig::default();
        config.networks.insert(
            EvmNetwork::Localhost,
            NetworkOverride {
                rpc_url: None,
                gas_price: Some(1),
            },
        );
        config.save_with_base_path(&shell, dir.path()).unwrap();

        let loaded = ProjectConfig::load_or_default(&shell, dir.path()).unwrap();
        assert_eq!(loaded.gas_price(EvmNetwork::Localhost), Some(1));
    }
}
