use std::path::{Path, PathBuf};

use ethers::{abi::Abi, types::Bytes};
use serde::Deserialize;
use xshell::Shell;

#[derive(thiserror::Error, Debug)]
pub enum ArtifactError {
    #[error("Artifact {path:?} not found, run `cyclebuddy compile` first")]
    NotFound { path: PathBuf },
    #[error("Artifact {path:?} is not valid Hardhat output: {source}")]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("{name} has no creation bytecode (interface or abstract contract)")]
    NotDeployable { name: String },
    #[error(transparent)]
    Io(#[from] xshell::Error),
}

/// The parts of a Hardhat artifact needed to deploy and call a contract.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HardhatArtifact {
    pub contract_name: String,
    #[serde(default)]
    pub source_name: Option<String>,
    pub abi: Abi,
    pub bytecode: Bytes,
}

/// Identifies an artifact inside `artifacts/contracts/`.
///
/// Hardhat lays artifacts out as `<source>.sol/<contract>.json`; the source
/// file can differ from the contract name, as with `CycleStreakToken.local.sol`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactRef {
    pub contract: String,
    pub source: String,
}

impl ArtifactRef {
    pub fn new(contract: &str) -> Self {
        Self {
            contract: contract.to_owned(),
            source: contract.to_owned(),
        }
    }

    /// `source` may be given with or without the `.sol` suffix.
    pub fn with_source(mut self, source: &str) -> Self {
        self.source = source.trim_end_matches(".sol").to_owned();
        self
    }

    pub fn path(&self, artifacts_path: &Path) -> PathBuf {
        artifacts_path
            .join("contracts")
            .join(format!("{}.sol", self.source))
            .join(format!("{}.json", self.contract))
    }
}

impl HardhatArtifact {
    pub fn load(
        shell: &Shell,
        artifacts_path: &Path,
        artifact: &ArtifactRef,
    ) -> Result<Self, ArtifactError> {
        let path = artifact.path(artifacts_path);
        if !shell.path_exists(&path) {
            return Err(ArtifactError::NotFound { path });
        }
        let content = shell.read_file(&path)?;
        Self::parse(&content, path)
    }

    fn parse(content: &str, path: PathBuf) -> Result<Self, ArtifactError> {
        let artifact: HardhatArtifact = serde_json::from_str(content)
            .map_err(|source| ArtifactError::Malformed { path, source })?;
        if artifact.bytecode.is_empty() {
            return Err(ArtifactError::NotDeployable {
                name: artifact.contract_name,
            });
        }
        Ok(artifact)
    }

    pub fn has_function(&self, name: &str) -> bool {
        self.abi.functions.contains_key(name)
    }

    /// `<sourceName>:<contractName>`, which tells `hardhat verify` apart
    /// contracts sharing a name across source files.
    pub fn fully_qualified_name(&self) -> Option<String> {
        self.source_name
            .as_ref()
            .map(|source| format!("{source}:{}", self.contract_name))
    }
}
