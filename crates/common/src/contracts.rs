use std::path::Path;

use xshell::{cmd, Shell};

use crate::cmd::Cmd;

/// Compiles the Solidity sources of a Hardhat project into `artifacts/`.
pub fn compile_hardhat_project(shell: &Shell, project_dir: &Path) -> anyhow::Result<()> {
    let _dir_guard = shell.push_dir(project_dir);
    Ok(Cmd::new(cmd!(shell, "npx hardhat compile")).run()?)
}

/// Version of the Hardhat package the project resolves through `npx`.
pub fn hardhat_version(shell: &Shell, project_dir: &Path) -> anyhow::Result<String> {
    let _dir_guard = shell.push_dir(project_dir);
    Ok(Cmd::new(cmd!(shell, "npx hardhat --version")).run_with_output()?)
}

/// One `hardhat verify` run: publishes the source of a deployed contract on
/// the block explorer configured for `network` in the Hardhat config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceVerification {
    pub network: String,
    pub address: String,
    /// Fully qualified name such as `contracts/bahamut/DailyRewards.sol:DailyRewards`.
    pub contract: Option<String>,
    pub constructor_args: Vec<String>,
}

impl SourceVerification {
    pub fn args(&self) -> Vec<String> {
        let mut args = vec!["--network".to_owned(), self.network.clone()];
        if let Some(contract) = &self.contract {
            args.push("--contract".to_owned());
            args.push(contract.clone());
        }
        args.push(self.address.clone());
        args.extend(self.constructor_args.iter().cloned());
        args
    }
}

pub fn verify_hardhat_contract(
    shell: &Shell,
    project_dir: &Path,
    verification: &SourceVerification,
) -> anyhow::Result<()> {
    let _dir_guard = shell.push_dir(project_dir);
    let args = verification.args();
    Ok(Cmd::new(cmd!(shell, "npx hardhat verify {args...}")).run()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_args_put_constructor_args_last() {
        let verification = SourceVerification {
            network: "bahamut".to_owned(),
            address: "0xe7f1725E7734CE288F8367e1Bb143E90bb3F0512".to_owned(),
            contract: Some("contracts/bahamut/DailyRewards.sol:DailyRewards".to_owned()),
            constructor_args: vec!["0x5FbDB2315678afecb367f032d93F642f64180aa3".to_owned()],
        };
        assert_eq!(
            verification.args(),
            [
                "--network",
                "bahamut",
                "--contract",
                "contracts/bahamut/DailyRewards.sol:DailyRewards",
                "0xe7f1725E7734CE288F8367e1Bb143E90bb3F0512",
                "0x5FbDB2315678afecb367f032d93F642f64180aa3",
            ]
        );
    }

    #[test]
    fn verify_args_without_contract_name() {
        let verification = SourceVerification {
            network: "localhost".to_owned(),
            address: "0x5FbDB2315678afecb367f032d93F642f64180aa3".to_owned(),
            contract: None,
            constructor_args: vec![],
        };
        assert_eq!(
            verification.args(),
            ["--network", "localhost", "0x5FbDB2315678afecb367f032d93F642f64180aa3"]
        );
    }
}
