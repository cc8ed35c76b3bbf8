use std::{path::Path, sync::Arc};

use anyhow::Context;
use cyclebuddy_cli_common::{
    contracts::{verify_hardhat_contract, SourceVerification},
    ethereum::{create_ethers_client, format_address, SignerClient},
    logger,
    spinner::Spinner,
};
use cyclebuddy_cli_config::{
    traits::SaveConfig, ArtifactRef, DeployedContracts, DeploymentFile, DeploymentRecord,
    HardhatArtifact, ProjectConfig,
};
use cyclebuddy_cli_types::EvmNetwork;
use ethers::{
    abi::Token,
    contract::{builders::ContractCall, ContractFactory},
    providers::Middleware,
    types::{transaction::eip2718::TypedTransaction, Address, TransactionReceipt, U64},
};
use xshell::Shell;

pub use self::args::DeployArgs;
use crate::{
    abi::CycleStreakTokenAbi,
    commands::verify::verify_deployment,
    messages::{
        msg_contract_deployed, msg_deploy_failed, msg_deploying_contract_spinner,
        msg_deployment_saved, msg_loaded_artifact, msg_minter_granted, msg_missing_function,
        msg_source_verification_failed, msg_source_verified, msg_token_owner_arg_hint,
        msg_transaction_dropped, msg_transaction_reverted, MSG_DEPLOYER_PK_NOT_SET_ERR,
        MSG_DEPLOYING, MSG_DEPLOYMENT_COMPLETE, MSG_DEPLOYMENT_SUMMARY,
        MSG_GRANTING_MINTER_SPINNER, MSG_SOURCE_VERIFICATION_LOCALHOST, MSG_VERIFICATION_PASSED,
        MSG_VERIFYING_SOURCES,
    },
    utils::{
        balance::check_the_balance,
        connect::{connect, load_deployer},
    },
};

mod args;

const ADD_MINTER_FUNCTION: &str = "addMinter";

pub async fn run(args: DeployArgs, shell: &Shell) -> anyhow::Result<()> {
    logger::step(MSG_DEPLOYING);
    let project_dir = shell.current_dir();
    let project = ProjectConfig::load_or_default(shell, &project_dir)?;
    let network = args.network.network;

    let deployer = load_deployer(shell, &args.network, &args.wallets, &project_dir)?;
    let private_key = deployer
        .wallet
        .private_key_h256()
        .context(MSG_DEPLOYER_PK_NOT_SET_ERR)?;

    let artifacts_dir = project.artifacts_dir(&project_dir);
    let token_artifact = load_artifact(shell, &artifacts_dir, &args.token_artifact())?;
    let rewards_artifact = load_artifact(shell, &artifacts_dir, &args.rewards_artifact())?;
    anyhow::ensure!(
        token_artifact.has_function(ADD_MINTER_FUNCTION),
        msg_missing_function(&token_artifact.contract_name, ADD_MINTER_FUNCTION)
    );
    let token_constructor_args =
        token_constructor_args(&token_artifact, args.token_owner_arg, deployer.wallet.address)?;

    let connection = connect(&args.network, args.network.rpc_url(&project)?).await?;
    let client = Arc::new(create_ethers_client(
        private_key,
        connection.rpc_url.as_str(),
        connection.chain_id,
    )?);
    check_the_balance(client.as_ref(), deployer.wallet.address, args.yes).await?;

    let tx_settings = TxSettings {
        gas_price: project.gas_price(network),
        confirmations: network.confirmations(),
    };
    let token_address = deploy_contract(
        client.clone(),
        &token_artifact,
        token_constructor_args.clone(),
        tx_settings,
    )
    .await?;
    let rewards_constructor_args = vec![Token::Address(token_address)];
    let rewards_address = deploy_contract(
        client.clone(),
        &rewards_artifact,
        rewards_constructor_args.clone(),
        tx_settings,
    )
    .await?;
    add_minter(client.clone(), token_address, rewards_address, tx_settings).await?;

    let contracts = DeployedContracts {
        cycle_streak_token: token_address,
        daily_rewards: rewards_address,
    };
    let record = DeploymentRecord::new(
        network.to_string(),
        connection.chain_id,
        deployer.wallet.address,
        contracts,
    )
    .into_layout(args.layout);
    let out = args.out.clone().unwrap_or_else(|| {
        DeploymentFile::default_path(
            &project_dir,
            &project.deployments_path,
            &network.to_string(),
            args.layout,
        )
    });
    record.save(shell, &out)?;
    logger::info(msg_deployment_saved(&out));
    logger::note(MSG_DEPLOYMENT_SUMMARY, logger::object_to_string(&record));

    if !args.skip_verify {
        verify_deployment(client, &contracts).await?;
        logger::success(MSG_VERIFICATION_PASSED);
    }

    if args.verify_source {
        let verifications = [
            (
                &token_artifact,
                source_verification(
                    network,
                    &token_artifact,
                    token_address,
                    &token_constructor_args,
                ),
            ),
            (
                &rewards_artifact,
                source_verification(
                    network,
                    &rewards_artifact,
                    rewards_address,
                    &rewards_constructor_args,
                ),
            ),
        ];
        verify_sources(shell, &project_dir, network, &verifications);
    }

    logger::outro(MSG_DEPLOYMENT_COMPLETE);
    Ok(())
}

/// Gas and confirmation settings shared by every transaction of a run.
#[derive(Debug, Clone, Copy)]
struct TxSettings {
    /// Set on Bahamut, which needs legacy transactions at a fixed price.
    gas_price: Option<u64>,
    confirmations: usize,
}

fn load_artifact(
    shell: &Shell,
    artifacts_dir: &Path,
    artifact: &ArtifactRef,
) -> anyhow::Result<HardhatArtifact> {
    let loaded = HardhatArtifact::load(shell, artifacts_dir, artifact)?;
    logger::debug(msg_loaded_artifact(
        &loaded.contract_name,
        &artifact.path(artifacts_dir),
    ));
    Ok(loaded)
}

/// The token takes `initialOwner` only in its OpenZeppelin 5 variant.
fn token_constructor_args(
    artifact: &HardhatArtifact,
    pass_owner: bool,
    owner: Address,
) -> anyhow::Result<Vec<Token>> {
    let expects_args = artifact
        .abi
        .constructor()
        .is_some_and(|constructor| !constructor.inputs.is_empty());
    if pass_owner {
        return Ok(vec![Token::Address(owner)]);
    }
    anyhow::ensure!(
        !expects_args,
        msg_token_owner_arg_hint(&artifact.contract_name)
    );
    Ok(vec![])
}

/// Creation transaction for `artifact`, constructor args appended to the bytecode.
fn deployment_tx<M: Middleware + 'static>(
    client: Arc<M>,
    artifact: &HardhatArtifact,
    constructor_args: Vec<Token>,
    gas_price: Option<u64>,
) -> anyhow::Result<TypedTransaction> {
    let factory = ContractFactory::new(artifact.abi.clone(), artifact.bytecode.clone(), client);
    let deployer = factory.deploy_tokens(constructor_args)?;
    let tx = match gas_price {
        Some(gas_price) => {
            let mut tx = deployer.legacy().tx;
            tx.set_gas_price(gas_price);
            tx
        }
        None => deployer.tx,
    };
    Ok(tx)
}

async fn deploy_contract(
    client: Arc<SignerClient>,
    artifact: &HardhatArtifact,
    constructor_args: Vec<Token>,
    settings: TxSettings,
) -> anyhow::Result<Address> {
    let name = artifact.contract_name.as_str();
    let spinner = Spinner::new(&msg_deploying_contract_spinner(name));

    let result = async {
        let tx = deployment_tx(client.clone(), artifact, constructor_args, settings.gas_price)?;
        let receipt = client
            .send_transaction(tx, None)
            .await?
            .confirmations(settings.confirmations)
            .await?;
        let receipt = confirmed_receipt(receipt, name)?;
        let address = receipt
            .contract_address
            .with_context(|| msg_deploy_failed(name))?;
        anyhow::Ok((address, receipt.transaction_hash))
    }
    .await
    .with_context(|| msg_deploy_failed(name));

    match result {
        Ok((address, tx_hash)) => {
            spinner.finish();
            logger::info(msg_contract_deployed(name, address, tx_hash));
            Ok(address)
        }
        Err(err) => {
            spinner.fail();
            Err(err)
        }
    }
}

fn add_minter_call<M: Middleware>(
    client: Arc<M>,
    token: Address,
    minter: Address,
    gas_price: Option<u64>,
) -> ContractCall<M, ()> {
    let call = CycleStreakTokenAbi::new(token, client).add_minter(minter);
    match gas_price {
        Some(gas_price) => call.legacy().gas_price(gas_price),
        None => call,
    }
}

async fn add_minter(
    client: Arc<SignerClient>,
    token: Address,
    minter: Address,
    settings: TxSettings,
) -> anyhow::Result<()> {
    let spinner = Spinner::new(MSG_GRANTING_MINTER_SPINNER);

    let result = async {
        let call = add_minter_call(client, token, minter, settings.gas_price);
        let receipt = call
            .send()
            .await?
            .confirmations(settings.confirmations)
            .await?;
        let receipt = confirmed_receipt(receipt, ADD_MINTER_FUNCTION)?;
        anyhow::Ok(receipt.transaction_hash)
    }
    .await;

    match result {
        Ok(tx_hash) => {
            spinner.finish();
            logger::info(msg_minter_granted(minter, tx_hash));
            Ok(())
        }
        Err(err) => {
            spinner.fail();
            Err(err)
        }
    }
}

/// A pending transaction resolves to `None` when the node drops it.
fn confirmed_receipt(
    receipt: Option<TransactionReceipt>,
    what: &str,
) -> anyhow::Result<TransactionReceipt> {
    let receipt = receipt.with_context(|| msg_transaction_dropped(what))?;
    ensure_success(&receipt, what)?;
    Ok(receipt)
}

fn ensure_success(receipt: &TransactionReceipt, what: &str) -> anyhow::Result<()> {
    anyhow::ensure!(
        receipt.status == Some(U64::one()),
        msg_transaction_reverted(what, receipt.transaction_hash)
    );
    Ok(())
}

fn source_verification(
    network: EvmNetwork,
    artifact: &HardhatArtifact,
    address: Address,
    constructor_args: &[Token],
) -> SourceVerification {
    SourceVerification {
        network: network.to_string(),
        address: format_address(address),
        contract: artifact.fully_qualified_name(),
        constructor_args: constructor_args
            .iter()
            .map(|arg| match arg {
                Token::Address(address) => format_address(*address),
                other => other.to_string(),
            })
            .collect(),
    }
}

/// Explorer verification is best effort: the contracts are already deployed
/// and recorded, so a failure only warns.
fn verify_sources(
    shell: &Shell,
    project_dir: &Path,
    network: EvmNetwork,
    verifications: &[(&HardhatArtifact, SourceVerification)],
) {
    if network == EvmNetwork::Localhost {
        logger::warn(MSG_SOURCE_VERIFICATION_LOCALHOST);
        return;
    }
    logger::step(MSG_VERIFYING_SOURCES);
    for (artifact, verification) in verifications {
        let name = artifact.contract_name.as_str();
        match verify_hardhat_contract(shell, project_dir, verification) {
            Ok(()) => logger::success(msg_source_verified(name)),
            Err(err) => {
                logger::warn(msg_source_verification_failed(name));
                logger::debug(format!("{err:#}"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use clap::Parser;
    use cyclebuddy_cli_common::ethereum::create_provider;
    use cyclebuddy_cli_config::traits::ReadConfig;
    use ethers::{
        abi::Abi,
        providers::{MockProvider, Provider},
        types::{Bytes, H256, U256},
        utils::{id, parse_units},
    };

    use super::*;

    const TOKEN_ADDRESS: &str = "0x5FbDB2315678afecb367f032d93F642f64180aa3";

    fn mocked_client() -> Arc<Provider<MockProvider>> {
        Arc::new(Provider::mocked().0)
    }

    fn twenty_gwei() -> U256 {
        parse_units(20, "gwei").unwrap().into()
    }

    fn artifact(abi: &str) -> HardhatArtifact {
        HardhatArtifact {
            contract_name: "CycleStreakToken".to_owned(),
            source_name: None,
            abi: serde_json::from_str::<Abi>(abi).unwrap(),
            bytecode: Bytes::from(vec![0x60, 0x80]),
        }
    }

    const OWNABLE_CONSTRUCTOR: &str = r#"[{
        "type": "constructor",
        "stateMutability": "nonpayable",
        "inputs": [{ "name": "initialOwner", "type": "address", "internalType": "address" }]
    }]"#;

    #[test]
    fn token_without_constructor_takes_no_args() {
        let args = token_constructor_args(&artifact("[]"), false, Address::zero()).unwrap();
        assert!(args.is_empty());
    }

    #[test]
    fn owner_is_passed_on_request() {
        let owner = Address::from_str("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266").unwrap();
        let args = token_constructor_args(&artifact(OWNABLE_CONSTRUCTOR), true, owner).unwrap();
        assert_eq!(args, vec![Token::Address(owner)]);
    }

    #[test]
    fn owner_constructor_needs_the_flag() {
        let err = token_constructor_args(&artifact(OWNABLE_CONSTRUCTOR), false, Address::zero())
            .unwrap_err();
        assert!(err.to_string().contains("--token-owner-arg"));
    }

    #[test]
    fn reverted_receipt_is_an_error() {
        let receipt = TransactionReceipt {
            transaction_hash: H256::repeat_byte(0xab),
            status: Some(U64::zero()),
            ..Default::default()
        };
        let err = ensure_success(&receipt, "addMinter").unwrap_err();
        assert!(err.to_string().starts_with("addMinter reverted"));

        let receipt = TransactionReceipt {
            status: Some(U64::one()),
            ..receipt
        };
        ensure_success(&receipt, "addMinter").unwrap();
    }

    const REWARDS_CONSTRUCTOR: &str = r#"[{
        "type": "constructor",
        "stateMutability": "nonpayable",
        "inputs": [{ "name": "_cycleStreakToken", "type": "address", "internalType": "address" }]
    }]"#;

    #[test]
    fn bahamut_deployment_is_legacy_at_twenty_gwei() {
        let gas_price = ProjectConfig::default().gas_price(EvmNetwork::Bahamut);
        let tx = deployment_tx(mocked_client(), &artifact("[]"), vec![], gas_price).unwrap();
        assert!(matches!(tx, TypedTransaction::Legacy(_)));
        assert_eq!(tx.gas_price(), Some(twenty_gwei()));
        assert!(tx.to().is_none());
        assert_eq!(tx.data().unwrap().to_vec(), vec![0x60, 0x80]);
    }

    #[test]
    fn localhost_deployment_leaves_fees_to_the_node() {
        let gas_price = ProjectConfig::default().gas_price(EvmNetwork::Localhost);
        let tx = deployment_tx(mocked_client(), &artifact("[]"), vec![], gas_price).unwrap();
        assert!(!matches!(tx, TypedTransaction::Legacy(_)));
        assert_eq!(tx.gas_price(), None);
    }

    #[test]
    fn rewards_constructor_gets_the_token_address() {
        let token = Address::from_str(TOKEN_ADDRESS).unwrap();
        let rewards = HardhatArtifact {
            contract_name: "DailyRewards".to_owned(),
            ..artifact(REWARDS_CONSTRUCTOR)
        };
        let tx =
            deployment_tx(mocked_client(), &rewards, vec![Token::Address(token)], None).unwrap();
        let data = tx.data().unwrap().to_vec();

        let mut expected = vec![0x60, 0x80];
        expected.extend_from_slice(&[0u8; 12]);
        expected.extend_from_slice(token.as_bytes());
        assert_eq!(data, expected);
    }

    #[test]
    fn constructor_args_without_constructor_are_rejected() {
        let token = Address::from_str(TOKEN_ADDRESS).unwrap();
        assert!(
            deployment_tx(mocked_client(), &artifact("[]"), vec![Token::Address(token)], None)
                .is_err()
        );
    }

    #[test]
    fn add_minter_call_targets_the_token() {
        let token = Address::from_str(TOKEN_ADDRESS).unwrap();
        let minter = Address::repeat_byte(0x11);
        let gas_price = EvmNetwork::Bahamut.gas_price();
        let call = add_minter_call(mocked_client(), token, minter, gas_price);

        assert_eq!(call.tx.to_addr(), Some(&token));
        assert!(matches!(call.tx, TypedTransaction::Legacy(_)));
        assert_eq!(call.tx.gas_price(), Some(twenty_gwei()));
        let data = call.tx.data().unwrap();
        assert_eq!(&data[..4], &id("addMinter(address)")[..]);
        assert_eq!(&data[16..], minter.as_bytes());
    }

    #[test]
    fn dropped_transaction_is_an_error() {
        let err = confirmed_receipt(None, "addMinter").unwrap_err();
        assert_eq!(
            err.to_string(),
            "addMinter transaction was dropped from the mempool"
        );

        let receipt = TransactionReceipt {
            status: Some(U64::one()),
            ..Default::default()
        };
        confirmed_receipt(Some(receipt), "addMinter").unwrap();
    }

    #[test]
    fn source_verification_uses_deployed_constructor_args() {
        let token = Address::from_str(TOKEN_ADDRESS).unwrap();
        let rewards = HardhatArtifact {
            contract_name: "DailyRewards".to_owned(),
            source_name: Some("contracts/DailyRewards.sol".to_owned()),
            ..artifact(REWARDS_CONSTRUCTOR)
        };
        let verification = source_verification(
            EvmNetwork::Bahamut,
            &rewards,
            Address::repeat_byte(0x22),
            &[Token::Address(token)],
        );
        assert_eq!(verification.network, "bahamut");
        assert_eq!(
            verification.contract.as_deref(),
            Some("contracts/DailyRewards.sol:DailyRewards")
        );
        assert_eq!(verification.constructor_args, [TOKEN_ADDRESS]);
    }

    /// Run with a Hardhat node on 127.0.0.1:8545 and `CYCLEBUDDY_SMOKE_PROJECT`
    /// pointing at a compiled CycleBuddy project.
    #[tokio::test]
    #[ignore = "needs a running local node and compiled artifacts"]
    async fn deploys_to_local_node() {
        let project = std::env::var("CYCLEBUDDY_SMOKE_PROJECT").unwrap();
        let out_dir = tempfile::tempdir().unwrap();
        let out = out_dir.path().join("localhost.json");
        let shell = Shell::new().unwrap();
        shell.change_dir(project);

        let args = DeployArgs::parse_from([
            "deploy",
            "--yes",
            "--out",
            out.to_str().unwrap(),
        ]);
        run(args, &shell).await.unwrap();

        let record = DeploymentFile::read(&shell, &out).unwrap();
        let contracts = *record.contracts();
        assert!(!contracts.cycle_streak_token.is_zero());
        assert!(!contracts.daily_rewards.is_zero());

        let provider = Arc::new(create_provider("http://127.0.0.1:8545").unwrap());
        let token = CycleStreakTokenAbi::new(contracts.cycle_streak_token, provider);
        assert!(token
            .is_minter(contracts.daily_rewards)
            .call()
            .await
            .unwrap());
    }
}
