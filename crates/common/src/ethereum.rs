use anyhow::Context;
use ethers::{
    middleware::SignerMiddleware,
    providers::{Http, Middleware, Provider},
    signers::{LocalWallet, Signer},
    types::{Address, H256, U256},
    utils::to_checksum,
};

pub type SignerClient = SignerMiddleware<Provider<Http>, LocalWallet>;

pub fn create_provider(rpc_url: &str) -> anyhow::Result<Provider<Http>> {
    Provider::<Http>::try_from(rpc_url).with_context(|| format!("Invalid RPC URL {rpc_url}"))
}

/// Builds a client that signs every transaction locally with `private_key`
/// and replays it protection-bound to `chain_id`.
pub fn create_ethers_client(
    private_key: H256,
    rpc_url: &str,
    chain_id: u64,
) -> anyhow::Result<SignerClient> {
    let wallet = LocalWallet::from_bytes(private_key.as_bytes())?.with_chain_id(chain_id);
    let provider = create_provider(rpc_url)?;
    Ok(SignerMiddleware::new(provider, wallet))
}

/// Reads the chain ID reported by the node and compares it to `expected`.
pub async fn check_chain_id<M: Middleware>(client: &M, expected: Option<u64>) -> anyhow::Result<u64>
where
    M::Error: 'static,
{
    let chain_id = client
        .get_chainid()
        .await
        .context("Failed to query the chain ID")?
        .as_u64();
    if let Some(expected) = expected {
        anyhow::ensure!(
            chain_id == expected,
            "Node reports chain ID {chain_id}, expected {expected}"
        );
    }
    Ok(chain_id)
}

pub async fn get_balance<M: Middleware>(client: &M, address: Address) -> anyhow::Result<U256>
where
    M::Error: 'static,
{
    client
        .get_balance(address, None)
        .await
        .with_context(|| format!("Failed to query the balance of {}", format_address(address)))
}

/// `true` when runtime bytecode is deployed at `address`.
pub async fn has_code<M: Middleware>(client: &M, address: Address) -> anyhow::Result<bool>
where
    M::Error: 'static,
{
    let code = client
        .get_code(address, None)
        .await
        .with_context(|| format!("Failed to query the code at {}", format_address(address)))?;
    Ok(!code.as_ref().is_empty())
}

pub fn get_address_from_private_key(private_key: &H256) -> anyhow::Result<Address> {
    Ok(LocalWallet::from_bytes(private_key.as_bytes())?.address())
}

/// EIP-55 checksummed form, as shown by block explorers.
pub fn format_address(address: Address) -> String {
    to_checksum(&address, None)
}
