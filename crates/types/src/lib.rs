mod deployment_layout;
mod evm_network;
mod stellar_network;
mod wallet_source;

pub use deployment_layout::*;
pub use evm_network::*;
pub use stellar_network::*;
pub use wallet_source::*;
