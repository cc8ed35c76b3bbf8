pub use crate::{artifacts::*, consts::*, deployment::*, project::*, soroban::*, wallets::*};

mod artifacts;
mod consts;
mod deployment;
mod project;
mod soroban;
pub mod traits;
mod wallets;
