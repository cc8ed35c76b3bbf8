mod prerequisites;
mod prompt;
mod term;

pub mod cmd;
pub mod config;
pub mod contracts;
pub mod ethereum;
pub mod files;
pub mod wallets;

pub use prerequisites::check_prerequisites;
pub use prompt::{PromptConfirm, PromptSelect};
pub use term::{error, logger, spinner};
