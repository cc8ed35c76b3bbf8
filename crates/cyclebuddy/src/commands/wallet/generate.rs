use anyhow::Context;
use clap::Parser;
use cyclebuddy_cli_common::{logger, wallets::Wallet, PromptConfirm};
use cyclebuddy_cli_config::{traits::SaveConfigWithComment, WalletsConfig};
use xshell::Shell;

use crate::{
    commands::args::WalletsArgs,
    messages::{
        msg_generated_wallet, msg_wallet_saved, msg_wallets_file_exists_prompt,
        MSG_DEPLOYER_PK_NOT_SET_ERR, MSG_SAVE_WALLET_HELP, MSG_STORE_KEY_SECURELY,
        MSG_WALLETS_FILE_COMMENT, MSG_WALLET_GENERATED, MSG_WALLET_NOT_OVERWRITTEN,
    },
};

#[derive(Debug, Parser)]
pub struct GenerateWalletArgs {
    #[clap(long, help = MSG_SAVE_WALLET_HELP)]
    pub save: bool,
    #[clap(flatten)]
    pub wallets: WalletsArgs,
}

pub fn run(args: GenerateWalletArgs, shell: &Shell) -> anyhow::Result<()> {
    let path = if args.save {
        Some(args.wallets.writable_wallets_path(&shell.current_dir())?)
    } else {
        None
    };
    let wallet = Wallet::random(&mut rand::thread_rng());

    let Some(path) = path else {
        let private_key = wallet
            .private_key_h256()
            .context(MSG_DEPLOYER_PK_NOT_SET_ERR)?;
        logger::note(
            MSG_WALLET_GENERATED,
            msg_generated_wallet(wallet.address, private_key),
        );
        logger::warn(MSG_STORE_KEY_SECURELY);
        logger::outro(MSG_WALLET_GENERATED);
        return Ok(());
    };

    if shell.path_exists(&path)
        && !PromptConfirm::new(msg_wallets_file_exists_prompt(&path))
            .default(false)
            .ask()
    {
        logger::outro(MSG_WALLET_NOT_OVERWRITTEN);
        return Ok(());
    }

    let address = wallet.address;
    WalletsConfig { deployer: wallet }.save_with_comment(
        shell,
        &path,
        MSG_WALLETS_FILE_COMMENT,
    )?;
    logger::warn(MSG_STORE_KEY_SECURELY);
    logger::outro(msg_wallet_saved(address, &path));
    Ok(())
}
