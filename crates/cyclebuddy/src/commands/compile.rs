use cyclebuddy_cli_common::{
    check_prerequisites,
    config::global_config,
    contracts::{compile_hardhat_project, hardhat_version},
    logger,
    spinner::Spinner,
};
use xshell::Shell;

use crate::messages::{msg_hardhat_version, MSG_COMPILED, MSG_COMPILING_SPINNER};

pub fn run(shell: &Shell) -> anyhow::Result<()> {
    check_prerequisites(shell);
    let project_dir = shell.current_dir();
    if global_config().verbose {
        logger::debug(msg_hardhat_version(&hardhat_version(shell, &project_dir)?));
    }

    let spinner = Spinner::new(MSG_COMPILING_SPINNER);
    if let Err(err) = compile_hardhat_project(shell, &project_dir) {
        spinner.fail();
        return Err(err);
    }
    spinner.finish();

    logger::outro(MSG_COMPILED);
    Ok(())
}
