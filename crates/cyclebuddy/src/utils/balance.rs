use std::fmt;

use cyclebuddy_cli_common::{ethereum::get_balance, logger, PromptSelect};
use ethers::{
    providers::Middleware,
    types::{Address, U256},
};

use crate::{
    consts::MINIMUM_BALANCE_FOR_DEPLOYER,
    messages::{
        msg_address_doesnt_have_enough_money_prompt, msg_deployer_balance, msg_low_balance_skipped,
        MSG_BALANCE_CHECK_ABORTED_ERR, MSG_BALANCE_CHECK_AGAIN, MSG_BALANCE_CONTINUE,
        MSG_BALANCE_EXIT,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LowBalanceAction {
    Continue,
    CheckAgain,
    Exit,
}

impl fmt::Display for LowBalanceAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LowBalanceAction::Continue => MSG_BALANCE_CONTINUE,
            LowBalanceAction::CheckAgain => MSG_BALANCE_CHECK_AGAIN,
            LowBalanceAction::Exit => MSG_BALANCE_EXIT,
        };
        f.write_str(label)
    }
}

/// Logs the deployer balance and, while it is below the recommended minimum,
/// asks whether to go on. `skip_prompt` continues with a warning instead.
pub async fn check_the_balance<M: Middleware>(
    client: &M,
    address: Address,
    skip_prompt: bool,
) -> anyhow::Result<()>
where
    M::Error: 'static,
{
    let expected = U256::from(MINIMUM_BALANCE_FOR_DEPLOYER);
    loop {
        let balance = get_balance(client, address).await?;
        logger::info(msg_deployer_balance(balance));
        if balance >= expected {
            return Ok(());
        }
        if skip_prompt {
            logger::warn(msg_low_balance_skipped(balance, expected));
            return Ok(());
        }

        let action = PromptSelect::new(
            &msg_address_doesnt_have_enough_money_prompt(address, balance, expected),
            [
                LowBalanceAction::Continue,
                LowBalanceAction::CheckAgain,
                LowBalanceAction::Exit,
            ],
        )
        .ask();
        match action {
            LowBalanceAction::Continue => return Ok(()),
            LowBalanceAction::CheckAgain => continue,
            LowBalanceAction::Exit => anyhow::bail!(MSG_BALANCE_CHECK_ABORTED_ERR),
        }
    }
}
