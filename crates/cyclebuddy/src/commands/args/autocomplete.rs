use std::path::PathBuf;

use clap::Parser;

use crate::messages::MSG_AUTOCOMPLETE_OUT_HELP;

#[derive(Debug, Parser)]
pub struct AutocompleteArgs {
    /// The shell to generate the autocomplete script for
    #[arg(long = "generate", value_enum)]
    pub generator: clap_complete::Shell,
    #[arg(long, help = MSG_AUTOCOMPLETE_OUT_HELP)]
    pub out: Option<PathBuf>,
}
