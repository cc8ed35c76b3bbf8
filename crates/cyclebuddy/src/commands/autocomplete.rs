use std::io::Write;

use anyhow::Context;
use clap::CommandFactory;
use clap_complete::{generate, Generator};
use cyclebuddy_cli_common::logger;
use xshell::Shell;

use crate::{
    commands::args::AutocompleteArgs,
    consts::BINARY_NAME,
    messages::{msg_generate_autocomplete_file, MSG_OUTRO_AUTOCOMPLETE_GENERATION},
    CycleBuddy,
};

pub fn run(shell: &Shell, args: AutocompleteArgs) -> anyhow::Result<()> {
    let script = generate_completions(args.generator);

    match args.out {
        Some(dir) => {
            let filename = autocomplete_file_name(&args.generator);
            logger::info(msg_generate_autocomplete_file(&filename));
            shell.create_dir(&dir)?;
            shell
                .write_file(dir.join(&filename), script)
                .with_context(|| format!("Failed to write {filename}"))?;
            logger::outro(MSG_OUTRO_AUTOCOMPLETE_GENERATION);
        }
        None => std::io::stdout()
            .write_all(&script)
            .context("Failed to write the completion script")?,
    }
    Ok(())
}

pub fn generate_completions(generator: impl Generator) -> Vec<u8> {
    let mut buffer = Vec::new();
    generate(generator, &mut CycleBuddy::command(), BINARY_NAME, &mut buffer);
    buffer
}

pub fn autocomplete_file_name(generator: &impl Generator) -> String {
    generator.file_name(BINARY_NAME)
}
