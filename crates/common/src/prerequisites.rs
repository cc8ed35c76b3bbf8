use xshell::{cmd, Shell};

use crate::{cmd::Cmd, logger};

const PREREQUISITES: [Prerequisite; 2] = [
    Prerequisite {
        name: "node",
        download_link: "https://nodejs.org/en/download",
    },
    Prerequisite {
        name: "npx",
        download_link: "https://docs.npmjs.com/downloading-and-installing-node-js-and-npm",
    },
];

struct Prerequisite {
    name: &'static str,
    download_link: &'static str,
}

/// Checks the tools the Hardhat toolkit needs. Exits the process when one is missing.
pub fn check_prerequisites(shell: &Shell) {
    let missing_prerequisites: Vec<_> = PREREQUISITES
        .iter()
        .filter(|prerequisite| !check_prerequisite(shell, prerequisite.name))
        .collect();

    if !missing_prerequisites.is_empty() {
        logger::error("Prerequisite check has failed");
        logger::error_note(
            "The following prerequisites are missing",
            &missing_prerequisites
                .iter()
                .map(|prerequisite| {
                    format!("- {} ({})", prerequisite.name, prerequisite.download_link)
                })
                .collect::<Vec<_>>()
                .join("\n"),
        );
        logger::outro("Failed");
        std::process::exit(1);
    }
}

fn check_prerequisite(shell: &Shell, name: &str) -> bool {
    Cmd::new(cmd!(shell, "which {name}")).run().is_ok()
}
