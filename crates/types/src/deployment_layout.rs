use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Shape of the JSON file written after a deployment.
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DeploymentLayout {
    /// `deployments/<network>.json` with the addresses under `contracts`
    #[default]
    Nested,
    /// `deployed-addresses.json` with the addresses at top level, as the front-end reads it
    Flat,
}
