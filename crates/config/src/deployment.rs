use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use cyclebuddy_cli_types::DeploymentLayout;
use ethers::types::Address;
use serde::{Deserialize, Serialize};

use crate::{
    consts::{FRONTEND_ADDRESSES_FILE, REWARDS_CONTRACT_NAME, TOKEN_CONTRACT_NAME},
    traits::FileConfigTrait,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeployedContracts {
    #[serde(rename = "CycleStreakToken")]
    pub cycle_streak_token: Address,
    #[serde(rename = "DailyRewards")]
    pub daily_rewards: Address,
}

impl DeployedContracts {
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Address)> {
        [
            (TOKEN_CONTRACT_NAME, self.cycle_streak_token),
            (REWARDS_CONTRACT_NAME, self.daily_rewards),
        ]
        .into_iter()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentRecord {
    pub network: String,
    /// Always written. Records from older deploy scripts may lack it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<u64>,
    /// Always written. Records from older deploy scripts may lack it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deployer: Option<Address>,
    pub contracts: DeployedContracts,
    #[serde(with = "iso_timestamp")]
    pub timestamp: DateTime<Utc>,
}

/// The layout the front-end imports. Older files carry only the two
/// addresses and the network name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlatDeploymentRecord {
    #[serde(flatten)]
    pub contracts: DeployedContracts,
    pub network: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deployer: Option<Address>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "iso_timestamp::option"
    )]
    pub timestamp: Option<DateTime<Utc>>,
}

/// A deployment record in either layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DeploymentFile {
    Nested(DeploymentRecord),
    Flat(FlatDeploymentRecord),
}

impl FileConfigTrait for DeploymentFile {}

impl DeploymentRecord {
    pub fn new(
        network: impl Into<String>,
        chain_id: u64,
        deployer: Address,
        contracts: DeployedContracts,
    ) -> Self {
        Self {
            network: network.into(),
            chain_id: Some(chain_id),
            deployer: Some(deployer),
            contracts,
            timestamp: Utc::now(),
        }
    }

    pub fn into_layout(self, layout: DeploymentLayout) -> DeploymentFile {
        match layout {
            DeploymentLayout::Nested => DeploymentFile::Nested(self),
            DeploymentLayout::Flat => DeploymentFile::Flat(FlatDeploymentRecord {
                contracts: self.contracts,
                network: self.network,
                chain_id: self.chain_id,
                deployer: self.deployer,
                timestamp: Some(self.timestamp),
            }),
        }
    }
}

impl DeploymentFile {
    pub fn contracts(&self) -> &DeployedContracts {
        match self {
            DeploymentFile::Nested(record) => &record.contracts,
            DeploymentFile::Flat(record) => &record.contracts,
        }
    }

    pub fn network(&self) -> &str {
        match self {
            DeploymentFile::Nested(record) => &record.network,
            DeploymentFile::Flat(record) => &record.network,
        }
    }

    pub fn chain_id(&self) -> Option<u64> {
        match self {
            DeploymentFile::Nested(record) => record.chain_id,
            DeploymentFile::Flat(record) => record.chain_id,
        }
    }

    /// Where a record is written when no explicit path is given.
    pub fn default_path(
        project_dir: &Path,
        deployments_path: &Path,
        network: &str,
        layout: DeploymentLayout,
    ) -> PathBuf {
        match layout {
            DeploymentLayout::Nested => project_dir
                .join(deployments_path)
                .join(format!("{network}.json")),
            DeploymentLayout::Flat => project_dir.join(FRONTEND_ADDRESSES_FILE),
        }
    }
}

/// ISO-8601 with millisecond precision and a `Z` suffix, e.g. `2025-03-01T10:20:30.400Z`.
mod iso_timestamp {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(D::Error::custom)
    }

    pub mod option {
        use chrono::{DateTime, Utc};
        use serde::{Deserialize, Deserializer, Serializer};

        pub fn serialize<S: Serializer>(
            value: &Option<DateTime<Utc>>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match value {
                Some(value) => super::serialize(value, serializer),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<DateTime<Utc>>, D::Error> {
            #[derive(Deserialize)]
            struct Wrapper(#[serde(with = "super")] DateTime<Utc>);

            Ok(Option::<Wrapper>::deserialize(deserializer)?.map(|Wrapper(dt)| dt))
        }
    }
}
