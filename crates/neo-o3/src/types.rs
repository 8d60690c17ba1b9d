//! O3 data types: configuration, network selection, and API responses.

use std::fmt;
use std::str::FromStr;

use neo_transaction::RawUnspent;
use serde::{Deserialize, Serialize};

use crate::error::O3Error;

/// Default O3 platform API root.
pub const DEFAULT_BASE_URL: &str = "https://platform.o3.network/api";

/// NEO network whose UTXO index is queried.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    /// Main net (no `network` query parameter).
    #[default]
    Main,
    /// Public test net.
    Test,
    /// O3's private net.
    Private,
}

impl Network {
    /// The `network` query parameter value, if any.
    pub fn query_value(&self) -> Option<&'static str> {
        match self {
            Network::Main => None,
            Network::Test => Some("test"),
            Network::Private => Some("private"),
        }
    }

    /// Lowercase network name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Main => "main",
            Network::Test => "test",
            Network::Private => "private",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Network {
    type Err = O3Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "main" => Ok(Network::Main),
            "test" => Ok(Network::Test),
            "private" => Ok(Network::Private),
            other => Err(O3Error::InvalidNetwork(other.to_string())),
        }
    }
}

/// Configuration for an [`O3Client`](crate::O3Client).
#[derive(Debug, Clone)]
pub struct O3Config {
    /// Network to query.
    pub network: Network,
    /// API root (e.g. `https://platform.o3.network/api`).
    pub base_url: String,
}

impl Default for O3Config {
    fn default() -> Self {
        Self {
            network: Network::Main,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// Envelope of every O3 API response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct O3Response<T> {
    /// Application status; `200` on success.
    pub code: i64,
    /// Payload.
    #[serde(default)]
    pub result: Option<T>,
}

/// Payload of the UTXO endpoint.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UtxoResult {
    /// One entry per unspent output.
    #[serde(default)]
    pub data: Vec<RawUnspent>,
}
