//! O3 HTTP client for UTXO lookups.

use neo_transaction::{CoinSource, RawUnspent, TransactionError};
use tokio::runtime::{Handle, Runtime, RuntimeFlavor};
use tracing::{debug, warn};

use crate::error::O3Error;
use crate::types::{O3Config, O3Response, UtxoResult};

/// Application status code of a successful O3 response.
const O3_SUCCESS: i64 = 200;

/// HTTP client for the O3 platform API.
#[derive(Debug, Clone)]
pub struct O3Client {
    /// Client configuration.
    config: O3Config,
    /// Underlying HTTP client.
    client: reqwest::Client,
}

impl O3Client {
    /// Create a new O3 client with the given configuration.
    pub fn new(config: O3Config) -> Self {
        let client = reqwest::Client::new();
        Self { config, client }
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &O3Config {
        &self.config
    }

    /// Fetch the unspent outputs of `address` on the configured network.
    ///
    /// # Returns
    /// The raw UTXO entries, or `O3Error::Api` when the HTTP status is not
    /// a success or the body's `code` is not 200.
    pub async fn get_neo_utxo(&self, address: &str) -> Result<Vec<RawUnspent>, O3Error> {
        let url = self.utxo_url(address);
        let mut request = self.client.get(&url);
        if let Some(network) = self.config.network.query_value() {
            request = request.query(&[("network", network)]);
        }
        debug!(url = %url, network = %self.config.network, "requesting utxo");

        let resp = request.send().await?;
        let status = resp.status();
        let body = resp.text().await?;
        if !status.is_success() {
            warn!(status = status.as_u16(), "O3 utxo request failed");
            return Err(O3Error::Api {
                code: i64::from(status.as_u16()),
                message: body,
            });
        }

        let response: O3Response<UtxoResult> = serde_json::from_str(&body)?;
        if response.code != O3_SUCCESS {
            warn!(code = response.code, "O3 utxo request returned an error code");
            return Err(O3Error::Api {
                code: response.code,
                message: "cannot get utxo".to_string(),
            });
        }
        let data = response.result.unwrap_or_default().data;
        debug!(address = %address, entries = data.len(), "received utxo");
        Ok(data)
    }

    fn utxo_url(&self, address: &str) -> String {
        format!(
            "{}/v1/neo/{}/utxo",
            self.config.base_url.trim_end_matches('/'),
            address
        )
    }

    /// Run `get_neo_utxo` to completion from synchronous code.
    fn get_neo_utxo_blocking(&self, address: &str) -> Result<Vec<RawUnspent>, O3Error> {
        match Handle::try_current() {
            Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
                tokio::task::block_in_place(|| handle.block_on(self.get_neo_utxo(address)))
            }
            // A current-thread runtime cannot be blocked in place; drive the
            // request on a separate thread with its own runtime.
            Ok(_) => std::thread::scope(|scope| {
                scope
                    .spawn(|| self.block_on_new_runtime(address))
                    .join()
                    .map_err(|_| O3Error::Runtime("utxo request thread panicked".to_string()))?
            }),
            Err(_) => self.block_on_new_runtime(address),
        }
    }

    fn block_on_new_runtime(&self, address: &str) -> Result<Vec<RawUnspent>, O3Error> {
        let rt = Runtime::new().map_err(|e| O3Error::Runtime(e.to_string()))?;
        rt.block_on(self.get_neo_utxo(address))
    }
}

impl CoinSource for O3Client {
    fn fetch_unspent(&self, address: &str) -> Result<Vec<RawUnspent>, TransactionError> {
        self.get_neo_utxo_blocking(address)
            .map_err(|e| TransactionError::CoinSource(Box::new(e)))
    }
}
