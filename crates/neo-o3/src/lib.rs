#![deny(missing_docs)]

//! # neo-o3
//!
//! HTTP client for the O3 platform API, used to look up the unspent
//! outputs of a NEO address.
//!
//! The client is async-first and also implements the synchronous
//! [`CoinSource`](neo_transaction::CoinSource) trait from
//! `neo-transaction`, so it can feed the mint flow directly.
//!
//! # Example
//!
//! ```no_run
//! use neo_o3::{Network, O3Client, O3Config};
//!
//! let client = O3Client::new(O3Config {
//!     network: Network::Test,
//!     ..Default::default()
//! });
//! ```

pub mod client;
pub mod error;
pub mod types;


pub use client::O3Client;
pub use error::O3Error;
pub use types::{Network, O3Config, O3Response, UtxoResult};
