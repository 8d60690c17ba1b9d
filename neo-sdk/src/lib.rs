#![deny(missing_docs)]

//! NEO SDK - Complete SDK.
//!
//! Re-exports all NEO SDK components for convenient single-crate usage.

pub use neo_primitives as primitives;
pub use neo_script as script;
pub use neo_transaction as transaction;
pub use neo_o3 as o3;
