/// NEO SDK - Script hashes, addresses, and NEO VM script construction.
///
/// Provides the endianness-tagged script hash type, Base58Check address
/// handling, NEO VM opcode definitions, a script builder for contract
/// invocations, and the single-signature verification/invocation scripts
/// used in transaction witnesses.

pub mod opcodes;
pub mod script_hash;
pub mod address;
pub mod script;
pub mod contract;
pub mod verification;

mod error;
pub use error::ScriptError;
pub use script_hash::{script_hash_hex_from_address, Endianness, ScriptHash, WIRE_ENDIANNESS};
pub use address::Address;
pub use script::{Script, ScriptBuilder};
pub use contract::{ContractParam, InvocationParams};
