//! Single-signature witness scripts.
//!
//! A standard account is guarded by `PUSHBYTES33 <compressed pubkey>
//! CHECKSIG`. It is unlocked by an invocation script that pushes a 64-byte
//! `r || s` signature.

use neo_primitives::ec::public_key::PublicKey;
use neo_primitives::ec::signature::Signature;

use crate::opcodes::CHECKSIG;
use crate::script::Script;

/// Verification script of the single-signature account for `pub_key`.
pub fn verification_script(pub_key: &PublicKey) -> Script {
    let compressed = pub_key.to_compressed();
    let mut bytes = Vec::with_capacity(compressed.len() + 2);
    bytes.push(compressed.len() as u8);
    bytes.extend_from_slice(&compressed);
    bytes.push(CHECKSIG);
    Script::from(bytes)
}

/// Invocation script pushing `sig`.
pub fn invocation_script(sig: &Signature) -> Script {
    let raw = sig.to_bytes();
    let mut bytes = Vec::with_capacity(raw.len() + 1);
    bytes.push(raw.len() as u8);
    bytes.extend_from_slice(&raw);
    Script::from(bytes)
}
