//! NEO VM opcodes used when building invocation and verification scripts.

/// Push an empty byte array (also the integer zero and boolean false).
pub const PUSH0: u8 = 0x00;
/// Alias of `PUSH0`.
pub const PUSHF: u8 = PUSH0;
/// First direct-push opcode: the next byte is data.
pub const PUSHBYTES1: u8 = 0x01;
/// Last direct-push opcode: the next 75 bytes are data.
pub const PUSHBYTES75: u8 = 0x4b;
/// Next byte is a data length, followed by that many bytes.
pub const PUSHDATA1: u8 = 0x4c;
/// Next two bytes (LE) are a data length.
pub const PUSHDATA2: u8 = 0x4d;
/// Next four bytes (LE) are a data length.
pub const PUSHDATA4: u8 = 0x4e;
/// Push the integer -1.
pub const PUSHM1: u8 = 0x4f;
/// Push the integer 1 (also boolean true).
pub const PUSH1: u8 = 0x51;
/// Alias of `PUSH1`.
pub const PUSHT: u8 = PUSH1;
/// Push the integer 16.
pub const PUSH16: u8 = 0x60;

pub const NOP: u8 = 0x61;
pub const JMP: u8 = 0x62;
pub const JMPIF: u8 = 0x63;
pub const JMPIFNOT: u8 = 0x64;
pub const CALL: u8 = 0x65;
pub const RET: u8 = 0x66;
/// Call another contract; followed by its 20-byte script hash.
pub const APPCALL: u8 = 0x67;
pub const SYSCALL: u8 = 0x68;
/// Tail call another contract; followed by its 20-byte script hash.
pub const TAILCALL: u8 = 0x69;

pub const DUP: u8 = 0x76;
pub const SWAP: u8 = 0x7c;
pub const EQUAL: u8 = 0x87;

/// Verify a signature against a public key.
pub const CHECKSIG: u8 = 0xac;
pub const VERIFY: u8 = 0xad;
pub const CHECKMULTISIG: u8 = 0xae;

/// Pop a count n, then n items, and push them as an array.
pub const PACK: u8 = 0xc1;
pub const UNPACK: u8 = 0xc2;
pub const NEWARRAY: u8 = 0xc5;

pub const THROW: u8 = 0xf0;
pub const THROWIFNOT: u8 = 0xf1;

/// Return the opcode for pushing a small integer in `-1..=16`.
pub fn small_int_opcode(n: i64) -> Option<u8> {
    match n {
        -1 => Some(PUSHM1),
        0 => Some(PUSH0),
        1..=16 => Some(PUSH1 - 1 + n as u8),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_int_opcode() {
        assert_eq!(small_int_opcode(-1), Some(0x4f));
        assert_eq!(small_int_opcode(0), Some(0x00));
        assert_eq!(small_int_opcode(1), Some(0x51));
        assert_eq!(small_int_opcode(16), Some(PUSH16));
        assert_eq!(small_int_opcode(17), None);
        assert_eq!(small_int_opcode(-2), None);
    }
}
