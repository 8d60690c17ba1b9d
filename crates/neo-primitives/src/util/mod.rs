//! Binary serialization helpers for the NEO wire format.
//!
//! Provides the `VarInt` length prefix, plus `BinaryReader` and
//! `BinaryWriter` for fixed-width little-endian integers and
//! VarInt-prefixed byte strings.

use crate::PrimitivesError;

// ---------------------------------------------------------------------------
// VarInt
// ---------------------------------------------------------------------------

/// Marker byte for a VarInt followed by a 2-byte little-endian value.
const VARINT_U16: u8 = 0xfd;
/// Marker byte for a VarInt followed by a 4-byte little-endian value.
const VARINT_U32: u8 = 0xfe;
/// Marker byte for a VarInt followed by an 8-byte little-endian value.
const VARINT_U64: u8 = 0xff;

/// A variable-length unsigned integer.
///
/// Every variable-length field of a transaction (input and output counts,
/// script lengths, remark lengths) is prefixed with one. Values below `0xfd`
/// take a single byte; larger values take a marker byte followed by 2, 4 or
/// 8 little-endian bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VarInt(pub u64);

impl VarInt {
    /// Decode a VarInt starting at `offset` within `data`.
    ///
    /// # Arguments
    /// * `data` - Buffer holding the encoding.
    /// * `offset` - Position of the first (marker) byte.
    ///
    /// # Returns
    /// The decoded value and the number of bytes consumed, or
    /// `TruncatedInput` if the buffer ends before the encoding does.
    pub fn from_bytes(data: &[u8], offset: usize) -> Result<(Self, usize), PrimitivesError> {
        let marker = *data.get(offset).ok_or(PrimitivesError::TruncatedInput {
            offset,
            needed: 1,
            available: data.len().saturating_sub(offset),
        })?;

        let width = match marker {
            VARINT_U64 => 8,
            VARINT_U32 => 4,
            VARINT_U16 => 2,
            b => return Ok((VarInt(b as u64), 1)),
        };

        let start = offset + 1;
        let body = data.get(start..start + width).ok_or(PrimitivesError::TruncatedInput {
            offset: start,
            needed: width,
            available: data.len().saturating_sub(start),
        })?;

        let mut le = [0u8; 8];
        le[..width].copy_from_slice(body);
        Ok((VarInt(u64::from_le_bytes(le)), 1 + width))
    }

    /// Return the wire-format byte length of this VarInt (1, 3, 5 or 9).
    pub fn length(&self) -> usize {
        match self.0 {
            0..=0xfc => 1,
            0xfd..=0xffff => 3,
            0x1_0000..=0xffff_ffff => 5,
            _ => 9,
        }
    }

    /// Encode the VarInt into a new byte vector.
    ///
    /// # Returns
    /// A `Vec<u8>` of 1, 3, 5, or 9 bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        let v = self.0;
        let mut buf = Vec::with_capacity(self.length());
        match self.length() {
            1 => buf.push(v as u8),
            3 => {
                buf.push(VARINT_U16);
                buf.extend_from_slice(&(v as u16).to_le_bytes());
            }
            5 => {
                buf.push(VARINT_U32);
                buf.extend_from_slice(&(v as u32).to_le_bytes());
            }
            _ => {
                buf.push(VARINT_U64);
                buf.extend_from_slice(&v.to_le_bytes());
            }
        }
        buf
    }

    /// Return the underlying u64 value.
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for VarInt {
    fn from(v: u64) -> Self {
        VarInt(v)
    }
}

impl From<usize> for VarInt {
    fn from(v: usize) -> Self {
        VarInt(v as u64)
    }
}

/// Return the VarInt encoding of a signed integer.
///
/// Negative values are encoded through their two's complement `u64`
/// reinterpretation, so `-1` becomes the 9-byte maximum.
pub fn var_uint_bytes(value: i64) -> Vec<u8> {
    VarInt(value as u64).to_bytes()
}

// ---------------------------------------------------------------------------
// BinaryReader
// ---------------------------------------------------------------------------

/// A cursor over a byte slice for decoding wire-format data.
pub struct BinaryReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> BinaryReader<'a> {
    /// Create a new reader positioned at the start of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        BinaryReader { data, pos: 0 }
    }

    /// Read `n` bytes and advance the position.
    ///
    /// # Returns
    /// A byte slice of length `n`, or `TruncatedInput` if fewer remain.
    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8], PrimitivesError> {
        if n > self.remaining() {
            return Err(PrimitivesError::TruncatedInput {
                offset: self.pos,
                needed: n,
                available: self.remaining(),
            });
        }
        let slice = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    /// Read exactly `N` bytes into an array.
    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N], PrimitivesError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read_bytes(N)?);
        Ok(out)
    }

    /// Read a single byte.
    pub fn read_u8(&mut self) -> Result<u8, PrimitivesError> {
        Ok(self.read_bytes(1)?[0])
    }

    /// Read a little-endian u16.
    pub fn read_u16_le(&mut self) -> Result<u16, PrimitivesError> {
        Ok(u16::from_le_bytes(self.read_array()?))
    }

    /// Read a little-endian u32.
    pub fn read_u32_le(&mut self) -> Result<u32, PrimitivesError> {
        Ok(u32::from_le_bytes(self.read_array()?))
    }

    /// Read a little-endian i64.
    pub fn read_i64_le(&mut self) -> Result<i64, PrimitivesError> {
        Ok(i64::from_le_bytes(self.read_array()?))
    }

    /// Read a VarInt and advance past it.
    pub fn read_varint(&mut self) -> Result<VarInt, PrimitivesError> {
        let (value, consumed) = VarInt::from_bytes(self.data, self.pos)?;
        self.pos += consumed;
        Ok(value)
    }

    /// Read a VarInt length prefix followed by that many bytes.
    pub fn read_var_bytes(&mut self) -> Result<&'a [u8], PrimitivesError> {
        let len = self.read_varint()?.value();
        let len = usize::try_from(len).map_err(|_| PrimitivesError::TruncatedInput {
            offset: self.pos,
            needed: usize::MAX,
            available: self.remaining(),
        })?;
        self.read_bytes(len)
    }

    /// Return the current read position.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Return the number of unread bytes.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }
}

// ---------------------------------------------------------------------------
// BinaryWriter
// ---------------------------------------------------------------------------

/// An append-only buffer for encoding wire-format data.
#[derive(Debug, Default)]
pub struct BinaryWriter {
    buf: Vec<u8>,
}

impl BinaryWriter {
    /// Create a new empty writer.
    pub fn new() -> Self {
        BinaryWriter { buf: Vec::new() }
    }

    /// Create a new writer with a pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        BinaryWriter {
            buf: Vec::with_capacity(capacity),
        }
    }

    /// Append raw bytes.
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Append a single byte.
    pub fn write_u8(&mut self, val: u8) {
        self.buf.push(val);
    }

    /// Append a little-endian u16.
    pub fn write_u16_le(&mut self, val: u16) {
        self.buf.extend_from_slice(&val.to_le_bytes());
    }

    /// Append a little-endian u32.
    pub fn write_u32_le(&mut self, val: u32) {
        self.buf.extend_from_slice(&val.to_le_bytes());
    }

    /// Append a little-endian i64.
    pub fn write_i64_le(&mut self, val: i64) {
        self.buf.extend_from_slice(&val.to_le_bytes());
    }

    /// Append a VarInt.
    pub fn write_varint(&mut self, varint: VarInt) {
        self.buf.extend_from_slice(&varint.to_bytes());
    }

    /// Append a VarInt length prefix followed by `bytes`.
    pub fn write_var_bytes(&mut self, bytes: &[u8]) {
        self.write_varint(VarInt::from(bytes.len()));
        self.write_bytes(bytes);
    }

    /// Consume the writer and return the accumulated bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    /// Return the bytes written so far.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Return the number of bytes written so far.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Check whether nothing has been written yet.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }
}
