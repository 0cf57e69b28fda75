use crate::{ByteOrder, Sink};
use zerocopy::byteorder::{BE, LE, U16, U32, U64};
use zerocopy::IntoBytes;

use alloc::vec::Vec;

/// Appends primitive values to a sink, using a configurable byte order.
///
/// Every `push_*` method returns `&mut Self`, so that writes can be chained:
///
/// ```
/// # use bytepacker::Packer;
/// let mut p = Packer::new(Vec::<u8>::new());
/// p.push_u8(1).push_u16(0x0203).push_str("hi");
/// assert!(p.error().is_none());
/// assert_eq!(p.bytes(), [1, 2, 3, b'h', b'i']);
/// ```
///
/// Errors do not interrupt the chain. The first write that fails is recorded, and every push
/// after it becomes a no-op that does not touch the sink. Check `error()` (or call `finish()`)
/// once the chain is done. If you never check, a failure silently leaves the output truncated.
pub struct Packer<S: Sink> {
    sink: S,
    order: ByteOrder,
    error: Option<S::Error>,
}

impl<S: Sink> Packer<S> {
    /// Creates a `Packer` that writes to `sink` in big-endian byte order.
    pub fn new(sink: S) -> Self {
        Self::with_byte_order(sink, ByteOrder::BigEndian)
    }

    /// Creates a `Packer` that writes to `sink` in the given byte order.
    pub fn with_byte_order(sink: S, order: ByteOrder) -> Self {
        Self {
            sink,
            order,
            error: None,
        }
    }

    /// Changes the byte order used by later writes. Bytes already written are not affected.
    ///
    /// This is not a write, so it takes effect even after an error has been recorded.
    pub fn set_byte_order(&mut self, order: ByteOrder) {
        self.order = order;
    }

    /// The byte order used for multi-byte values.
    pub fn byte_order(&self) -> ByteOrder {
        self.order
    }

    /// Returns the first error reported by the sink, if any.
    pub fn error(&self) -> Option<&S::Error> {
        self.error.as_ref()
    }

    /// Accesses the sink.
    pub fn get_ref(&self) -> &S {
        &self.sink
    }

    /// Extracts the sink. Any recorded error is discarded.
    pub fn into_inner(self) -> S {
        self.sink
    }

    /// Extracts the sink, or returns the recorded error if a write failed.
    pub fn finish(self) -> Result<S, S::Error> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.sink),
        }
    }

    /// Writes `bytes` to the sink, unless an earlier write has already failed.
    fn write(&mut self, bytes: &[u8]) -> &mut Self {
        if self.error.is_none() {
            if let Err(e) = self.sink.write_bytes(bytes) {
                self.error = Some(e);
            }
        }
        self
    }

    /// Writes a `bool`. True is encoded as 1. False is encoded as 0.
    pub fn push_bool(&mut self, value: bool) -> &mut Self {
        self.push_u8(value as u8)
    }

    /// Writes a single `u8` value.
    pub fn push_u8(&mut self, value: u8) -> &mut Self {
        self.write(&[value])
    }

    /// Writes a single `i8` value.
    pub fn push_i8(&mut self, value: i8) -> &mut Self {
        self.push_u8(value as u8)
    }

    /// Writes `bytes` verbatim. No length prefix is written.
    pub fn push_bytes(&mut self, bytes: &[u8]) -> &mut Self {
        self.write(bytes)
    }

    /// Writes the UTF-8 bytes of `s`. There is no length prefix and no terminator.
    pub fn push_str(&mut self, s: &str) -> &mut Self {
        self.write(s.as_bytes())
    }

    /// Writes the bytes of a byte string verbatim. The bytes do not need to be valid UTF-8.
    #[cfg(feature = "bstr")]
    pub fn push_bstr(&mut self, s: &bstr::BStr) -> &mut Self {
        self.write(s)
    }

    /// Writes a `u16` value.
    pub fn push_u16(&mut self, value: u16) -> &mut Self {
        match self.order {
            ByteOrder::BigEndian => self.write(U16::<BE>::new(value).as_bytes()),
            ByteOrder::LittleEndian => self.write(U16::<LE>::new(value).as_bytes()),
        }
    }

    /// Writes a `u32` value.
    pub fn push_u32(&mut self, value: u32) -> &mut Self {
        match self.order {
            ByteOrder::BigEndian => self.write(U32::<BE>::new(value).as_bytes()),
            ByteOrder::LittleEndian => self.write(U32::<LE>::new(value).as_bytes()),
        }
    }

    /// Writes a `u64` value.
    pub fn push_u64(&mut self, value: u64) -> &mut Self {
        match self.order {
            ByteOrder::BigEndian => self.write(U64::<BE>::new(value).as_bytes()),
            ByteOrder::LittleEndian => self.write(U64::<LE>::new(value).as_bytes()),
        }
    }

    /// Writes an `i16` value, as the two's-complement bits of the value.
    pub fn push_i16(&mut self, value: i16) -> &mut Self {
        self.push_u16(value as u16)
    }

    /// Writes an `i32` value, as the two's-complement bits of the value.
    pub fn push_i32(&mut self, value: i32) -> &mut Self {
        self.push_u32(value as u32)
    }

    /// Writes an `i64` value, as the two's-complement bits of the value.
    pub fn push_i64(&mut self, value: i64) -> &mut Self {
        self.push_u64(value as u64)
    }

    /// Writes an `f32` value. The IEEE-754 bits are written as a `u32`, so NaN payloads and
    /// the sign of zero are preserved.
    pub fn push_f32(&mut self, value: f32) -> &mut Self {
        self.push_u32(value.to_bits())
    }

    /// Writes an `f64` value. The IEEE-754 bits are written as a `u64`.
    pub fn push_f64(&mut self, value: f64) -> &mut Self {
        self.push_u64(value.to_bits())
    }
}

impl Packer<Vec<u8>> {
    /// The bytes written so far.
    pub fn bytes(&self) -> &[u8] {
        &self.sink
    }
}

impl Packer<&mut Vec<u8>> {
    /// The contents of the borrowed buffer, including anything it held before packing began.
    pub fn bytes(&self) -> &[u8] {
        self.sink.as_slice()
    }
}

impl<S> core::fmt::Debug for Packer<S>
where
    S: Sink + core::fmt::Debug,
    S::Error: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Packer")
            .field("sink", &self.sink)
            .field("order", &self.order)
            .field("error", &self.error)
            .finish()
    }
}
