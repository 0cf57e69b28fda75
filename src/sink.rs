/// A destination that accepts bytes.
///
/// This is the only capability that `Packer` needs. Each call either writes all of `bytes` or
/// reports a failure; `Packer` does not retry and does not try to detect short writes on its own.
pub trait Sink {
    /// The failure reported by the sink.
    type Error;

    /// Writes all of `bytes` to the sink.
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), Self::Error>;
}

/// Any `std::io::Write` can be used as a sink. This covers `Vec<u8>`, `&mut Vec<u8>`, files,
/// sockets, and `Cursor<&mut [u8]>`, which fails with `WriteZero` once it is full.
#[cfg(feature = "std")]
impl<W: std::io::Write + ?Sized> Sink for W {
    type Error = std::io::Error;

    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        std::io::Write::write_all(self, bytes)
    }
}

#[cfg(not(feature = "std"))]
impl Sink for alloc::vec::Vec<u8> {
    type Error = core::convert::Infallible;

    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        self.extend_from_slice(bytes);
        Ok(())
    }
}

#[cfg(not(feature = "std"))]
impl<S: Sink + ?Sized> Sink for &mut S {
    type Error = S::Error;

    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        (**self).write_bytes(bytes)
    }
}
