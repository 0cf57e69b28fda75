/// The order in which the bytes of a multi-byte value are written.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, Default)]
pub enum ByteOrder {
    /// Most significant byte first. This is the default.
    #[default]
    BigEndian,
    /// Least significant byte first.
    LittleEndian,
}

impl ByteOrder {
    /// Returns the byte order of the machine this code is running on.
    pub fn native() -> Self {
        if cfg!(target_endian = "little") {
            Self::LittleEndian
        } else {
            Self::BigEndian
        }
    }
}
