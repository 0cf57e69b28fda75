//! Appends primitive values to a byte sink in a chosen byte order, with a sticky error.
//!
//! ```
//! use bytepacker::{ByteOrder, Packer};
//!
//! let mut out: Vec<u8> = Vec::new();
//! let mut p = Packer::new(&mut out);
//! p.push_u16(0x0102)
//!     .push_bool(true)
//!     .push_str("abc");
//! p.set_byte_order(ByteOrder::LittleEndian);
//! p.push_i32(-2);
//! p.finish().unwrap();
//!
//! assert_eq!(out, [0x01, 0x02, 0x01, b'a', b'b', b'c', 0xfe, 0xff, 0xff, 0xff]);
//! ```
//!
//! A write that fails does not stop the chain. The error is recorded, later writes are skipped,
//! and the caller checks `Packer::error` or `Packer::finish` at the end.

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![forbid(unsafe_code)]
#![forbid(unused_must_use)]
#![warn(missing_docs)]

extern crate alloc;

mod byte_order;
mod packer;
mod sink;


pub use byte_order::ByteOrder;
pub use packer::Packer;
pub use sink::Sink;
