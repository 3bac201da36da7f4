//! Runtime for schema-generated binary messages.
//!
//! # Overview
//!
//! A schema compiler (external to this crate) turns message descriptions
//! into concrete record, variant, and enumeration types. This crate is the
//! runtime those types lean on: endianness-aware scalar access, the
//! [`Codec`] contract relating a zero-copy **rendered** view to an owned
//! **built** value, compositional codecs for arrays, vectors, and lists,
//! enumeration domains with the [`EnumSet`]/[`EnumMap`] containers keyed by
//! them, tagged-union support, version-to-version conversion, and a
//! symmetric JSON translation.
//!
//! Parsing is strict and total: [`Codec::parse_cfg`] is the one entry point
//! that is safe on untrusted bytes, and it fails with exactly one of two
//! [`Error`] kinds — the buffer ran out, or a value violated its declared
//! domain. Rendering is the unchecked fast path over bytes that already
//! parsed; building materializes owned values; serializing writes them
//! back. `serialize(parse(b).build()) == b` for every wire buffer `b` that
//! parses.
//!
//! # Example
//!
//! ```
//! use wireview::buffer::LittleEndian;
//! use wireview::extensions::{encode, CodecExt};
//! use wireview::types::{EnumCodec, Prim};
//!
//! wireview::wire_enum! {
//!     pub enum Flavor: u8 {
//!         VANILLA = 0,
//!         CHOCOLATE = 1,
//!     }
//! }
//!
//! # fn main() -> Result<(), wireview::Error> {
//! // A record of quantity (little-endian i32) then flavor (u8 enum):
//! // fields parse sequentially, each feeding the next its tail.
//! let wire = [0x0a, 0x00, 0x00, 0x00, 0x01];
//! let (quantity, tail) = <Prim<i32, LittleEndian>>::parse(&wire)?.into_parts();
//! let (flavor, tail) = EnumCodec::<Flavor, LittleEndian>::parse(tail)?.into_parts();
//! assert_eq!(quantity, 10);
//! assert_eq!(flavor, Flavor::CHOCOLATE);
//! assert!(tail.is_empty());
//!
//! // Owned values serialize back to the same bytes.
//! let bytes = encode::<Prim<i32, LittleEndian>>(&quantity);
//! assert_eq!(&bytes[..], &wire[..4]);
//! # Ok(())
//! # }
//! ```

pub mod buffer;
pub mod codec;
pub mod convert;
pub mod enum_map;
pub mod enum_set;
pub mod enums;
pub mod error;
pub mod extensions;
pub mod json;
pub mod strings;
pub mod types;
pub mod variant;

// Re-export main types and traits
pub use codec::{render_unchecked, Codec, FixedSize, ParseInfo, ParseResult};
pub use convert::{Downgrade, Upgrade};
pub use enum_map::EnumMap;
pub use enum_set::EnumSet;
pub use enums::{EnumBound, WireEnum};
pub use error::{Error, TooLong};
pub use extensions::{encode, CodecExt, Encode};
pub use json::{parse_json, serialize_json, JsonCodec};
