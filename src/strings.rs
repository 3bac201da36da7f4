//! Length-prefixed string payloads.
//!
//! A string on the wire is a record: an integer length followed by that
//! many 8-bit code units. Three prefix widths are provided. The payload is
//! raw bytes, not necessarily UTF-8; [`StringL8::as_str`] and friends check
//! on demand. Construction enforces that the payload length fits the
//! prefix, so serialization can never truncate a length.

use crate::buffer::LittleEndian;
use crate::codec::{Codec, ParseInfo, ParseResult};
use crate::error::{Error, TooLong};
use crate::extensions::CodecExt;
use crate::types::primitive::Prim;
use core::str::Utf8Error;

macro_rules! impl_string {
    ($(#[$meta:meta])* $name:ident, $view:ident, $prefix:ty) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
        pub struct $name {
            data: Vec<u8>,
        }

        impl $name {
            /// Largest payload length the prefix can describe.
            pub const MAX_LEN: usize = <$prefix>::MAX as usize;

            /// Wraps a byte payload, rejecting lengths the prefix cannot
            /// carry.
            pub fn new(data: Vec<u8>) -> Result<Self, TooLong> {
                if data.len() > Self::MAX_LEN {
                    return Err(TooLong {
                        len: data.len(),
                        max: Self::MAX_LEN,
                    });
                }
                Ok(Self { data })
            }

            /// Wraps the UTF-8 bytes of `value`.
            #[allow(clippy::should_implement_trait)]
            pub fn from_str(value: &str) -> Result<Self, TooLong> {
                Self::new(value.as_bytes().to_vec())
            }

            /// The raw payload.
            pub fn as_bytes(&self) -> &[u8] {
                &self.data
            }

            /// The payload as UTF-8, when it is.
            pub fn as_str(&self) -> Result<&str, Utf8Error> {
                core::str::from_utf8(&self.data)
            }

            /// Consumes into the raw payload.
            pub fn into_bytes(self) -> Vec<u8> {
                self.data
            }

            /// Payload length in code units.
            pub fn len(&self) -> usize {
                self.data.len()
            }

            /// Whether the payload is empty.
            pub fn is_empty(&self) -> bool {
                self.data.is_empty()
            }
        }

        impl Codec for $name {
            type Rendered<'a> = $view<'a>;
            type Built = Self;
            type Cfg = ();

            fn parse_cfg(buf: &[u8], _: ()) -> ParseResult<'_, Self> {
                let (len, tail) = Prim::<$prefix, LittleEndian>::parse(buf)?.into_parts();
                let len = len as usize;
                if tail.len() < len {
                    return Err(Error::NotEnoughData);
                }
                let (data, tail) = tail.split_at(len);
                Ok(ParseInfo::new($view { data }, tail))
            }

            fn render_cfg(buf: &[u8], _: ()) -> $view<'_> {
                let len = Prim::<$prefix, LittleEndian>::render(buf) as usize;
                let prefix = core::mem::size_of::<$prefix>();
                $view {
                    data: &buf[prefix..prefix + len],
                }
            }

            fn build(rendered: &$view<'_>) -> Self {
                Self {
                    data: rendered.data.to_vec(),
                }
            }

            fn serialize_into<'b>(built: &Self, out: &'b mut [u8]) -> &'b mut [u8] {
                // The constructor bounds the length, so the cast is exact.
                let out =
                    Prim::<$prefix, LittleEndian>::serialize_into(&(built.data.len() as $prefix), out);
                let (head, tail) = out.split_at_mut(built.data.len());
                head.copy_from_slice(&built.data);
                tail
            }

            fn size_bytes(built: &Self) -> usize {
                core::mem::size_of::<$prefix>() + built.data.len()
            }
        }

        /// View over the wire form: borrows the payload bytes.
        #[derive(Debug, Clone, Copy)]
        pub struct $view<'a> {
            data: &'a [u8],
        }

        impl<'a> $view<'a> {
            /// The borrowed payload.
            pub fn as_bytes(&self) -> &'a [u8] {
                self.data
            }

            /// The payload as UTF-8, when it is.
            pub fn as_str(&self) -> Result<&'a str, Utf8Error> {
                core::str::from_utf8(self.data)
            }

            /// Payload length in code units.
            pub fn len(&self) -> usize {
                self.data.len()
            }

            /// Whether the payload is empty.
            pub fn is_empty(&self) -> bool {
                self.data.is_empty()
            }

            /// Total encoded width, prefix included. Record views use this
            /// to locate the field that follows.
            pub fn wire_size(&self) -> usize {
                core::mem::size_of::<$prefix>() + self.data.len()
            }

            /// Materializes an owned string.
            pub fn build(&self) -> $name {
                <$name as Codec>::build(self)
            }
        }
    };
}

impl_string!(
    /// A byte string with an 8-bit length prefix.
    StringL8,
    StringL8View,
    u8
);
impl_string!(
    /// A byte string with a little-endian 16-bit length prefix.
    StringL16,
    StringL16View,
    u16
);
impl_string!(
    /// A byte string with a little-endian 32-bit length prefix.
    StringL32,
    StringL32View,
    u32
);
