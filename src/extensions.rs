//! Extension traits and conveniences over the core [`Codec`] contract.
//!
//! These cover the two common ergonomic cases: codecs that need no
//! parse-time context (`Cfg = ()`), and codecs whose built form is the
//! codec type itself (generated records and variants), which gain an
//! inherent-feeling `encode` method.

use crate::codec::{Codec, ParseResult};
use bytes::BytesMut;

/// Plain `parse`/`render` for codecs requiring no configuration.
pub trait CodecExt: Codec<Cfg = ()> {
    /// Parses a prefix of `buf`; shorthand for `parse_cfg(buf, ())`.
    #[inline]
    fn parse(buf: &[u8]) -> ParseResult<'_, Self> {
        Self::parse_cfg(buf, ())
    }

    /// Renders a previously validated prefix of `buf`; shorthand for
    /// `render_cfg(buf, ())`.
    #[inline]
    fn render(buf: &[u8]) -> Self::Rendered<'_> {
        Self::render_cfg(buf, ())
    }
}

impl<C: Codec<Cfg = ()>> CodecExt for C {}

/// Serializes a built value into a freshly allocated buffer.
pub fn encode<C: Codec>(built: &C::Built) -> BytesMut {
    let len = C::size_bytes(built);
    let mut buf = BytesMut::zeroed(len);
    let tail = C::serialize_into(built, &mut buf);
    debug_assert!(tail.is_empty());
    buf
}

/// `encode` as a method, for codecs that are their own built form.
pub trait Encode: Codec<Built = Self> {
    /// Serializes this value into a freshly allocated buffer.
    fn encode(&self) -> BytesMut {
        encode::<Self>(self)
    }
}

impl<C: Codec<Built = C>> Encode for C {}
