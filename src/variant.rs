//! Support for tagged unions.
//!
//! A variant's wire form is its tag (an enumeration, at the width and byte
//! order the schema declares) immediately followed by the payload of the
//! alternative that tag selects. The generated codec reads the tag with
//! [`parse_tag`] and dispatches on the result; because the tag is checked
//! first, an unknown tag fails with `Malformed` before a single payload
//! byte is consumed. The render path reads the tag with [`render_tag`],
//! which preserves an out-of-domain tag through the unchecked constructor —
//! observable wherever a record view exposes the raw tag field.
//!
//! Dispatch itself is an exhaustive `match` over the generated view enum;
//! every alternative is an arm, and nested variants recurse naturally.

use crate::buffer::ByteOrder;
use crate::enums::WireEnum;
use crate::error::Error;
use crate::extensions::CodecExt;
use crate::types::enumeration::EnumCodec;

/// Reads and validates a variant tag, returning it with the payload bytes.
///
/// An out-of-domain tag is `Malformed`.
#[inline]
pub fn parse_tag<'a, E: WireEnum, O: ByteOrder>(buf: &'a [u8]) -> Result<(E, &'a [u8]), Error> {
    let info = EnumCodec::<E, O>::parse(buf)?;
    Ok((info.rendered, info.tail))
}

/// Reads a variant tag without validating its domain, returning it with the
/// payload bytes.
///
/// Only for buffers that already passed parsing; the buffer must be at
/// least the tag wide.
#[inline]
pub fn render_tag<'a, E: WireEnum, O: ByteOrder>(buf: &'a [u8]) -> (E, &'a [u8]) {
    let tag = EnumCodec::<E, O>::render(buf);
    (tag, &buf[core::mem::size_of::<E::Repr>()..])
}

/// Typed access to a variant's active alternative.
///
/// Generated variants implement this once per alternative, giving callers a
/// presence handle without matching: `view.alt()` is `Some` exactly when
/// the active alternative has type `T`.
pub trait Alt<T> {
    /// The active alternative, when it is a `T`.
    fn alt(&self) -> Option<&T>;
}
