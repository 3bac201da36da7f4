//! Core codec trait and the parse result machinery.
//!
//! A codec is a zero-sized type describing one wire shape. It relates two
//! representations of the same message: a [`Codec::Rendered`] view that
//! borrows the wire bytes and decodes on demand, and a [`Codec::Built`]
//! value that owns its fields. Parsing goes bytes → view, building goes
//! view → owned, and serialization goes owned → bytes; there is no direct
//! owned → view path (serialize, then parse).
//!
//! # Records
//!
//! Schema-generated records compose codecs sequentially: each field's
//! `parse_cfg` consumes a prefix of the buffer and its [`ParseInfo::tail`]
//! feeds the next field. Serialization chains [`Codec::serialize_into`]
//! tails the same way. A trailing field whose size depends on a prior
//! field's runtime value (a *virtual* field) is left out of the record's
//! own parse: the record parse stops at the last statically determinable
//! field, returns the unconsumed suffix as its tail, and the generated view
//! exposes a method taking that tail and parsing the deferred field on
//! demand. That keeps rendering the outer record O(1) in the virtual
//! field's size and lets callers skip tails they never touch.

use crate::error::Error;

/// A successful parse: the rendered view plus the input suffix after the
/// consumed region.
#[derive(Debug, Clone, Copy)]
pub struct ParseInfo<'a, T> {
    /// The zero-copy view over the consumed bytes.
    pub rendered: T,
    /// The rest of the input.
    pub tail: &'a [u8],
}

impl<'a, T> ParseInfo<'a, T> {
    /// Pairs a rendered view with its tail.
    #[inline]
    pub fn new(rendered: T, tail: &'a [u8]) -> Self {
        Self { rendered, tail }
    }

    /// Splits into `(rendered, tail)`, the shape field-by-field record
    /// parsers chain on.
    #[inline]
    pub fn into_parts(self) -> (T, &'a [u8]) {
        (self.rendered, self.tail)
    }
}

/// Result of parsing a prefix of `'a` bytes with codec `C`.
pub type ParseResult<'a, C> = Result<ParseInfo<'a, <C as Codec>::Rendered<'a>>, Error>;

/// A statically-known description of a wire shape.
///
/// `Cfg` carries parse-time context a codec cannot know by itself: `()` for
/// self-delimiting shapes, the element count (declared by a preceding field
/// of the enclosing record) for vectors and lists. Codecs with `Cfg = ()`
/// get the plain `parse`/`render` entry points from
/// [`CodecExt`](crate::extensions::CodecExt).
pub trait Codec: Sized {
    /// Zero-copy view borrowing the wire bytes.
    type Rendered<'a>: Clone;
    /// Owned, fully materialized value.
    type Built;
    /// Parse-time context.
    type Cfg: Copy;

    /// Validates and decodes a prefix of `buf`, returning the view and the
    /// unconsumed tail.
    ///
    /// This is the only entry point that is safe on untrusted input. It
    /// checks lengths and eagerly validates enumeration domains.
    fn parse_cfg(buf: &[u8], cfg: Self::Cfg) -> ParseResult<'_, Self>;

    /// Decodes a prefix of `buf` without validating.
    ///
    /// The buffer must previously have passed [`Codec::parse_cfg`];
    /// rendering unvalidated bytes may panic. Unlike `parse_cfg`, this path
    /// does not check enumeration domains, so an out-of-domain enum value
    /// survives rendering and is observable through the view.
    fn render_cfg(buf: &[u8], cfg: Self::Cfg) -> Self::Rendered<'_>;

    /// Materializes an owned value from a view.
    fn build(rendered: &Self::Rendered<'_>) -> Self::Built;

    /// Writes the wire form of `built` at the front of `out` and returns
    /// the tail after the written region.
    ///
    /// `out` must hold at least [`Codec::size_bytes`] bytes.
    fn serialize_into<'b>(built: &Self::Built, out: &'b mut [u8]) -> &'b mut [u8];

    /// The exact number of bytes [`Codec::serialize_into`] writes for
    /// `built`.
    fn size_bytes(built: &Self::Built) -> usize;
}

/// A codec whose wire form has the same length for every value.
pub trait FixedSize: Codec {
    /// Encoded width in bytes.
    const SIZE_BYTES: usize;
}

/// Renders by parsing, for codecs whose views must materialize sub-views.
///
/// # Panics
///
/// Panics if `buf` does not parse; the render contract only admits buffers
/// that already passed [`Codec::parse_cfg`].
pub fn render_unchecked<C: Codec>(buf: &[u8], cfg: C::Cfg) -> C::Rendered<'_> {
    match C::parse_cfg(buf, cfg) {
        Ok(info) => info.rendered,
        Err(err) => panic!("render over unvalidated bytes: {err}"),
    }
}
