//! The codec for lists whose elements vary in size.
//!
//! When elements are not fixed-stride, indexing into raw bytes would have
//! to re-scan every predecessor. Parsing therefore materializes the
//! rendered children into an owned, ordered vector of sub-views; each
//! sub-view still borrows the wire buffer.

use crate::codec::{render_unchecked, Codec, ParseInfo, ParseResult};
use crate::extensions::CodecExt;

/// The codec for `size` concatenated elements of `C`, where `C` may encode
/// to a different length per value. The count travels in [`Codec::Cfg`].
pub struct ListCodec<C>(core::marker::PhantomData<C>);

impl<C> Codec for ListCodec<C>
where
    C: Codec<Cfg = ()>,
{
    type Rendered<'a> = ListView<'a, C>;
    type Built = Vec<C::Built>;
    type Cfg = usize;

    fn parse_cfg(buf: &[u8], size: usize) -> ParseResult<'_, Self> {
        let mut parts = Vec::with_capacity(size);
        let mut tail = buf;
        for _ in 0..size {
            let (rendered, rest) = C::parse(tail)?.into_parts();
            parts.push(rendered);
            tail = rest;
        }
        Ok(ParseInfo::new(ListView { parts }, tail))
    }

    fn render_cfg(buf: &[u8], size: usize) -> ListView<'_, C> {
        render_unchecked::<Self>(buf, size)
    }

    fn build(rendered: &ListView<'_, C>) -> Vec<C::Built> {
        rendered.parts.iter().map(|part| C::build(part)).collect()
    }

    fn serialize_into<'b>(built: &Vec<C::Built>, out: &'b mut [u8]) -> &'b mut [u8] {
        built
            .iter()
            .fold(out, |out, element| C::serialize_into(element, out))
    }

    fn size_bytes(built: &Vec<C::Built>) -> usize {
        built.iter().map(C::size_bytes).sum()
    }
}

/// View over a heterogeneously-sized list: an owned sequence of sub-views.
pub struct ListView<'a, C: Codec> {
    parts: Vec<C::Rendered<'a>>,
}

impl<'a, C: Codec> ListView<'a, C> {
    /// The rendered element at `index`.
    ///
    /// # Panics
    ///
    /// Panics when `index` is out of bounds.
    pub fn get(&self, index: usize) -> C::Rendered<'a> {
        self.parts[index].clone()
    }

    /// The rendered elements, in order.
    pub fn as_slice(&self) -> &[C::Rendered<'a>] {
        &self.parts
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Whether the list has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Iterates the rendered elements in order.
    pub fn iter(&self) -> core::slice::Iter<'_, C::Rendered<'a>> {
        self.parts.iter()
    }
}

impl<'a, C: Codec> Clone for ListView<'a, C> {
    fn clone(&self) -> Self {
        Self {
            parts: self.parts.clone(),
        }
    }
}
