//! The codec for fixed-stride vectors whose element count is declared by a
//! preceding field of the enclosing record.

use crate::codec::{Codec, FixedSize, ParseInfo, ParseResult};
use crate::extensions::CodecExt;
use core::marker::PhantomData;

/// The codec for `size` elements of fixed-size `C`, concatenated. The count
/// travels in [`Codec::Cfg`]; indexing the view is O(1) by stride.
pub struct VectorCodec<C>(PhantomData<C>);

impl<C> Codec for VectorCodec<C>
where
    C: FixedSize + Codec<Cfg = ()>,
{
    type Rendered<'a> = VectorView<'a, C>;
    type Built = Vec<C::Built>;
    type Cfg = usize;

    fn parse_cfg(buf: &[u8], size: usize) -> ParseResult<'_, Self> {
        let mut tail = buf;
        for _ in 0..size {
            tail = C::parse(tail)?.tail;
        }
        Ok(ParseInfo::new(Self::render_cfg(buf, size), tail))
    }

    #[inline]
    fn render_cfg(buf: &[u8], size: usize) -> VectorView<'_, C> {
        VectorView {
            buf: &buf[..size * C::SIZE_BYTES],
            len: size,
            _marker: PhantomData,
        }
    }

    fn build(rendered: &VectorView<'_, C>) -> Vec<C::Built> {
        (0..rendered.len())
            .map(|i| C::build(&rendered.get(i)))
            .collect()
    }

    fn serialize_into<'b>(built: &Vec<C::Built>, out: &'b mut [u8]) -> &'b mut [u8] {
        built
            .iter()
            .fold(out, |out, element| C::serialize_into(element, out))
    }

    #[inline]
    fn size_bytes(built: &Vec<C::Built>) -> usize {
        C::SIZE_BYTES * built.len()
    }
}

/// View over the wire form of a fixed-stride vector.
pub struct VectorView<'a, C> {
    buf: &'a [u8],
    len: usize,
    _marker: PhantomData<C>,
}

impl<'a, C> VectorView<'a, C>
where
    C: FixedSize + Codec<Cfg = ()> + 'a,
{
    /// Renders the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics when `index` is out of bounds.
    pub fn get(&self, index: usize) -> C::Rendered<'a> {
        assert!(
            index < self.len,
            "vector index {index} out of bounds ({})",
            self.len
        );
        C::render(&self.buf[index * C::SIZE_BYTES..(index + 1) * C::SIZE_BYTES])
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the vector has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterates the rendered elements in order.
    pub fn iter(&self) -> impl Iterator<Item = C::Rendered<'a>> + 'a {
        let view = *self;
        (0..view.len).map(move |i| view.get(i))
    }
}

impl<C> Clone for VectorView<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for VectorView<'_, C> {}
