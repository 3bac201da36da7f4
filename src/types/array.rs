//! The codec for fixed-length arrays of fixed-size elements.

use crate::codec::{Codec, FixedSize, ParseInfo, ParseResult};
use crate::extensions::CodecExt;
use core::marker::PhantomData;

/// The codec for exactly `N` elements of `C`, concatenated.
pub struct ArrayCodec<C, const N: usize>(PhantomData<C>);

impl<C, const N: usize> Codec for ArrayCodec<C, N>
where
    C: FixedSize + Codec<Cfg = ()>,
{
    type Rendered<'a> = ArrayView<'a, C, N>;
    type Built = [C::Built; N];
    type Cfg = ();

    fn parse_cfg(buf: &[u8], _: ()) -> ParseResult<'_, Self> {
        let mut tail = buf;
        for _ in 0..N {
            tail = C::parse(tail)?.tail;
        }
        Ok(ParseInfo::new(Self::render_cfg(buf, ()), tail))
    }

    #[inline]
    fn render_cfg(buf: &[u8], _: ()) -> ArrayView<'_, C, N> {
        ArrayView {
            buf: &buf[..N * C::SIZE_BYTES],
            _marker: PhantomData,
        }
    }

    fn build(rendered: &ArrayView<'_, C, N>) -> [C::Built; N] {
        core::array::from_fn(|i| C::build(&rendered.get(i)))
    }

    fn serialize_into<'b>(built: &[C::Built; N], out: &'b mut [u8]) -> &'b mut [u8] {
        built
            .iter()
            .fold(out, |out, element| C::serialize_into(element, out))
    }

    #[inline]
    fn size_bytes(_: &[C::Built; N]) -> usize {
        N * C::SIZE_BYTES
    }
}

impl<C, const N: usize> FixedSize for ArrayCodec<C, N>
where
    C: FixedSize + Codec<Cfg = ()>,
{
    const SIZE_BYTES: usize = N * C::SIZE_BYTES;
}

/// View over the wire form of an `N`-element array; elements are re-rendered
/// on demand by stride.
pub struct ArrayView<'a, C, const N: usize> {
    buf: &'a [u8],
    _marker: PhantomData<C>,
}

impl<'a, C, const N: usize> ArrayView<'a, C, N>
where
    C: FixedSize + Codec<Cfg = ()> + 'a,
{
    /// Renders the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics when `index >= N`.
    pub fn get(&self, index: usize) -> C::Rendered<'a> {
        assert!(index < N, "array index {index} out of bounds ({N})");
        C::render(&self.buf[index * C::SIZE_BYTES..(index + 1) * C::SIZE_BYTES])
    }

    /// Number of elements.
    #[allow(clippy::len_without_is_empty)]
    pub const fn len(&self) -> usize {
        N
    }

    /// Iterates the rendered elements in order.
    pub fn iter(&self) -> impl Iterator<Item = C::Rendered<'a>> + 'a {
        let view = *self;
        (0..N).map(move |i| view.get(i))
    }
}

impl<C, const N: usize> Clone for ArrayView<'_, C, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C, const N: usize> Copy for ArrayView<'_, C, N> {}
