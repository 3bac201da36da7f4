//! The codec for enumeration fields.

use crate::buffer::ByteOrder;
use crate::codec::{Codec, FixedSize, ParseInfo, ParseResult};
use crate::enums::WireEnum;
use crate::types::primitive::Prim;
use core::marker::PhantomData;

/// The codec for an enumeration `E` carried as its underlying integer in
/// byte order `O`.
///
/// Parsing validates the domain eagerly: an out-of-range raw value fails
/// with `Malformed`. Rendering is lazy: the raw value is wrapped with the
/// unchecked constructor and survives as-is, which is what makes rendering
/// infallible on parse-validated buffers.
pub struct EnumCodec<E, O>(PhantomData<(E, O)>);

impl<E: WireEnum, O: ByteOrder> Codec for EnumCodec<E, O> {
    type Rendered<'a> = E;
    type Built = E;
    type Cfg = ();

    #[inline]
    fn parse_cfg(buf: &[u8], _: ()) -> ParseResult<'_, Self> {
        let (raw, tail) = Prim::<E::Repr, O>::parse_cfg(buf, ())?.into_parts();
        Ok(ParseInfo::new(E::from_value(raw)?, tail))
    }

    #[inline]
    fn render_cfg(buf: &[u8], _: ()) -> E {
        E::from_value_unchecked(Prim::<E::Repr, O>::render_cfg(buf, ()))
    }

    #[inline]
    fn build(rendered: &E) -> E {
        *rendered
    }

    #[inline]
    fn serialize_into<'b>(built: &E, out: &'b mut [u8]) -> &'b mut [u8] {
        Prim::<E::Repr, O>::serialize_into(&built.value(), out)
    }

    #[inline]
    fn size_bytes(_: &E) -> usize {
        Prim::<E::Repr, O>::SIZE_BYTES
    }
}

impl<E: WireEnum, O: ByteOrder> FixedSize for EnumCodec<E, O> {
    const SIZE_BYTES: usize = Prim::<E::Repr, O>::SIZE_BYTES;
}
