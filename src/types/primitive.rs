//! Scalar codecs: one per (width, byte order) pair.

use crate::buffer::{self, BigEndian, ByteOrder, LittleEndian, Scalar};
use crate::codec::{Codec, FixedSize, ParseInfo, ParseResult};
use crate::error::Error;
use core::marker::PhantomData;

/// The codec for a single scalar of type `T` carried in byte order `O`.
///
/// Rendered and built forms are both the scalar itself; there is nothing to
/// borrow.
pub struct Prim<T, O>(PhantomData<(T, O)>);

impl<T: Scalar, O: ByteOrder> Codec for Prim<T, O> {
    type Rendered<'a> = T;
    type Built = T;
    type Cfg = ();

    #[inline]
    fn parse_cfg(buf: &[u8], _: ()) -> ParseResult<'_, Self> {
        // Written as a comparison against the remaining length, so an empty
        // buffer fails cleanly rather than underflowing an offset.
        if buf.len() < T::WIDTH {
            return Err(Error::NotEnoughData);
        }
        Ok(ParseInfo::new(buffer::get::<T, O>(buf), &buf[T::WIDTH..]))
    }

    #[inline]
    fn render_cfg(buf: &[u8], _: ()) -> T {
        buffer::get::<T, O>(buf)
    }

    #[inline]
    fn build(rendered: &T) -> T {
        *rendered
    }

    #[inline]
    fn serialize_into<'b>(built: &T, out: &'b mut [u8]) -> &'b mut [u8] {
        buffer::put::<T, O>(*built, out)
    }

    #[inline]
    fn size_bytes(_: &T) -> usize {
        T::WIDTH
    }
}

impl<T: Scalar, O: ByteOrder> FixedSize for Prim<T, O> {
    const SIZE_BYTES: usize = T::WIDTH;
}

/// Unsigned byte. Byte order is immaterial at this width.
pub type U8 = Prim<u8, LittleEndian>;
/// Signed byte. Byte order is immaterial at this width.
pub type I8 = Prim<i8, LittleEndian>;

/// Little-endian unsigned 16-bit integer.
pub type LeU16 = Prim<u16, LittleEndian>;
/// Little-endian unsigned 32-bit integer.
pub type LeU32 = Prim<u32, LittleEndian>;
/// Little-endian unsigned 64-bit integer.
pub type LeU64 = Prim<u64, LittleEndian>;
/// Little-endian signed 16-bit integer.
pub type LeI16 = Prim<i16, LittleEndian>;
/// Little-endian signed 32-bit integer.
pub type LeI32 = Prim<i32, LittleEndian>;
/// Little-endian signed 64-bit integer.
pub type LeI64 = Prim<i64, LittleEndian>;
/// Little-endian IEEE-754 single.
pub type LeF32 = Prim<f32, LittleEndian>;
/// Little-endian IEEE-754 double.
pub type LeF64 = Prim<f64, LittleEndian>;

/// Big-endian unsigned 16-bit integer.
pub type BeU16 = Prim<u16, BigEndian>;
/// Big-endian unsigned 32-bit integer.
pub type BeU32 = Prim<u32, BigEndian>;
/// Big-endian unsigned 64-bit integer.
pub type BeU64 = Prim<u64, BigEndian>;
/// Big-endian signed 16-bit integer.
pub type BeI16 = Prim<i16, BigEndian>;
/// Big-endian signed 32-bit integer.
pub type BeI32 = Prim<i32, BigEndian>;
/// Big-endian signed 64-bit integer.
pub type BeI64 = Prim<i64, BigEndian>;
/// Big-endian IEEE-754 single.
pub type BeF32 = Prim<f32, BigEndian>;
/// Big-endian IEEE-754 double.
pub type BeF64 = Prim<f64, BigEndian>;
