//! Translation between built values and a generic JSON tree.
//!
//! Every codec that takes part in the textual form pairs its built type
//! with a symmetric `to_json`/`from_json` translation over
//! [`serde_json::Value`]. The binary and textual paths share the error
//! model: a number that does not fit its target width, an unknown
//! enumeration name, or a container whose length disagrees with the schema
//! all fail with `Malformed`.
//!
//! Schema-generated records translate to objects keyed by field name (with
//! derived length and tag fields emitted from the data they describe) and
//! variants to single-key objects keyed by the alternative's name; those
//! implementations are generated alongside the types. The law both sides
//! maintain: `parse_json(serialize_json(x)) == x` for every in-range `x`.

use crate::buffer::{ByteOrder, Scalar};
use crate::codec::{Codec, FixedSize};
use crate::enums::WireEnum;
use crate::error::Error;
use crate::strings::{StringL16, StringL32, StringL8};
use crate::types::array::ArrayCodec;
use crate::types::enumeration::EnumCodec;
use crate::types::list::ListCodec;
use crate::types::primitive::Prim;
use crate::types::vector::VectorCodec;
use serde_json::{Map, Value};

/// Symmetric translation between a codec's built form and a JSON tree.
pub trait JsonCodec: Codec {
    /// Renders `built` as a JSON tree.
    fn to_json(built: &Self::Built) -> Value;

    /// Reads a built value back out of a JSON tree.
    ///
    /// `cfg` plays the same role as in binary parsing: the element count a
    /// preceding field declared for vectors and lists.
    fn from_json(value: &Value, cfg: Self::Cfg) -> Result<Self::Built, Error>;
}

/// Renders a built value as a JSON tree.
pub fn serialize_json<C: JsonCodec>(built: &C::Built) -> Value {
    C::to_json(built)
}

/// Reads a built value out of a JSON tree.
pub fn parse_json<C: JsonCodec<Cfg = ()>>(value: &Value) -> Result<C::Built, Error> {
    C::from_json(value, ())
}

/// A scalar with a JSON number rendition. Fit is checked when reading.
pub trait JsonScalar: Scalar {
    /// This value as a JSON number.
    fn to_number(self) -> Value;
    /// Reads a value, failing with `Malformed` when `value` is not a
    /// number or does not fit this width.
    fn from_number(value: &Value) -> Result<Self, Error>;
}

macro_rules! impl_json_unsigned {
    ($($ty:ty),+) => {
        $(
            impl JsonScalar for $ty {
                #[inline]
                fn to_number(self) -> Value {
                    Value::from(self)
                }

                fn from_number(value: &Value) -> Result<Self, Error> {
                    value
                        .as_u64()
                        .and_then(|raw| <$ty>::try_from(raw).ok())
                        .ok_or(Error::Malformed)
                }
            }
        )+
    };
}

macro_rules! impl_json_signed {
    ($($ty:ty),+) => {
        $(
            impl JsonScalar for $ty {
                #[inline]
                fn to_number(self) -> Value {
                    Value::from(self)
                }

                fn from_number(value: &Value) -> Result<Self, Error> {
                    value
                        .as_i64()
                        .and_then(|raw| <$ty>::try_from(raw).ok())
                        .ok_or(Error::Malformed)
                }
            }
        )+
    };
}

impl_json_unsigned!(u8, u16, u32, u64);
impl_json_signed!(i8, i16, i32, i64);

impl JsonScalar for f32 {
    #[inline]
    fn to_number(self) -> Value {
        Value::from(self)
    }

    fn from_number(value: &Value) -> Result<Self, Error> {
        value.as_f64().map(|raw| raw as f32).ok_or(Error::Malformed)
    }
}

impl JsonScalar for f64 {
    #[inline]
    fn to_number(self) -> Value {
        Value::from(self)
    }

    fn from_number(value: &Value) -> Result<Self, Error> {
        value.as_f64().ok_or(Error::Malformed)
    }
}

impl<T: JsonScalar, O: ByteOrder> JsonCodec for Prim<T, O> {
    fn to_json(built: &T) -> Value {
        built.to_number()
    }

    fn from_json(value: &Value, _: ()) -> Result<T, Error> {
        T::from_number(value)
    }
}

impl<E: WireEnum, O: ByteOrder> JsonCodec for EnumCodec<E, O> {
    fn to_json(built: &E) -> Value {
        Value::from(built.name())
    }

    fn from_json(value: &Value, _: ()) -> Result<E, Error> {
        value
            .as_str()
            .and_then(E::from_name)
            .ok_or(Error::Malformed)
    }
}

impl<C, const N: usize> JsonCodec for ArrayCodec<C, N>
where
    C: FixedSize + JsonCodec<Cfg = ()>,
{
    fn to_json(built: &[C::Built; N]) -> Value {
        Value::Array(built.iter().map(C::to_json).collect())
    }

    fn from_json(value: &Value, _: ()) -> Result<[C::Built; N], Error> {
        let elements = value.as_array().ok_or(Error::Malformed)?;
        if elements.len() != N {
            return Err(Error::Malformed);
        }
        let built: Vec<C::Built> = elements
            .iter()
            .map(|element| C::from_json(element, ()))
            .collect::<Result<_, _>>()?;
        built.try_into().map_err(|_| Error::Malformed)
    }
}

fn sized_array_from_json<C: JsonCodec<Cfg = ()>>(
    value: &Value,
    size: usize,
) -> Result<Vec<C::Built>, Error> {
    let elements = value.as_array().ok_or(Error::Malformed)?;
    if elements.len() != size {
        return Err(Error::Malformed);
    }
    elements
        .iter()
        .map(|element| C::from_json(element, ()))
        .collect()
}

impl<C> JsonCodec for VectorCodec<C>
where
    C: FixedSize + JsonCodec<Cfg = ()>,
{
    fn to_json(built: &Vec<C::Built>) -> Value {
        Value::Array(built.iter().map(C::to_json).collect())
    }

    /// The element count comes from the size field that precedes the
    /// vector in its record; a length mismatch is `Malformed`.
    fn from_json(value: &Value, size: usize) -> Result<Vec<C::Built>, Error> {
        sized_array_from_json::<C>(value, size)
    }
}

impl<C> JsonCodec for ListCodec<C>
where
    C: JsonCodec<Cfg = ()>,
{
    fn to_json(built: &Vec<C::Built>) -> Value {
        Value::Array(built.iter().map(C::to_json).collect())
    }

    fn from_json(value: &Value, size: usize) -> Result<Vec<C::Built>, Error> {
        sized_array_from_json::<C>(value, size)
    }
}

macro_rules! impl_json_string {
    ($($name:ident),+) => {
        $(
            impl JsonCodec for $name {
                /// The wire-faithful record form: `{"len": n, "data": [..]}`.
                /// Payloads are raw code units, so the translation stays
                /// lossless for non-UTF-8 content.
                fn to_json(built: &Self) -> Value {
                    let mut object = Map::new();
                    object.insert("len".into(), Value::from(built.len() as u64));
                    object.insert(
                        "data".into(),
                        Value::Array(built.as_bytes().iter().map(|b| Value::from(*b)).collect()),
                    );
                    Value::Object(object)
                }

                fn from_json(value: &Value, _: ()) -> Result<Self, Error> {
                    let object = value.as_object().ok_or(Error::Malformed)?;
                    let len = object
                        .get("len")
                        .and_then(Value::as_u64)
                        .ok_or(Error::Malformed)?;
                    let data = object
                        .get("data")
                        .and_then(Value::as_array)
                        .ok_or(Error::Malformed)?;
                    if data.len() as u64 != len {
                        return Err(Error::Malformed);
                    }
                    let bytes: Vec<u8> = data
                        .iter()
                        .map(u8::from_number)
                        .collect::<Result<_, _>>()?;
                    Self::new(bytes).map_err(|_| Error::Malformed)
                }
            }
        )+
    };
}

impl_json_string!(StringL8, StringL16, StringL32);
