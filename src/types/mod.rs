//! Codec implementations for the built-in wire shapes.

pub mod array;
pub mod enumeration;
pub mod list;
pub mod primitive;
pub mod vector;

pub use array::{ArrayCodec, ArrayView};
pub use enumeration::EnumCodec;
pub use list::{ListCodec, ListView};
pub use primitive::{
    BeF32, BeF64, BeI16, BeI32, BeI64, BeU16, BeU32, BeU64, LeF32, LeF64, LeI16, LeI32, LeI64,
    LeU16, LeU32, LeU64, Prim, I8, U8,
};
pub use vector::{VectorCodec, VectorView};
