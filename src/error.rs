//! Error types returned by parsing and construction.

use thiserror::Error;

/// The ways a parse can fail.
///
/// Every fallible codec operation reports one of these two kinds and
/// propagates inner failures unchanged; no layer maps one kind into the
/// other or invents new ones.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The next step would read past the end of the buffer.
    #[error("not enough data")]
    NotEnoughData,

    /// A value violated its declared domain: an out-of-range enumeration,
    /// a numeric literal that does not fit its target width, or a container
    /// whose length disagrees with the schema.
    #[error("malformed input")]
    Malformed,
}

/// A length-prefixed string was given more payload than its prefix can
/// describe.
///
/// This is a construction failure, not a parse failure: wire data can never
/// trigger it because the prefix read from the wire bounds the payload.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("length {len} exceeds prefix capacity {max}")]
pub struct TooLong {
    /// The rejected payload length.
    pub len: usize,
    /// The largest length the prefix can carry.
    pub max: usize,
}
