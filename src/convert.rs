//! Conversions between adjacent versions of a message family.
//!
//! A process speaks every version `v1..vN` of a message family but runs its
//! logic against `vN` only. Each adjacent pair is linked by two
//! conversions: [`Upgrade`], which is total (anything an older sender can
//! say is expressible in the newer schema), and [`Downgrade`], which is
//! partial (a newer construct may have no older rendition and comes back
//! `None`).
//!
//! The walker itself is generated alongside the message family: the
//! received packet's payload is a variant over the version views, and the
//! handler for version `k` upgrades one step and recurses until it reaches
//! the latest. An upgrade is implemented view-to-view when the adjacent
//! wire layouts are compatible (an added enum value, an added variant
//! alternative) and built-to-built when they are not (an added field), in
//! which case the caller serializes the upgraded value and re-parses it to
//! keep walking on views. On the way back down, a `None` from [`Downgrade`]
//! means the response cannot be said in the requester's version; the
//! walker substitutes the schema's error alternative built at the latest
//! version — it never drops the reply silently.
//!
//! For every value `x` representable at version `k`,
//! `x.upgrade().downgrade() == Some(x)`.

/// Total conversion into the next version of a message family.
pub trait Upgrade<To> {
    /// Re-expresses this value in the newer schema.
    fn upgrade(self) -> To;
}

/// Partial conversion back to the prior version of a message family.
pub trait Downgrade<To> {
    /// Re-expresses this value in the older schema, or `None` when the
    /// older schema cannot say it.
    fn downgrade(self) -> Option<To>;
}
