//! A dense map keyed by a wire enumeration.
//!
//! Storage is one slot per position in the domain's `[min, max]` window,
//! every slot present and default-initialized; there is no per-key presence
//! bit. Indexing is a subtraction, and "empty" means every slot still holds
//! the default value. Gap slots of a sparse domain exist as storage but are
//! never visited by iteration.

use crate::enums::{EnumBound, WireEnum};
use core::fmt;
use core::marker::PhantomData;
use core::ops::{Index, IndexMut};

/// A map from enumeration values to `V`, dense in the enumeration's domain.
pub struct EnumMap<E: WireEnum, V> {
    bound: EnumBound,
    slots: Vec<V>,
    _marker: PhantomData<E>,
}

impl<E: WireEnum, V: Default> EnumMap<E, V> {
    /// Creates a map with every slot holding `V::default()`.
    pub fn new() -> Self {
        let bound = EnumBound::of::<E>();
        let mut slots = Vec::with_capacity(bound.span());
        slots.resize_with(bound.span(), V::default);
        Self {
            bound,
            slots,
            _marker: PhantomData,
        }
    }
}

impl<E: WireEnum, V> EnumMap<E, V> {
    /// Returns the slot for `key`, or `None` when `key` is outside the
    /// declared domain.
    pub fn get(&self, key: E) -> Option<&V> {
        key.is_valid().then(|| &self.slots[self.bound.encode(key)])
    }

    /// Mutable variant of [`EnumMap::get`].
    pub fn get_mut(&mut self, key: E) -> Option<&mut V> {
        key.is_valid()
            .then(|| &mut self.slots[self.bound.encode(key)])
    }

    /// Iterates `(value, slot)` pairs over the declared domain in ascending
    /// underlying-integer order.
    pub fn iter(&self) -> impl Iterator<Item = (E, &V)> + '_ {
        let mut keys: Vec<E> = E::VALUES.to_vec();
        keys.sort_by_key(|k| k.value());
        keys.into_iter()
            .map(move |k| (k, &self.slots[self.bound.encode(k)]))
    }
}

impl<E: WireEnum, V: Default + PartialEq> EnumMap<E, V> {
    /// Whether every slot still holds the default value.
    pub fn is_empty(&self) -> bool {
        let default = V::default();
        self.slots.iter().all(|slot| *slot == default)
    }
}

impl<E: WireEnum, V> Index<E> for EnumMap<E, V> {
    type Output = V;

    /// # Panics
    ///
    /// Panics when `key` is outside the declared domain (only reachable
    /// through the unchecked enum constructor).
    fn index(&self, key: E) -> &V {
        assert!(key.is_valid(), "key outside the enumeration domain");
        &self.slots[self.bound.encode(key)]
    }
}

impl<E: WireEnum, V> IndexMut<E> for EnumMap<E, V> {
    fn index_mut(&mut self, key: E) -> &mut V {
        assert!(key.is_valid(), "key outside the enumeration domain");
        &mut self.slots[self.bound.encode(key)]
    }
}

impl<E: WireEnum, V: Default> Default for EnumMap<E, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: WireEnum, V: Clone> Clone for EnumMap<E, V> {
    fn clone(&self) -> Self {
        Self {
            bound: self.bound,
            slots: self.slots.clone(),
            _marker: PhantomData,
        }
    }
}

impl<E: WireEnum, V: PartialEq> PartialEq for EnumMap<E, V> {
    fn eq(&self, other: &Self) -> bool {
        self.slots == other.slots
    }
}

impl<E: WireEnum, V: Eq> Eq for EnumMap<E, V> {}

impl<E: WireEnum, V: fmt::Debug> fmt::Debug for EnumMap<E, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
