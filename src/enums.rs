//! Closed enumeration domains.
//!
//! A wire enumeration is a newtype over a fixed-width integer together with
//! the finite (possibly sparse) set of permitted values. The checked
//! constructor [`WireEnum::from_value`] is what parsers use; the unchecked
//! [`WireEnum::from_value_unchecked`] stores any raw value and backs the
//! lazy render path, where out-of-domain values must survive untouched.
//!
//! [`wire_enum!`](crate::wire_enum) expands a declaration into the newtype,
//! its value constants, and the [`WireEnum`] implementation, which is the
//! shape the schema compiler emits for enumeration types.

use crate::buffer::Scalar;
use crate::error::Error;
use core::fmt;

/// An integer type usable as an enumeration's underlying representation.
///
/// Widening to `i128` lets signed and unsigned domains share the bounds
/// arithmetic: every supported representation embeds losslessly.
pub trait EnumRepr: Scalar + Ord {
    /// Widens to the common arithmetic type.
    fn to_wide(self) -> i128;
    /// Narrows from the common arithmetic type.
    ///
    /// Only called with values previously widened from this type.
    fn from_wide(wide: i128) -> Self;
}

macro_rules! impl_enum_repr {
    ($($ty:ty),+) => {
        $(
            impl EnumRepr for $ty {
                #[inline]
                fn to_wide(self) -> i128 {
                    self as i128
                }

                #[inline]
                fn from_wide(wide: i128) -> Self {
                    wide as $ty
                }
            }
        )+
    };
}

impl_enum_repr!(u8, u16, u32, u64, i8, i16, i32, i64);

/// A closed enumeration over a fixed-width integer.
pub trait WireEnum: Copy + Eq + fmt::Debug + 'static {
    /// The underlying integer type.
    type Repr: EnumRepr;

    /// Every permitted value. Non-empty; values may be sparse and need not
    /// be declared in ascending order.
    const VALUES: &'static [Self];

    /// The declared name of each value, parallel to [`Self::VALUES`].
    const NAMES: &'static [&'static str];

    /// The underlying integer of this value.
    fn value(self) -> Self::Repr;

    /// Wraps a raw integer without checking the domain.
    fn from_value_unchecked(raw: Self::Repr) -> Self;

    /// Wraps a raw integer, failing with [`Error::Malformed`] when it is
    /// not one of [`Self::VALUES`].
    #[inline]
    fn from_value(raw: Self::Repr) -> Result<Self, Error> {
        let candidate = Self::from_value_unchecked(raw);
        if candidate.is_valid() {
            Ok(candidate)
        } else {
            Err(Error::Malformed)
        }
    }

    /// Whether this value is in the declared domain.
    #[inline]
    fn is_valid(self) -> bool {
        Self::VALUES.contains(&self)
    }

    /// The declared name of this value, or a placeholder for out-of-domain
    /// values produced by the unchecked constructor.
    fn name(self) -> &'static str {
        Self::VALUES
            .iter()
            .position(|v| *v == self)
            .map(|i| Self::NAMES[i])
            .unwrap_or("<invalid>")
    }

    /// Resolves a declared name back to its value.
    fn from_name(name: &str) -> Option<Self> {
        Self::NAMES
            .iter()
            .position(|n| *n == name)
            .map(|i| Self::VALUES[i])
    }
}

/// The inclusive bounds of an enumeration's underlying values, and the
/// zero-based bit encoding derived from them.
///
/// `encode` maps a value into `[0, span)` by subtracting `min`; `decode`
/// inverts it. Both are constant per enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumBound {
    /// Smallest underlying value.
    pub min: i128,
    /// Largest underlying value.
    pub max: i128,
}

impl EnumBound {
    /// Computes the bounds of `E` by scanning its declared values.
    pub fn of<E: WireEnum>() -> Self {
        let mut values = E::VALUES.iter().map(|v| v.value().to_wide());
        let first = values.next().expect("enumeration declares no values");
        let (min, max) = values.fold((first, first), |(min, max), v| {
            (min.min(v), max.max(v))
        });
        Self { min, max }
    }

    /// Number of bit positions the domain spans: `max - min + 1`.
    #[inline]
    pub fn span(&self) -> usize {
        (self.max - self.min + 1) as usize
    }

    /// Maps a value to its zero-based bit position.
    #[inline]
    pub fn encode<E: WireEnum>(&self, value: E) -> usize {
        (value.value().to_wide() - self.min) as usize
    }

    /// Maps a zero-based bit position back to a value.
    #[inline]
    pub fn decode<E: WireEnum>(&self, bit: usize) -> E {
        E::from_value_unchecked(<E::Repr as EnumRepr>::from_wide(self.min + bit as i128))
    }
}

/// Declares a wire enumeration: a newtype over the given integer type, one
/// associated constant per declared value, and the [`WireEnum`]
/// implementation tying them together.
///
/// ```
/// wireview::wire_enum! {
///     /// Available cookie flavors.
///     pub enum Flavor: u8 {
///         VANILLA = 0,
///         CHOCOLATE = 1,
///     }
/// }
///
/// use wireview::enums::WireEnum;
/// assert_eq!(Flavor::CHOCOLATE.value(), 1);
/// assert_eq!(Flavor::CHOCOLATE.name(), "CHOCOLATE");
/// assert!(Flavor::from_value(9).is_err());
/// ```
#[macro_export]
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $repr:ty {
            $($(#[$vmeta:meta])* $variant:ident = $value:expr),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash)]
        $vis struct $name($repr);

        impl $name {
            $(
                $(#[$vmeta])*
                pub const $variant: Self = Self($value);
            )+
        }

        impl $crate::enums::WireEnum for $name {
            type Repr = $repr;

            const VALUES: &'static [Self] = &[$(Self::$variant),+];
            const NAMES: &'static [&'static str] = &[$(stringify!($variant)),+];

            #[inline]
            fn value(self) -> $repr {
                self.0
            }

            #[inline]
            fn from_value_unchecked(raw: $repr) -> Self {
                Self(raw)
            }
        }

        impl ::core::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                let values = <$name as $crate::enums::WireEnum>::VALUES;
                let names = <$name as $crate::enums::WireEnum>::NAMES;
                match values.iter().position(|v| v == self) {
                    Some(i) => f.write_str(names[i]),
                    None => write!(f, concat!(stringify!($name), "({:?})"), self.0),
                }
            }
        }
    };
}
