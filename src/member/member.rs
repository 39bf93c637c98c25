use std::fmt;

use serde::{Deserialize, Serialize};

use super::equaler::Equaler;

/// A wrapper type usable as the member of an [`Enum`](crate::Enum).
///
/// Identity is the wrapped value under [`Equaler`]; the wrapper itself adds
/// nothing. [`Member`] is the stock implementation and
/// [`declare_member!`](crate::declare_member) produces a distinct type per
/// enumeration.
pub trait EnumMember: Clone {
    type Value: Equaler;

    fn from_value(value: Self::Value) -> Self;

    fn value(&self) -> &Self::Value;

    fn into_value(self) -> Self::Value;

    /// Whether two members hold equal values.
    fn same(&self, other: &Self) -> bool {
        self.value().equal(other.value())
    }
}

/// A single typed value inside an enumeration.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Member<V> {
    pub val: V,
}

impl<V> Member<V> {
    pub const fn new(val: V) -> Self {
        Self { val }
    }
}

impl<V: Equaler + Clone> EnumMember for Member<V> {
    type Value = V;

    fn from_value(value: V) -> Self {
        Self { val: value }
    }

    fn value(&self) -> &V {
        &self.val
    }

    fn into_value(self) -> V {
        self.val
    }
}

impl<V: Equaler> PartialEq for Member<V> {
    fn eq(&self, other: &Self) -> bool {
        self.val.equal(&other.val)
    }
}

impl<V> From<V> for Member<V> {
    fn from(val: V) -> Self {
        Self { val }
    }
}

impl<V: fmt::Display> fmt::Display for Member<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.val.fmt(f)
    }
}

/// Declares a named member type wrapping a value type.
///
/// Each enumeration gets its own type, so members of one enumeration can't
/// be handed to another by mistake:
///
/// ```
/// use value_enum::{declare_member, Enum};
///
/// declare_member! {
///     /// A primary color.
///     pub struct Color(&'static str);
/// }
///
/// let colors = Enum::new([Color::new("red"), Color::new("green")]);
/// assert_eq!(colors.index(&Color::new("green")), 1);
/// ```
#[macro_export]
macro_rules! declare_member {
    ($($(#[$meta:meta])* $vis:vis struct $name:ident($value:ty);)+) => {
        $(
            $(#[$meta])*
            #[derive(Clone, Debug)]
            $vis struct $name {
                pub val: $value,
            }

            impl $name {
                #[allow(dead_code)]
                pub const fn new(val: $value) -> Self {
                    Self { val }
                }
            }

            impl $crate::EnumMember for $name {
                type Value = $value;

                fn from_value(value: $value) -> Self {
                    Self { val: value }
                }

                fn value(&self) -> &$value {
                    &self.val
                }

                fn into_value(self) -> $value {
                    self.val
                }
            }

            impl ::core::cmp::PartialEq for $name {
                fn eq(&self, other: &Self) -> bool {
                    $crate::Equaler::equal(&self.val, &other.val)
                }
            }

            impl ::core::convert::From<$value> for $name {
                fn from(val: $value) -> Self {
                    Self { val }
                }
            }
        )+
    };
}
