/// Equality used wherever two enum values are compared.
///
/// Every value type stored in an [`Enum`](crate::Enum) implements this
/// trait. Most types want plain structural equality and get it through
/// [`structural_equaler!`](crate::structural_equaler); a type that needs
/// looser matching (case folding, comparing a single key field) implements
/// `equal` by hand, and that implementation is then the only notion of
/// equality used for its members.
pub trait Equaler {
    fn equal(&self, other: &Self) -> bool;
}

/// Implements [`Equaler`] for each listed type by delegating to `PartialEq`.
///
/// ```
/// use value_enum::{structural_equaler, Equaler};
///
/// #[derive(PartialEq)]
/// struct Point(i32, i32);
///
/// structural_equaler!(Point);
///
/// assert!(Point(1, 2).equal(&Point(1, 2)));
/// ```
#[macro_export]
macro_rules! structural_equaler {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Equaler for $ty {
                #[inline]
                fn equal(&self, other: &Self) -> bool {
                    ::core::cmp::PartialEq::eq(self, other)
                }
            }
        )+
    };
}

structural_equaler!(
    (),
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
    str,
    String,
);

impl<T: Equaler + ?Sized> Equaler for &T {
    fn equal(&self, other: &Self) -> bool {
        (**self).equal(*other)
    }
}

impl<T: Equaler + ?Sized> Equaler for Box<T> {
    fn equal(&self, other: &Self) -> bool {
        (**self).equal(&**other)
    }
}

impl<T: Equaler> Equaler for Option<T> {
    fn equal(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(a), Some(b)) => a.equal(b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<T: Equaler> Equaler for [T] {
    fn equal(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(a, b)| a.equal(b))
    }
}

impl<T: Equaler> Equaler for Vec<T> {
    fn equal(&self, other: &Self) -> bool {
        self.as_slice().equal(other.as_slice())
    }
}

macro_rules! tuple_equaler {
    ($(($($name:ident $idx:tt),+))+) => {
        $(
            impl<$($name: Equaler),+> Equaler for ($($name,)+) {
                fn equal(&self, other: &Self) -> bool {
                    $(self.$idx.equal(&other.$idx))&&+
                }
            }
        )+
    };
}

tuple_equaler! {
    (A 0)
    (A 0, B 1)
    (A 0, B 1, C 2)
    (A 0, B 1, C 2, D 3)
}
