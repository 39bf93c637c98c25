//! Set operations over enums.
//!
//! Membership is decided by the value type's `Equaler`. Survivors keep the
//! left operand's order; `join` appends the right operand's new members in
//! the right operand's order.

use super::enumeration::Enum;
use crate::member::EnumMember;

impl<M: EnumMember> Enum<M> {
    /// Members of `self` that are absent from `other`.
    ///
    /// Not symmetric: `a.diff(&b)` and `b.diff(&a)` generally differ.
    pub fn diff(&self, other: &Self) -> Self {
        Self::from_distinct(
            self.iter()
                .filter(|m| !other.contains(m))
                .cloned()
                .collect(),
        )
    }

    /// Members of `self` that are also in `other`, in `self`'s order.
    pub fn intersect(&self, other: &Self) -> Self {
        Self::from_distinct(
            self.iter()
                .filter(|m| other.contains(m))
                .cloned()
                .collect(),
        )
    }

    /// Union: all of `self`, then the members of `other` not yet present.
    pub fn join(&self, other: &Self) -> Self {
        let mut members = self.members.clone();
        members.extend(other.iter().filter(|m| !self.contains(m)).cloned());
        Self::from_distinct(members)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Enum, Member};

    fn ints(values: &[i32]) -> Enum<Member<i32>> {
        Enum::from_values(values.iter().copied())
    }

    #[test]
    fn empty_operands() {
        let empty = ints(&[]);
        let e = ints(&[1, 2]);
        assert_eq!(e.diff(&empty), e);
        assert!(empty.diff(&e).is_empty());
        assert!(e.intersect(&empty).is_empty());
        assert_eq!(empty.join(&e), e);
        assert_eq!(e.join(&empty), e);
    }
}
