use thiserror::Error;
use tracing::debug;

use crate::member::EnumMember;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MembershipError {
    #[error("the given Member does not belong to this Enum")]
    NotAMember,
}

/// An ordered, deduplicated, immutable collection of members.
///
/// Declaration order is the canonical order: it is what iteration,
/// [`Enum::index`] and formatting report. No two members are equal under
/// the value type's [`Equaler`](crate::Equaler). There are no mutating methods; the set
/// operations build new enums.
#[derive(Clone)]
pub struct Enum<M> {
    pub(super) members: Vec<M>,
}

impl<M: EnumMember> Enum<M> {
    /// Build an enum from members in declaration order.
    ///
    /// A member equal to one already accepted is dropped, so the first
    /// occurrence keeps its position. Comparison is pairwise, which is fine
    /// for the handful of members a declared enumeration has.
    pub fn new<I>(members: I) -> Self
    where
        I: IntoIterator<Item = M>,
    {
        let mut accepted: Vec<M> = Vec::new();
        for (position, candidate) in members.into_iter().enumerate() {
            if accepted.iter().any(|member| member.same(&candidate)) {
                debug!(position, "dropping duplicate enum member");
                continue;
            }
            accepted.push(candidate);
        }

        Self { members: accepted }
    }

    /// An enum without members.
    pub fn empty() -> Self {
        Self {
            members: Vec::new(),
        }
    }

    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = M::Value>,
    {
        Self::new(values.into_iter().map(M::from_value))
    }

    /// Wraps members already known to be distinct.
    pub(super) fn from_distinct(members: Vec<M>) -> Self {
        debug_assert!(
            members
                .iter()
                .enumerate()
                .all(|(i, a)| members[..i].iter().all(|b| !a.same(b))),
            "enum members must be distinct"
        );
        Self { members }
    }

    /// Find the member holding `raw`.
    pub fn parse(&self, raw: impl Into<M::Value>) -> Option<&M> {
        let raw = raw.into();
        super::parse::parse(self, &raw)
    }

    pub fn contains(&self, member: &M) -> bool {
        self.members.iter().any(|m| m.same(member))
    }

    /// Position of `member` in declaration order.
    ///
    /// # Panics
    ///
    /// Panics with "the given Member does not belong to this Enum" when
    /// `member` is not part of this enum. Asking for the index of a foreign
    /// member is a logic error; use [`Enum::contains`] or
    /// [`Enum::try_index`] when absence is expected.
    pub fn index(&self, member: &M) -> usize {
        match self.try_index(member) {
            Ok(index) => index,
            Err(err) => panic!("{err}"),
        }
    }

    pub fn try_index(&self, member: &M) -> Result<usize, MembershipError> {
        self.members
            .iter()
            .position(|m| m.same(member))
            .ok_or(MembershipError::NotAMember)
    }

    /// The value held by `member`. Membership is not checked.
    pub fn value(&self, member: &M) -> M::Value
    where
        M::Value: Clone,
    {
        member.value().clone()
    }

    /// A copy of the members; changing it leaves the enum untouched.
    pub fn members(&self) -> Vec<M> {
        self.members.clone()
    }

    pub fn values(&self) -> Vec<M::Value>
    where
        M::Value: Clone,
    {
        self.members.iter().map(|m| m.value().clone()).collect()
    }

    pub fn as_slice(&self) -> &[M] {
        &self.members
    }

    pub fn iter(&self) -> std::slice::Iter<'_, M> {
        self.members.iter()
    }

    pub fn get(&self, index: usize) -> Option<&M> {
        self.members.get(index)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl<M> Default for Enum<M> {
    fn default() -> Self {
        Self {
            members: Vec::new(),
        }
    }
}

impl<M: EnumMember> PartialEq for Enum<M> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a.same(b))
    }
}

impl<M: EnumMember> FromIterator<M> for Enum<M> {
    fn from_iter<I: IntoIterator<Item = M>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<'a, M> IntoIterator for &'a Enum<M> {
    type Item = &'a M;
    type IntoIter = std::slice::Iter<'a, M>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

impl<M> IntoIterator for Enum<M> {
    type Item = M;
    type IntoIter = std::vec::IntoIter<M>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.into_iter()
    }
}
