use tracing::trace;

use super::enumeration::Enum;
use crate::member::EnumMember;

/// Collects members one at a time and finalizes them into an [`Enum`].
///
/// `add` hands the member back, so each declaration can be captured and
/// registered in the same statement:
///
/// ```
/// use value_enum::{Builder, Member};
///
/// let mut builder = Builder::new();
/// let nl = builder.add(Member::new("Netherlands"));
/// let fr = builder.add(Member::new("France"));
/// let countries = builder.build();
///
/// assert_eq!(countries.members(), vec![nl, fr]);
/// ```
#[derive(Debug, Clone)]
pub struct Builder<M> {
    members: Vec<M>,
}

impl<M: EnumMember> Builder<M> {
    pub fn new() -> Self {
        Self {
            members: Vec::new(),
        }
    }

    pub fn add(&mut self, member: M) -> M {
        self.members.push(member.clone());
        member
    }

    /// Number of members added so far, duplicates included.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Finalize with the same dedup and ordering rule as [`Enum::new`].
    pub fn build(self) -> Enum<M> {
        let added = self.members.len();
        let built = Enum::new(self.members);
        trace!(added, distinct = built.len(), "built enum");
        built
    }
}

impl<M: EnumMember> Default for Builder<M> {
    fn default() -> Self {
        Self::new()
    }
}
