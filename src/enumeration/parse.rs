use super::enumeration::Enum;
use crate::member::{EnumMember, Equaler};

/// Find the member of `enumeration` whose value equals `raw`.
///
/// Equality is the value type's [`Equaler`], so `raw` may be a partial
/// value when `equal` only looks at some of its fields (a lookup key, a
/// case-folded name). Returns the first match in declaration order.
pub fn parse<'a, M>(enumeration: &'a Enum<M>, raw: &M::Value) -> Option<&'a M>
where
    M: EnumMember,
{
    enumeration.iter().find(|member| member.value().equal(raw))
}
