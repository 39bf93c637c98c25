use std::fmt;

use super::enumeration::Enum;
use crate::member::EnumMember;

impl<M: EnumMember> Enum<M> {
    /// Readable name of the value type, e.g. `String`, `i32`, `Vec<u8>`.
    pub fn type_name(&self) -> String {
        short_type_name(std::any::type_name::<M::Value>())
    }
}

/// Strip module paths from every path inside a `std::any::type_name` string.
fn short_type_name(full: &str) -> String {
    let mut out = String::with_capacity(full.len());
    let mut path_start = 0;

    for (i, c) in full.char_indices() {
        if !(c.is_alphanumeric() || c == '_' || c == ':') {
            out.push_str(last_segment(&full[path_start..i]));
            out.push(c);
            path_start = i + c.len_utf8();
        }
    }
    out.push_str(last_segment(&full[path_start..]));

    out
}

fn last_segment(path: &str) -> &str {
    path.rsplit("::").next().unwrap_or(path)
}

/// Values joined with `", "` in declaration order.
impl<M> fmt::Display for Enum<M>
where
    M: EnumMember,
    M::Value: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, member) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(member.value(), f)?;
        }
        Ok(())
    }
}

/// Renders the constructor call that rebuilds this enum.
///
/// Members print with their own `Debug`, so a declared member shows its
/// bare type name (`Color { val: "red" }`) without the module path.
impl<M: fmt::Debug> fmt::Debug for Enum<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Enum::new([")?;
        for (i, member) in self.members.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            fmt::Debug::fmt(member, f)?;
        }
        f.write_str("])")
    }
}
