//! Serde support: an enum travels as the sequence of its values.
//!
//! Deserializing applies the same dedup rule as `Enum::new`.

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use super::enumeration::Enum;
use crate::member::EnumMember;

impl<M> Serialize for Enum<M>
where
    M: EnumMember,
    M::Value: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter().map(EnumMember::value))
    }
}

impl<'de, M> Deserialize<'de> for Enum<M>
where
    M: EnumMember,
    M::Value: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let values = Vec::<M::Value>::deserialize(deserializer)?;
        Ok(Self::from_values(values))
    }
}
