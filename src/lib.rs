//! Ordered, deduplicated enumerations of typed values.
//!
//! `value-enum` is a runtime container that behaves like an enum over any
//! comparable value type. Members are declared once, collected into an
//! immutable [`Enum`], and then looked up ([`Enum::parse`], [`parse()`]),
//! tested ([`Enum::contains`], [`Enum::index`]), combined ([`Enum::diff`],
//! [`Enum::intersect`], [`Enum::join`]) or sampled ([`Enum::choice`]).
//!
//! Equality everywhere is the value type's [`Equaler`]. Choice is seeded
//! explicitly and never touches global randomness, so identical inputs
//! always pick the same member.
//!
//! ```
//! use value_enum::{declare_member, Enum};
//!
//! declare_member! {
//!     pub struct Color(&'static str);
//! }
//!
//! let colors = Enum::new([Color::new("red"), Color::new("green"), Color::new("blue")]);
//! assert_eq!(colors.to_string(), "red, green, blue");
//! assert_eq!(colors.parse("green"), Some(&Color::new("green")));
//! assert!(colors.parse("purple").is_none());
//! ```

pub mod enumeration;
pub mod member;

pub use enumeration::{parse, Builder, Enum, MembershipError};
pub use member::{EnumMember, Equaler, Member};
