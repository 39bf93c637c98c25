pub mod algebra;
pub mod builder;
pub mod choice;
pub mod enumeration;
pub mod format;
pub mod parse;
pub mod serialize;

pub use builder::Builder;
pub use enumeration::{Enum, MembershipError};
pub use parse::parse;
