pub mod equaler;
pub mod member;

pub use equaler::Equaler;
pub use member::{EnumMember, Member};
