//! Type-safe wrappers and enums for fantacalcio data.

pub mod ids;
pub mod role;
pub mod time;

pub use ids::PlayerCode;
pub use role::Role;
pub use time::Matchday;
