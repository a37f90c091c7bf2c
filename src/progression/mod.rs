//! Daily progression: casts today, Catch of the Day status, bonus casts.

pub mod store;
pub mod types;

pub use store::*;
pub use types::*;
