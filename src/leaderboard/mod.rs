//! Outbound "record catch" notifications for the leaderboard service.
//!
//! Delivery is fire-and-forget: failures are logged and dropped, and the
//! local catch is never rolled back.

pub mod reporter;

pub use reporter::*;
