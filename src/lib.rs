//! Lakeside - a lakeside fishing game for the terminal.
//!
//! The library holds the reward logic: cast validation, the catch resolver,
//! daily progression, the collection journal and leaderboard reporting. The
//! terminal front end lives in the binary.

pub mod core;
pub mod fishing;
pub mod input;
pub mod journal;
pub mod leaderboard;
pub mod progression;
pub mod scene;
pub mod utils;
