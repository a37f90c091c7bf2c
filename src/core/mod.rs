//! Configuration, constants, and logger setup.

pub mod config;
pub mod constants;
pub mod logging;

pub use config::GameConfig;
