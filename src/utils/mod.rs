//! Utility modules: persistence and build info.

pub mod build_info;
pub mod persistence;
