//! Compile-time build information.

/// Short git hash, or "unknown" outside a checkout
pub const BUILD_COMMIT: &str = env!("LAKESIDE_COMMIT");
/// UTC date of the build, `YYYY-MM-DD`
pub const BUILD_DATE: &str = env!("LAKESIDE_BUILT_ON");

/// One-line version string for `--version`.
pub fn version_line() -> String {
    format!(
        "lakeside {} ({}, built {})",
        env!("CARGO_PKG_VERSION"),
        BUILD_COMMIT,
        BUILD_DATE
    )
}
