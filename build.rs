//! Stamps the binary with the commit it was built from and the build date.
//!
//! Both can be pinned from the environment for reproducible release builds.

use std::env;
use std::process::Command;

const COMMIT_OVERRIDE: &str = "LAKESIDE_BUILD_COMMIT";
const DATE_OVERRIDE: &str = "LAKESIDE_BUILD_DATE";

fn git_short_hash() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short=7", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let hash = String::from_utf8(output.stdout).ok()?;
    let hash = hash.trim();
    (!hash.is_empty()).then(|| hash.to_owned())
}

fn main() {
    let commit = env::var(COMMIT_OVERRIDE)
        .ok()
        .or_else(git_short_hash)
        .unwrap_or_else(|| "unknown".into());
    let date = env::var(DATE_OVERRIDE)
        .unwrap_or_else(|_| chrono::Utc::now().date_naive().to_string());

    println!("cargo:rustc-env=LAKESIDE_COMMIT={}", commit);
    println!("cargo:rustc-env=LAKESIDE_BUILT_ON={}", date);

    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-env-changed={}", COMMIT_OVERRIDE);
    println!("cargo:rerun-if-env-changed={}", DATE_OVERRIDE);
}
