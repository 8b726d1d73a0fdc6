/// winkit build script.
///
/// The OS helpers are Windows-only.  Other targets still build the pure
/// modules (errors, attribute masks, file info), so warn instead of failing.
fn main() {
    let target_os = std::env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();
    if target_os != "windows" {
        println!(
            "cargo:warning=winkit: target OS is {target_os:?}; \
             only the platform-independent items are available"
        );
    }

    // Only re-run the build script when it changes.
    println!("cargo:rerun-if-changed=build.rs");
}
