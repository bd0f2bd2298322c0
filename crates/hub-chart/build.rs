// File: crates/hub-chart/build.rs
// Summary: Build script linking Windows system libraries required by Skia/ICU.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // Skia's font manager needs the registry APIs (RegOpenKeyExW etc.).
        println!("cargo:rustc-link-lib=advapi32");
    }
}
