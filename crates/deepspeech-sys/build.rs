use std::env;
use std::path::PathBuf;

fn main() {
    // Determine workspace root by going up two levels from the crate manifest dir
    let manifest_dir = env::var("CARGO_MANIFEST_DIR")
        .expect("CARGO_MANIFEST_DIR not set; this build script must be run by Cargo");

    let mut workspace_root = PathBuf::from(manifest_dir);
    // Pop crate dir -> workspace/crates -> repo root: go up two levels
    workspace_root.pop();
    workspace_root.pop();

    let vendor_lib = workspace_root.join("vendor/deepspeech/lib");

    // Priority 1: explicit override
    if let Ok(dir) = env::var("DEEPSPEECH_LIB_DIR") {
        println!("cargo:rustc-link-search=native={}", dir);
        println!("cargo:rustc-link-arg=-Wl,-rpath,{}", dir);
    } else if vendor_lib.join("libdeepspeech.so").exists() {
        // Priority 2: vendored library
        println!(
            "cargo:warning=Using vendored libdeepspeech from {}",
            vendor_lib.display()
        );
        println!("cargo:rustc-link-search=native={}", vendor_lib.display());
        // Add rpath so runtime can find the vendored library relative to the binary
        println!("cargo:rustc-link-arg=-Wl,-rpath,{}", vendor_lib.display());
    } else {
        // Fallback: check common system paths
        let system_locations = ["/usr/local/lib", "/usr/lib64", "/usr/lib"];
        for loc in &system_locations {
            let path = PathBuf::from(loc);
            if path.join("libdeepspeech.so").exists() {
                println!("cargo:warning=Using system libdeepspeech from {}", loc);
                println!("cargo:rustc-link-search=native={}", loc);
                break;
            }
        }
    }

    // Always link against deepspeech
    println!("cargo:rustc-link-lib=deepspeech");

    // Re-run build script when the override or vendored lib changes
    println!("cargo:rerun-if-env-changed=DEEPSPEECH_LIB_DIR");
    println!("cargo:rerun-if-changed={}", vendor_lib.display());
}
