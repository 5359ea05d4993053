use std::env;
use std::fs;
use std::path::PathBuf;

fn main() {
    // Linker setup applies to the hardware binary only; host builds (library
    // tests on the development machine) need none of it.
    if cfg!(feature = "nrf52840") {
        let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

        // Copy the nRF52840 memory layout to the output directory
        fs::copy("memory.x", out_dir.join("memory.x")).unwrap();

        // Tell cargo to look in the output directory for linker scripts
        println!("cargo:rustc-link-search={}", out_dir.display());

        // Linker scripts for cortex-m-rt and defmt, plus --nmagic
        println!("cargo:rustc-link-arg-bins=--nmagic");
        println!("cargo:rustc-link-arg-bins=-Tlink.x");
        println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

        println!("cargo:rerun-if-changed=memory.x");
    }

    println!("cargo:rerun-if-changed=build.rs");
}
