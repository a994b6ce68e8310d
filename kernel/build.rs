use std::env;

fn main() {
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| String::from("."));

    // Kernel layout
    println!("cargo:rustc-link-arg=-T{}/kernel.ld", manifest_dir);

    // Generated logic, emitted by the FUSE compiler as a static archive
    println!("cargo:rustc-link-search=native={}/gen", manifest_dir);
    println!("cargo:rustc-link-lib=static=gen_logic");

    println!("cargo:rerun-if-changed=kernel.ld");
    println!("cargo:rerun-if-changed=gen/libgen_logic.a");
}
