// Stages the static page into `dist/`. The wasm bundle itself comes from
// `wasm-pack build --target web --out-dir static/pkg`, which cannot run from
// here without contending for cargo's build lock.
use std::{fs, path::Path};

use fs_extra::dir::{copy, CopyOptions};

fn main() {
    println!("cargo:rerun-if-changed=static");

    let out_dir = Path::new("dist");
    if out_dir.exists() {
        fs::remove_dir_all(out_dir).ok();
    }
    fs::create_dir_all(out_dir).ok();

    let static_dir = Path::new("static");
    if static_dir.exists() {
        let options = CopyOptions {
            content_only: true,
            overwrite: true,
            ..CopyOptions::new()
        };
        if let Err(err) = copy(static_dir, out_dir, &options) {
            println!("cargo:warning=failed to stage static/: {err}");
        }
    }
}
