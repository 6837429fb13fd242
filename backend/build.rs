//! Copies the trunk build of the frontend (`../frontend/dist`) into
//! `static/dist`, which `main.rs` embeds with `include_dir!`. Without a
//! frontend build the checked-in placeholder page is embedded instead.

use fs_extra::dir::CopyOptions;
use std::fs;
use std::path::Path;

fn main() {
    let dist_dir = Path::new("../frontend/dist");
    let embed_dir = Path::new("static/dist");

    if dist_dir.exists() {
        let _ = fs::remove_dir_all(embed_dir);
        fs::create_dir_all(embed_dir).expect("failed to create static/dist");
        let options = CopyOptions::new().overwrite(true).content_only(true);
        fs_extra::dir::copy(dist_dir, embed_dir, &options)
            .expect("failed to copy the frontend bundle");
    }
    println!("cargo:rerun-if-changed=../frontend/dist");
}
