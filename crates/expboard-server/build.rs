//! Makes sure the front-end bundle exists before `rust-embed` looks for it.
//!
//! `trunk build` in `frontend/` produces `frontend/dist`. Test and lint runs
//! skip that step, so a stub page stands in for the bundle.

use std::path::Path;

const DIST: &str = "../../frontend/dist";

const STUB_PAGE: &str = "<!DOCTYPE html>\n<html><body>\
<p>The expboard front-end has not been built. Run <code>trunk build</code> in frontend/.</p>\
</body></html>\n";

fn main() {
    println!("cargo:rerun-if-changed={}", DIST);

    let dist = Path::new(env!("CARGO_MANIFEST_DIR")).join(DIST);
    let index = dist.join("index.html");
    if index.exists() {
        return;
    }
    if let Err(e) = std::fs::create_dir_all(&dist).and_then(|_| std::fs::write(&index, STUB_PAGE)) {
        panic!("cannot write stub front-end to {}: {}", dist.display(), e);
    }
}
