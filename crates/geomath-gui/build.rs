use std::env;
use std::fs;
use std::path::Path;

// Copies the workspace `assets/` directory next to the built binary so the
// overlay finds its tool bitmaps when launched from target/<profile>/.
fn main() {
    println!("cargo:rerun-if-changed=../../assets");

    let source = Path::new("../../assets");
    if !source.is_dir() {
        return;
    }

    let out_dir = env::var("OUT_DIR").unwrap();
    let Some(profile_dir) = Path::new(&out_dir).ancestors().nth(3) else {
        return;
    };

    let destination = profile_dir.join("assets");
    fs::create_dir_all(&destination).unwrap();

    for entry in fs::read_dir(source).unwrap().flatten() {
        let path = entry.path();
        let is_png = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("png"));
        if path.is_file() && is_png {
            if let Some(name) = path.file_name() {
                fs::copy(&path, destination.join(name)).unwrap();
            }
        }
    }
}
