use lightningcss::{
    bundler::{Bundler, FileProvider},
    stylesheet::{MinifyOptions, ParserOptions, PrinterOptions},
    targets::{Browsers, Targets},
};
use std::fs;
use std::path::Path;

const CSS_ROOT: &str = "assets/css";
const ENTRY: &str = "assets/css/main.css";
const OUT_DIR: &str = "assets/dist";
const OUT_FILE: &str = "assets/dist/bundle.css";

/// Oldest browsers the web app supports, encoded as `major << 16`
fn browser_targets() -> Targets {
    Targets::from(Browsers {
        chrome: Some(100 << 16),
        edge: Some(100 << 16),
        firefox: Some(100 << 16),
        safari: Some(15 << 16),
        ios_saf: Some(15 << 16),
        ..Browsers::default()
    })
}

/// Register every partial so editing one `@import`ed file rebuilds the bundle
fn watch_partials(dir: &Path) {
    println!("cargo:rerun-if-changed={}", dir.display());
    let Ok(read) = fs::read_dir(dir) else {
        return;
    };
    for entry in read.flatten() {
        let path = entry.path();
        if path.is_dir() {
            watch_partials(&path);
        } else if path.extension().is_some_and(|ext| ext == "css") {
            println!("cargo:rerun-if-changed={}", path.display());
        }
    }
}

fn main() {
    watch_partials(Path::new(CSS_ROOT));

    fs::create_dir_all(OUT_DIR).expect("Failed to create assets/dist directory");

    let fs_provider = FileProvider::new();
    let mut bundler = Bundler::new(&fs_provider, None, ParserOptions::default());
    let mut stylesheet = bundler
        .bundle(Path::new(ENTRY))
        .unwrap_or_else(|e| panic!("Failed to bundle {}: {}", ENTRY, e));

    let targets = browser_targets();
    stylesheet
        .minify(MinifyOptions {
            targets,
            ..MinifyOptions::default()
        })
        .unwrap_or_else(|e| panic!("Failed to minify UniMind stylesheet: {}", e));

    let css = stylesheet
        .to_css(PrinterOptions {
            minify: true,
            targets,
            ..PrinterOptions::default()
        })
        .unwrap_or_else(|e| panic!("Failed to print UniMind stylesheet: {}", e));

    fs::write(OUT_FILE, css.code).expect("Failed to write bundle.css");

    println!("UniMind CSS bundled into {}", OUT_FILE);
}
