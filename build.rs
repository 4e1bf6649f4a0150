use lightningcss::{
    bundler::{Bundler, FileProvider},
    stylesheet::{MinifyOptions, ParserOptions, PrinterOptions},
};
use std::fs;
use std::path::Path;

const ENTRY: &str = "assets/css/main.css";
const OUTPUT_DIR: &str = "assets/dist";
const OUTPUT: &str = "assets/dist/bundle.css";

fn main() {
    println!("cargo:rerun-if-changed=assets/css/");

    fs::create_dir_all(OUTPUT_DIR).expect("Failed to create assets/dist directory");

    // main.css @imports tokens and component sheets; the bundler inlines them
    let fs_provider = FileProvider::new();
    let mut bundler = Bundler::new(&fs_provider, None, ParserOptions::default());

    let mut stylesheet = bundler
        .bundle(Path::new(ENTRY))
        .expect("Failed to bundle card stylesheets");

    stylesheet
        .minify(MinifyOptions::default())
        .expect("Failed to minify card stylesheets");

    let css = stylesheet
        .to_css(PrinterOptions {
            minify: true,
            ..Default::default()
        })
        .expect("Failed to print bundled CSS");

    fs::write(OUTPUT, css.code).expect("Failed to write bundle.css");
}
