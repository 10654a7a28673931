use serde::Deserialize;
use std::env;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Deserialize)]
struct LocaleData {
    western_order_countries: Vec<String>,
    eastern_order_countries: Vec<String>,
}

type Result<T> = std::result::Result<T, Box<dyn Error>>;

fn main() -> Result<()> {
    let input = PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap());
    let output = PathBuf::from(env::var("OUT_DIR").unwrap());

    let json = read_file(&input, "build/locale_data.json")?;
    let locales: LocaleData = serde_json::from_str(&json)?;

    let mut builder = phf_codegen::Map::new();
    for code in &locales.western_order_countries {
        builder.entry(code.as_str(), "LexicalOrder::Western");
    }
    for code in &locales.eastern_order_countries {
        builder.entry(code.as_str(), "LexicalOrder::Eastern");
    }
    fs::write(
        output.join("country_lexical_orders.rs"),
        format!("{}", builder.build()),
    )?;

    Ok(())
}

fn read_file(input_dir: &Path, file_path: &str) -> Result<String> {
    println!("cargo:rerun-if-changed={}", file_path);
    let s = fs::read_to_string(input_dir.join(file_path))?;
    Ok(s)
}
