//! Export OpenAPI specifications to JSON
//!
//! Usage:
//!   cargo run --bin export_openapi -- hospital > hospital.json
//!
//! Or with file output:
//!   cargo run --bin export_openapi -- library --output docs/library.json

use anyhow::bail;
use hospital_library::hospital::openapi::HospitalApiDoc;
use hospital_library::library::openapi::LibraryApiDoc;
use utoipa::OpenApi;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();

    let spec = match args.get(1).map(String::as_str) {
        Some("hospital") => HospitalApiDoc::openapi(),
        Some("library") => LibraryApiDoc::openapi(),
        _ => bail!("usage: export_openapi <hospital|library> [--output FILE]"),
    };

    let output_path = if args.len() > 3 && args[2] == "--output" {
        Some(args[3].as_str())
    } else {
        None
    };

    let json = spec.to_pretty_json()?;

    match output_path {
        Some(path) => {
            std::fs::write(path, &json)?;
            eprintln!("OpenAPI spec exported to: {}", path);
        }
        None => {
            println!("{}", json);
        }
    }
    Ok(())
}
