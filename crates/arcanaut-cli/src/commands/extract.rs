use arcanaut_core::error::ArcanautError;
use arcanaut_core::extraction::pdftotext::PdftotextExtractor;
use arcanaut_core::{HeadingBoundary, ParseOptions, EXPECTED_POWERS};
use std::path::PathBuf;

pub fn run(
    pdf_file: PathBuf,
    out: PathBuf,
    heading_boundary: &str,
) -> Result<(), ArcanautError> {
    let options = ParseOptions {
        heading_boundary: match heading_boundary {
            "reuse" => HeadingBoundary::Reuse,
            _ => HeadingBoundary::Discard,
        },
    };

    // Pre-flight: a stale artifact from an earlier run must never survive,
    // even if this run fails before writing.
    if out.exists() {
        std::fs::remove_file(&out)?;
    }

    let pdf_bytes = std::fs::read(&pdf_file)?;
    let extractor = PdftotextExtractor::new();
    let extraction = arcanaut_core::extract_kits(&pdf_bytes, &extractor, &options)?;

    for w in &extraction.warnings {
        eprintln!(
            "warning: kit \"{}\" has {} powers (expected {})",
            w.kit_name, w.power_count, EXPECTED_POWERS
        );
    }

    let json = serde_json::to_string_pretty(&extraction.kits)?;
    std::fs::write(&out, json)?;

    println!(
        "Extracted {} kit(s), written to {}",
        extraction.kits.len(),
        out.display()
    );
    for kit in extraction.kits.iter().take(3) {
        println!("  {}  {}", kit.id, kit.name);
    }

    Ok(())
}
