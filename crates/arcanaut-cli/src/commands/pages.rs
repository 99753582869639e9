use arcanaut_core::error::ArcanautError;
use arcanaut_core::extraction::pdftotext::PdftotextExtractor;
use arcanaut_core::extraction::PdfExtractor;
use std::path::PathBuf;

pub fn run(pdf_file: PathBuf, page: Option<usize>) -> Result<(), ArcanautError> {
    let pdf_bytes = std::fs::read(&pdf_file)?;
    let extractor = PdftotextExtractor::new();
    let pages = extractor.extract_pages(&pdf_bytes)?;

    for p in &pages {
        if let Some(n) = page {
            if p.page_number != n {
                continue;
            }
        }
        println!("--- page {} ---", p.page_number);
        for line in &p.lines {
            println!("{line}");
        }
    }

    Ok(())
}
