pub mod error;
pub mod extraction;
pub mod model;
pub mod parsing;

pub use parsing::{HeadingBoundary, ParseOptions};

use error::ArcanautError;
use extraction::PdfExtractor;
use model::Kit;

/// Nominal number of powers per kit in the book's layout.
pub const EXPECTED_POWERS: usize = 3;

/// A kit whose power count deviates from the expected three. Advisory
/// only; the kit is still emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KitWarning {
    pub kit_name: String,
    pub power_count: usize,
}

/// Result of a full extraction run: the sealed kits plus any post-hoc
/// validation warnings.
#[derive(Debug, Clone)]
pub struct Extraction {
    pub kits: Vec<Kit>,
    pub warnings: Vec<KitWarning>,
}

/// Main API entry point: extract all kits from a PDF.
///
/// Runs the extractor, assembles kits page by page, and validates power
/// counts. Fails only when the document yields no kits at all.
pub fn extract_kits(
    pdf_bytes: &[u8],
    extractor: &dyn PdfExtractor,
    options: &ParseOptions,
) -> Result<Extraction, ArcanautError> {
    let pages = extractor.extract_pages(pdf_bytes)?;
    let kits = parsing::parse_kits(&pages, options)?;
    let warnings = power_count_warnings(&kits);
    Ok(Extraction { kits, warnings })
}

/// Post-hoc validation: flag every kit that does not carry exactly three
/// powers. Deviations are reported, never dropped.
pub fn power_count_warnings(kits: &[Kit]) -> Vec<KitWarning> {
    kits.iter()
        .filter(|k| k.powers.len() != EXPECTED_POWERS)
        .map(|k| KitWarning {
            kit_name: k.name.clone(),
            power_count: k.powers.len(),
        })
        .collect()
}
