pub mod assembler;
pub mod classify;
pub mod power;

pub use assembler::{HeadingBoundary, KitAssembler, ParseOptions};

use crate::error::ArcanautError;
use crate::extraction::PageContent;
use crate::model::Kit;

/// Parse extracted page content into the ordered kit sequence.
///
/// Pages must arrive in document order: header detection and kit-name
/// recovery both depend on it. An empty result is the pipeline's only
/// fatal condition.
pub fn parse_kits(pages: &[PageContent], options: &ParseOptions) -> Result<Vec<Kit>, ArcanautError> {
    let mut assembler = KitAssembler::new(options.clone());
    for page in pages {
        assembler.feed_page(page);
    }
    let kits = assembler.finish();

    if kits.is_empty() {
        return Err(ArcanautError::NoKitsFound);
    }

    Ok(kits)
}
