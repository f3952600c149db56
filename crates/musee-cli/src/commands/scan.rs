//! Scan command - resolve a scanned QR/barcode payload.

use tracing::info;

use super::show::print_artwork;
use super::{parse_language, CatalogArgs};

pub fn run(
    source: &CatalogArgs,
    code: String,
    lang: String,
    json_output: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = source.load()?;
    let language = parse_language(&lang);

    let Some(artwork) = catalog.get_by_scan_code(&code) else {
        return Err(format!("No artwork tagged with scan code '{}'", code.trim()).into());
    };

    info!(code = %code.trim(), id = %artwork.id, "scan resolved");
    print_artwork(artwork, language, json_output)
}
