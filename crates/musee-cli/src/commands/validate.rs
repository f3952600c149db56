//! Validate command - load the catalog and summarize it.

use colored::Colorize;

use super::CatalogArgs;

pub fn run(source: &CatalogArgs, json_output: bool) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = source.load()?;
    let stats = catalog.stats();

    if json_output {
        let summary = serde_json::json!({
            "valid": true,
            "source": catalog.source(),
            "stats": stats,
        });
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!(
        "{} {}",
        "Catalog OK:".green().bold(),
        catalog.source().origin.white()
    );
    println!();
    println!("  Hash:     {}", catalog.source().hash);
    println!("  Size:     {} bytes", catalog.source().size_bytes);
    println!("  Artworks: {}", stats.total.to_string().white().bold());
    println!("  Featured: {}", stats.featured);
    println!();

    println!("{}", "Categories:".yellow().bold());
    for (category, count) in &stats.by_category {
        println!("  {:<16} {}", category, count);
    }
    println!();

    println!("{}", "Translations:".yellow().bold());
    for (language, count) in &stats.by_language {
        let missing = stats.total - count;
        let line = format!("  {:<8} {}/{}", language.name(), count, stats.total);
        if missing == 0 {
            println!("{}", line);
        } else {
            println!("{} {}", line, format!("({} fall back to French)", missing).dimmed());
        }
    }

    Ok(())
}
