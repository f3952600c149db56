//! Categories command - list distinct categories.

use colored::Colorize;
use musee::CategoryFilter;

use super::CatalogArgs;

pub fn run(source: &CatalogArgs, json_output: bool) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = source.load()?;
    let categories = catalog.categories();

    if json_output {
        println!("{}", serde_json::to_string_pretty(&categories)?);
        return Ok(());
    }

    println!("{}", "Categories:".yellow().bold());
    for category in &categories {
        let count = catalog
            .filter_by_category(&CategoryFilter::only(*category))
            .len();
        println!("  {} ({})", category.white(), count);
    }

    Ok(())
}
