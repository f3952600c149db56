//! List command - filter and search the catalog.

use colored::Colorize;
use musee::{CatalogQuery, CategoryFilter};

use super::{parse_language, CatalogArgs};
use crate::view::ArtworkView;

pub fn run(
    source: &CatalogArgs,
    category: String,
    search: Option<String>,
    lang: String,
    featured: bool,
    json_output: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = source.load()?;
    let language = parse_language(&lang);

    let query = CatalogQuery::new()
        .category(CategoryFilter::parse(&category))
        .text(search.unwrap_or_default())
        .language(language)
        .featured_only(featured);
    let results = query.run(&catalog);

    if json_output {
        let views = ArtworkView::many(&results, language);
        println!("{}", serde_json::to_string_pretty(&views)?);
        return Ok(());
    }

    if results.is_empty() {
        println!("{}", "No artworks match.".yellow());
        return Ok(());
    }

    println!(
        "{} {} of {}",
        "Artworks:".cyan().bold(),
        results.len().to_string().white().bold(),
        catalog.len()
    );
    println!();

    for artwork in results {
        let t = artwork.translation(language);
        let star = if artwork.featured { "*".magenta().to_string() } else { " ".to_string() };
        println!(
            "{} {:<24} {:<14} {}",
            star,
            artwork.id.white(),
            artwork.category.dimmed(),
            t.title
        );
        if !t.origin.is_empty() || !t.period.is_empty() {
            println!("  {:<24} {:<14} {} {}", "", "", t.origin.dimmed(), t.period.dimmed());
        }
    }

    Ok(())
}
