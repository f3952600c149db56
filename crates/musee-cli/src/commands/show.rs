//! Show command - print one artwork by id.

use colored::Colorize;
use musee::{ArtworkRecord, Language};

use super::{parse_language, CatalogArgs};
use crate::view::ArtworkView;

pub fn run(
    source: &CatalogArgs,
    id: String,
    lang: String,
    json_output: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = source.load()?;
    let language = parse_language(&lang);

    let Some(artwork) = catalog.get_by_id(&id) else {
        return Err(format!("No artwork with id '{}'", id).into());
    };

    print_artwork(artwork, language, json_output)
}

/// Print an artwork as JSON or as a human-readable card.
pub fn print_artwork(
    artwork: &ArtworkRecord,
    language: Language,
    json_output: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let view = ArtworkView::new(artwork, language);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    let t = &view.translation;
    println!("{}", t.title.cyan().bold());
    if view.resolved_language != view.language {
        println!(
            "{} no {} translation, showing {}",
            "Note:".yellow(),
            view.language.name(),
            view.resolved_language.name()
        );
    }
    println!();
    println!("  Id:        {}", view.id.white());
    println!("  Scan code: {}", view.scan_code);
    println!("  Category:  {}", view.category);
    if !t.period.is_empty() {
        println!("  Period:    {}", t.period);
    }
    if !t.origin.is_empty() {
        println!("  Origin:    {}", t.origin);
    }
    if view.featured {
        println!("  {}", "Featured".magenta());
    }
    println!();

    if !t.description.is_empty() {
        println!("{}", t.description);
        println!();
    }
    if !t.cultural_context.is_empty() {
        println!("{}", "Cultural context:".yellow().bold());
        println!("  {}", t.cultural_context);
        println!();
    }

    println!("  Image: {}", view.image_url);
    for image in &view.image_gallery {
        println!("         {}", image);
    }
    if let Some(video) = &view.video_url {
        println!("  Video: {}", video);
    }
    if let Some(audio) = &t.audio_url {
        println!("  Audio guide: {}", audio.green());
    }

    let languages: Vec<&str> = view.available_languages.iter().map(|l| l.code()).collect();
    println!("  Languages: {}", languages.join(", "));

    Ok(())
}
