//! Ask command - put a question to the visitor assistant.

use colored::Colorize;
use musee::Museum;

use super::{build_provider, parse_language, CatalogArgs};
use crate::cli::LlmProviderChoice;

pub fn run(
    source: &CatalogArgs,
    question: String,
    artwork: Option<String>,
    lang: String,
    llm: LlmProviderChoice,
    model: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = source.load()?;
    let language = parse_language(&lang);

    if let Some(id) = &artwork {
        if catalog.get_by_id(id).is_none() {
            eprintln!("{} no artwork with id '{}', asking without it", "Warning:".yellow(), id);
        }
    }

    let mut museum = Museum::new(catalog);
    if let Some(provider) = build_provider(llm, model)? {
        museum = museum.with_shared_assistant(provider);
    }

    let answer = museum.ask(&question, Some(language), artwork.as_deref())?;

    println!("{}", answer.text);
    println!();
    println!("{}", format!("[{}]", answer.provider).dimmed());

    Ok(())
}
