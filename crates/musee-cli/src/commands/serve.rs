//! Serve command - run the JSON API server.

use std::path::PathBuf;

use colored::Colorize;
use musee::Museum;

use super::{build_provider, CatalogArgs};
use crate::cli::LlmProviderChoice;
use crate::server::{app, state::AppState};

pub fn run(
    source: &CatalogArgs,
    port: u16,
    static_dir: Option<PathBuf>,
    llm: LlmProviderChoice,
    model: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = source.load()?;

    if let Some(dir) = &static_dir {
        if !dir.join("index.html").exists() {
            return Err(format!("No index.html in static directory {}", dir.display()).into());
        }
    }

    // Providers hold blocking HTTP clients; build them before the runtime starts.
    let mut museum = Museum::new(catalog);
    if let Some(provider) = build_provider(llm, model)? {
        museum = museum.with_shared_assistant(provider);
    }

    let url = format!("http://localhost:{}", port);
    println!();
    println!(
        "{} {}",
        "Starting musee server at".cyan().bold(),
        url.white().bold()
    );
    println!();
    println!("  Catalog:   {} ({} artworks)", museum.catalog().source().origin, museum.catalog().len());
    println!(
        "  Assistant: {}",
        museum.assistant_name().unwrap_or("keywords only")
    );
    if let Some(dir) = &static_dir {
        println!("  Static:    {}", dir.display());
    }
    println!();
    println!("Press {} to stop the server", "Ctrl+C".yellow().bold());
    println!();

    let state = AppState::new(museum);

    // `state` outlives the runtime so the provider clients are dropped
    // outside async context.
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(app::run_server(state.clone(), port, static_dir))?;
    drop(runtime);
    drop(state);

    Ok(())
}
