//! Musee CLI - artwork catalog and visitor assistant.

mod cli;
mod commands;
mod server;
mod view;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let source = commands::CatalogArgs {
        path: cli.catalog,
        lenient: cli.lenient,
    };

    let result = match cli.command {
        Commands::List {
            category,
            search,
            lang,
            featured,
            json,
        } => commands::list::run(&source, category, search, lang, featured, json),

        Commands::Show { id, lang, json } => commands::show::run(&source, id, lang, json),

        Commands::Scan { code, lang, json } => commands::scan::run(&source, code, lang, json),

        Commands::Categories { json } => commands::categories::run(&source, json),

        Commands::Validate { json } => commands::validate::run(&source, json),

        Commands::Ask {
            question,
            artwork,
            lang,
            llm,
            model,
        } => commands::ask::run(&source, question, artwork, lang, llm, model),

        Commands::Serve {
            port,
            static_dir,
            llm,
            model,
        } => commands::serve::run(&source, port, static_dir, llm, model),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr so `--json` output on stdout stays machine-readable.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "musee=debug,musee_cli=debug,tower_http=debug"
    } else {
        "musee=warn,musee_cli=info,tower_http=info"
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
