//! CLI argument definitions using clap.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Musee: artwork catalog and visitor assistant
#[derive(Parser)]
#[command(name = "musee")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Catalog JSON file (default: the bundled catalog)
    #[arg(long, global = true, env = "MUSEE_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Keep duplicate ids and scan codes instead of rejecting the catalog
    #[arg(long, global = true)]
    pub lenient: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List artworks, optionally filtered by category and text
    List {
        /// Category to keep ("all" for every category)
        #[arg(short, long, default_value = "all")]
        category: String,

        /// Case-insensitive text matched against title, description and origin
        #[arg(short, long)]
        search: Option<String>,

        /// Display language (fr, en, wo)
        #[arg(short, long, default_value = "fr")]
        lang: String,

        /// Only featured artworks
        #[arg(long)]
        featured: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one artwork by id
    Show {
        /// Artwork id
        #[arg(value_name = "ID")]
        id: String,

        /// Display language (fr, en, wo)
        #[arg(short, long, default_value = "fr")]
        lang: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Resolve a scanned QR/barcode payload to an artwork
    Scan {
        /// Decoded scan payload
        #[arg(value_name = "CODE")]
        code: String,

        /// Display language (fr, en, wo)
        #[arg(short, long, default_value = "fr")]
        lang: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List distinct categories
    Categories {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Load and validate the catalog, then print a summary
    Validate {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Ask the visitor assistant a question
    Ask {
        /// The question
        #[arg(value_name = "QUESTION")]
        question: String,

        /// Artwork id the question is about
        #[arg(short, long)]
        artwork: Option<String>,

        /// Answer language (fr, en, wo)
        #[arg(short, long, default_value = "fr")]
        lang: String,

        /// Hosted assistant provider
        #[arg(long, default_value = "none")]
        llm: LlmProviderChoice,

        /// Model to use (provider-specific)
        #[arg(long)]
        model: Option<String>,
    },

    /// Serve the catalog and assistant as a JSON API
    Serve {
        /// Port for web server
        #[arg(short, long, default_value = "3141", env = "MUSEE_PORT")]
        port: u16,

        /// Directory of front-end files served for non-API paths
        #[arg(long)]
        static_dir: Option<PathBuf>,

        /// Hosted assistant provider
        #[arg(long, default_value = "none")]
        llm: LlmProviderChoice,

        /// Model to use (provider-specific)
        #[arg(long)]
        model: Option<String>,
    },
}

/// Hosted assistant providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LlmProviderChoice {
    /// Keyword responder only
    None,
    /// Anthropic Claude (ANTHROPIC_API_KEY)
    Anthropic,
    /// OpenAI (OPENAI_API_KEY)
    Openai,
    /// Groq (GROQ_API_KEY)
    Groq,
    /// Google Gemini (GEMINI_API_KEY)
    Gemini,
}
