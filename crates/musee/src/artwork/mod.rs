//! Artwork record schema and per-language translations.

mod language;
mod record;

pub use language::Language;
pub use record::{resolve_translation, ArtworkRecord, Translation, Translations};
