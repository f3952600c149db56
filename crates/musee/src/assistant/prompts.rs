//! Prompt templates for the hosted assistant providers.

use crate::artwork::Language;

use super::provider::Question;

/// System prompt: the museum guide persona and the answer language.
pub fn system_prompt(language: Language) -> String {
    format!(
        "You are the visitor guide of an African art and civilisations museum. \
         Answer questions about the collections, the artworks and the visit \
         in a warm, precise tone, in at most five sentences. \
         Always answer in {} ({}). \
         If you do not know something about the museum itself, say so instead \
         of inventing opening hours, prices or events.",
        language.name(),
        language.code()
    )
}

/// User prompt: the question, preceded by the artwork context when present.
pub fn question_prompt(question: &Question) -> String {
    let Some(artwork) = &question.artwork else {
        return question.text.clone();
    };

    let t = artwork.translation(question.language);
    format!(
        r#"## Artwork the visitor is looking at
- Title: {}
- Category: {}
- Period: {}
- Origin: {}
- Description: {}
- Cultural context: {}

## Visitor question
{}"#,
        t.title,
        artwork.category,
        t.period,
        t.origin,
        t.description,
        t.cultural_context,
        question.text
    )
}
