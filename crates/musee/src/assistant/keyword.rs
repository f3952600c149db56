//! Offline keyword responder.
//!
//! A rule table of case-insensitive patterns mapped to canned answers in
//! each language. Rules are tried in order and the first match wins. Rules
//! marked `about_artwork` only apply when the question carries an artwork,
//! and their answers may use the `{title}`, `{origin}`, `{period}`,
//! `{description}` and `{context}` placeholders.

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

use crate::artwork::{Language, Translation};
use crate::error::Result;

use super::provider::{Answer, AssistantConfig, AssistantProvider, Question};

/// Name reported in answers produced by this responder.
pub const KEYWORD_PROVIDER: &str = "keywords";

/// Canned answers, one per language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Responses {
    pub fr: String,
    pub en: String,
    pub wo: String,
}

impl Responses {
    pub fn new(fr: impl Into<String>, en: impl Into<String>, wo: impl Into<String>) -> Self {
        Self {
            fr: fr.into(),
            en: en.into(),
            wo: wo.into(),
        }
    }

    pub fn get(&self, lang: Language) -> &str {
        match lang {
            Language::Fr => &self.fr,
            Language::En => &self.en,
            Language::Wo => &self.wo,
        }
    }
}

/// One pattern → response rule.
#[derive(Debug, Clone)]
pub struct KeywordRule {
    pub name: String,
    pattern: Regex,
    pub about_artwork: bool,
    pub responses: Responses,
}

impl KeywordRule {
    /// Compile a rule. `pattern` is matched case-insensitively.
    pub fn new(name: impl Into<String>, pattern: &str, responses: Responses) -> Result<Self> {
        let pattern = RegexBuilder::new(pattern).case_insensitive(true).build()?;
        Ok(Self {
            name: name.into(),
            pattern,
            about_artwork: false,
            responses,
        })
    }

    /// Restrict the rule to questions that carry an artwork.
    pub fn about_artwork(mut self) -> Self {
        self.about_artwork = true;
        self
    }

    pub fn matches(&self, question: &Question) -> bool {
        if self.about_artwork && question.artwork.is_none() {
            return false;
        }
        self.pattern.is_match(&question.text)
    }
}

struct RuleSpec {
    name: &'static str,
    pattern: &'static str,
    about_artwork: bool,
    fr: &'static str,
    en: &'static str,
    wo: &'static str,
}

const BUILTIN_RULES: &[RuleSpec] = &[
    RuleSpec {
        name: "artwork-origin",
        pattern: r"\b(origine?|where|d'où|où|jóge)\b",
        about_artwork: true,
        fr: "« {title} » provient de : {origin}.",
        en: "\"{title}\" comes from: {origin}.",
        wo: "« {title} » mi ngi jóge : {origin}.",
    },
    RuleSpec {
        name: "artwork-period",
        pattern: r"\b(époque|epoque|période|periode|date|quand|when|period|century|siècle|kañ|jamono)\b",
        about_artwork: true,
        fr: "« {title} » date de la période suivante : {period}.",
        en: "\"{title}\" dates from: {period}.",
        wo: "« {title} » jamonoom mooy : {period}.",
    },
    RuleSpec {
        name: "artwork-meaning",
        pattern: r"\b(signifi\w*|sens|symbol\w*|meaning|mean|rituel|ritual|usage|used|tekki|solo)\b",
        about_artwork: true,
        fr: "{context}",
        en: "{context}",
        wo: "{context}",
    },
    RuleSpec {
        name: "artwork-describe",
        pattern: r"\b(décri\w*|decri\w*|describe|what is|qu'est-ce|c'est quoi|lan la)\b",
        about_artwork: true,
        fr: "{title} : {description}",
        en: "{title}: {description}",
        wo: "{title} : {description}",
    },
    RuleSpec {
        name: "greeting",
        pattern: r"^\s*(bonjour|salut|hello|hi|hey|salaam|salam|nanga def|na nga def)\b",
        about_artwork: false,
        fr: "Bonjour et bienvenue au musée ! Posez-moi une question sur une œuvre ou sur votre visite.",
        en: "Hello and welcome to the museum! Ask me about an artwork or about your visit.",
        wo: "Salaamaalekum, dalal ak jàmm ci mise bi ! Laajal ma ci liggéey bu rafet walla ci sa nemmeeku.",
    },
    RuleSpec {
        name: "opening-hours",
        pattern: r"\b(horaire\w*|heure\w*|ouvert\w*|ferm\w*|hours?|open\w*|clos\w*|waxtu)\b",
        about_artwork: false,
        fr: "Le musée est ouvert du mardi au dimanche, de 10h à 19h. Il est fermé le lundi.",
        en: "The museum is open Tuesday to Sunday, 10am to 7pm. It is closed on Mondays.",
        wo: "Mise bi dafay ubbeeku talaata ba dibéer, 10i waxtu ba 19i waxtu. Altine dafay tëju.",
    },
    RuleSpec {
        name: "tickets",
        pattern: r"\b(prix|tarif\w*|billet\w*|entrée|ticket\w*|price\w*|cost|fee\w*|njëg|pey)\b",
        about_artwork: false,
        fr: "Les billets sont en vente à l'accueil. L'entrée est gratuite pour les enfants et les scolaires.",
        en: "Tickets are sold at the front desk. Entry is free for children and school groups.",
        wo: "Biyee yi ñu ngi leen di jaay ci bunt bi. Xale yi ak ndongo yi duñu fey.",
    },
    RuleSpec {
        name: "audio-guide",
        pattern: r"\b(audio\w*|guide|écouter|ecouter|listen|narration|déglu)\b",
        about_artwork: false,
        fr: "Chaque œuvre dispose d'un audioguide : ouvrez sa fiche et appuyez sur lecture. Il est disponible en français, en anglais et en wolof.",
        en: "Every artwork has an audio guide: open its page and press play. It is available in French, English and Wolof.",
        wo: "Bépp liggéey am na audioguide : ubbil xëtam te bësal lecture. Am na ko ci farañse, angale ak wolof.",
    },
    RuleSpec {
        name: "scan",
        pattern: r"\b(qr|scan\w*|code|barcode|caméra|camera)\b",
        about_artwork: false,
        fr: "Scannez le code QR placé à côté d'une œuvre pour ouvrir directement sa fiche.",
        en: "Scan the QR code next to an artwork to open its page directly.",
        wo: "Scannel code QR bi nekk ci wetu liggéey bi ngir ubbi xëtam.",
    },
    RuleSpec {
        name: "location",
        pattern: r"\b(adresse|address|situé|located|location|trouver|find|accès|access|fan la)\b",
        about_artwork: false,
        fr: "Le musée se trouve à Dakar, sur le boulevard de la République. L'accueil peut vous indiquer les salles.",
        en: "The museum is in Dakar, on the Boulevard de la République. The front desk can direct you to the galleries.",
        wo: "Mise bi mi ngi nekk Ndakaaru, ci boulevard de la République. Bunt bi mën na la won sàll yi.",
    },
    RuleSpec {
        name: "collections",
        pattern: r"\b(collection\w*|œuvres?|oeuvres?|artworks?|exhibits?|salle\w*|galler\w*|liggéey)\b",
        about_artwork: false,
        fr: "Nos collections réunissent masques, textiles, sculptures et instruments de musique venus de toute l'Afrique.",
        en: "Our collections bring together masks, textiles, sculptures and musical instruments from across Africa.",
        wo: "Sunu mbooloo liggéey am na mask, ndimo, nataal yu ñu yett ak jumtukaay yu woy yu jóge ci Afrig gépp.",
    },
    RuleSpec {
        name: "thanks",
        pattern: r"\b(merci|thanks?|thank you|jërëjëf|jerejef)\b",
        about_artwork: false,
        fr: "Avec plaisir ! Bonne visite.",
        en: "You're welcome! Enjoy your visit.",
        wo: "Ñoo ko bokk ! Nemmeeku bu baax.",
    },
];

static DEFAULT_RESPONSES: Lazy<Responses> = Lazy::new(|| {
    Responses::new(
        "Je n'ai pas de réponse à cette question. Essayez de demander les horaires, les tarifs, l'audioguide ou l'origine d'une œuvre.",
        "I don't have an answer to that. Try asking about opening hours, tickets, the audio guide or where an artwork comes from.",
        "Amuma tontu ci laaj bii. Laajal ci waxtu yi, njëg gi, audioguide bi walla fu liggéey bi jóge.",
    )
});

static BUILTIN: Lazy<Vec<KeywordRule>> = Lazy::new(|| {
    BUILTIN_RULES
        .iter()
        .map(|spec| {
            let rule = KeywordRule::new(
                spec.name,
                spec.pattern,
                Responses::new(spec.fr, spec.en, spec.wo),
            )
            .expect("builtin keyword rule compiles");
            if spec.about_artwork {
                rule.about_artwork()
            } else {
                rule
            }
        })
        .collect()
});

/// Rule-table responder. Never fails.
#[derive(Debug, Clone)]
pub struct KeywordResponder {
    rules: Vec<KeywordRule>,
    fallback: Responses,
    config: AssistantConfig,
}

impl KeywordResponder {
    /// Responder with the built-in museum rules.
    pub fn new() -> Self {
        Self::with_rules(BUILTIN.clone(), DEFAULT_RESPONSES.clone())
    }

    /// Responder with a custom rule table and default answer.
    pub fn with_rules(rules: Vec<KeywordRule>, fallback: Responses) -> Self {
        Self {
            rules,
            fallback,
            config: AssistantConfig::with_model(KEYWORD_PROVIDER),
        }
    }

    pub fn rules(&self) -> &[KeywordRule] {
        &self.rules
    }

    /// The first rule matching `question`, if any.
    pub fn matching_rule(&self, question: &Question) -> Option<&KeywordRule> {
        self.rules.iter().find(|rule| rule.matches(question))
    }

    /// Answer `question`; always succeeds.
    pub fn respond(&self, question: &Question) -> Answer {
        let lang = question.language;
        let text = match self.matching_rule(question) {
            Some(rule) => {
                let template = rule.responses.get(lang);
                match &question.artwork {
                    Some(artwork) => fill(template, artwork.translation(lang)),
                    None => template.to_string(),
                }
            }
            None => self.fallback.get(lang).to_string(),
        };

        Answer {
            text,
            provider: KEYWORD_PROVIDER.to_string(),
            language: lang,
        }
    }
}

impl Default for KeywordResponder {
    fn default() -> Self {
        Self::new()
    }
}

impl AssistantProvider for KeywordResponder {
    fn answer(&self, question: &Question) -> Result<Answer> {
        Ok(self.respond(question))
    }

    fn config(&self) -> &AssistantConfig {
        &self.config
    }

    fn name(&self) -> &str {
        KEYWORD_PROVIDER
    }
}

fn fill(template: &str, t: &Translation) -> String {
    template
        .replace("{title}", &t.title)
        .replace("{origin}", &t.origin)
        .replace("{period}", &t.period)
        .replace("{description}", &t.description)
        .replace("{context}", &t.cultural_context)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogLoader;

    #[test]
    fn test_builtin_rules_all_compile() {
        assert_eq!(KeywordResponder::new().rules().len(), BUILTIN_RULES.len());
    }

    #[test]
    fn test_opening_hours_in_each_language() {
        let responder = KeywordResponder::new();

        let fr = responder.respond(&Question::new("Quels sont vos HORAIRES ?"));
        assert!(fr.text.contains("mardi"));
        assert_eq!(fr.provider, KEYWORD_PROVIDER);

        let en = responder.respond(&Question::new("opening hours?").in_language(Language::En));
        assert!(en.text.contains("Tuesday"));
        assert_eq!(en.language, Language::En);
    }

    #[test]
    fn test_unknown_question_gets_default() {
        let responder = KeywordResponder::new();
        let answer = responder.respond(&Question::new("xyzzy").in_language(Language::Wo));
        assert_eq!(answer.text, DEFAULT_RESPONSES.wo);
    }

    #[test]
    fn test_artwork_rules_need_artwork() {
        let responder = KeywordResponder::new();
        let q = Question::new("What is its origin?").in_language(Language::En);
        assert_ne!(
            responder.matching_rule(&q).map(|r| r.name.as_str()),
            Some("artwork-origin")
        );
    }

    #[test]
    fn test_artwork_placeholders_use_resolved_translation() {
        let catalog = CatalogLoader::new().load_bundled().unwrap();
        let kanaga = catalog.get_by_id("masque-kanaga").unwrap().clone();
        let responder = KeywordResponder::new();

        // Kanaga has no English translation; the French one is used.
        let q = Question::new("Where is it from?")
            .in_language(Language::En)
            .about(kanaga);
        let answer = responder.respond(&q);
        assert_eq!(answer.text, "\"Masque Kanaga\" comes from: Mali.");
    }

    #[test]
    fn test_custom_rules() {
        let rule = KeywordRule::new(
            "cafe",
            r"\bcaf[ée]\b",
            Responses::new("Au rez-de-chaussée.", "Ground floor.", "Ci suuf."),
        )
        .unwrap();
        let responder = KeywordResponder::with_rules(vec![rule], DEFAULT_RESPONSES.clone());
        assert_eq!(
            responder.respond(&Question::new("Où est le CAFÉ ?")).text,
            "Au rez-de-chaussée."
        );
    }

    #[test]
    fn test_invalid_pattern_is_error() {
        assert!(KeywordRule::new("bad", "(", Responses::new("", "", "")).is_err());
    }
}
