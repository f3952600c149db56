//! Property-based tests for catalog queries.
//!
//! Catalogs are generated with unique ids and scan codes, small category
//! and word pools (so filters and searches actually hit), and a random
//! subset of English/Wolof translations.
//!
//! # Running Property Tests
//!
//! ```bash
//! cargo test -p musee --test property_tests
//!
//! # More cases
//! PROPTEST_CASES=10000 cargo test -p musee --test property_tests
//! ```

use std::collections::HashSet;

use proptest::prelude::*;

use musee::{
    resolve_translation, ArtworkRecord, Catalog, CatalogLoader, CatalogQuery, CategoryFilter,
    Language, Translation, Translations,
};

// =============================================================================
// Test Strategies
// =============================================================================

fn category() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Masques".to_string()),
        Just("Textiles".to_string()),
        Just("Sculptures".to_string()),
        Just("masques".to_string()),
    ]
}

fn word() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Masque".to_string()),
        Just("bois".to_string()),
        Just("GHANA".to_string()),
        Just("Sénégal".to_string()),
        Just("kora".to_string()),
        "[a-z]{1,6}",
    ]
}

fn language() -> impl Strategy<Value = Language> {
    prop_oneof![Just(Language::Fr), Just(Language::En), Just(Language::Wo)]
}

fn translation() -> impl Strategy<Value = Translation> {
    (word(), word(), word()).prop_map(|(title, description, origin)| Translation {
        title,
        description,
        period: String::new(),
        origin,
        cultural_context: String::new(),
        audio_url: None,
    })
}

fn record_parts() -> impl Strategy<Value = (String, Translations, bool)> {
    (
        category(),
        translation(),
        prop::option::of(translation()),
        prop::option::of(translation()),
        any::<bool>(),
    )
        .prop_map(|(category, fr, en, wo, featured)| {
            (category, Translations { fr, en, wo }, featured)
        })
}

/// A valid catalog of 0..20 records with unique ids and scan codes.
fn catalog() -> impl Strategy<Value = Catalog> {
    prop::collection::vec(record_parts(), 0..20).prop_map(|parts| {
        let records: Vec<ArtworkRecord> = parts
            .into_iter()
            .enumerate()
            .map(|(i, (category, translations, featured))| ArtworkRecord {
                id: format!("art-{}", i),
                scan_code: format!("QR-{:04}", i),
                image_url: format!("/img/{}.jpg", i),
                image_gallery: Vec::new(),
                video_url: None,
                category,
                translations,
                created_at: String::new(),
                featured,
            })
            .collect();
        let json = serde_json::to_string(&records).expect("serialize fixture");
        CatalogLoader::with_config(musee::LoaderConfig {
            allow_empty: true,
            ..musee::LoaderConfig::default()
        })
        .load_str(&json, "proptest")
        .expect("generated catalog is valid")
    })
}

fn query_text() -> impl Strategy<Value = String> {
    prop_oneof![Just(String::new()), word(), "[a-zé]{1,3}"]
}

fn matches(record: &ArtworkRecord, text: &str, lang: Language) -> bool {
    let t = resolve_translation(record, lang);
    let needle = text.to_lowercase();
    t.title.to_lowercase().contains(&needle)
        || t.description.to_lowercase().contains(&needle)
        || t.origin.to_lowercase().contains(&needle)
}

// =============================================================================
// Lookup Properties
// =============================================================================

proptest! {
    /// Loaded catalogs keep ids and scan codes unique.
    #[test]
    fn ids_and_scan_codes_are_unique(catalog in catalog()) {
        let ids: HashSet<&str> = catalog.records().iter().map(|r| r.id.as_str()).collect();
        let codes: HashSet<&str> = catalog.records().iter().map(|r| r.scan_code.as_str()).collect();
        prop_assert_eq!(ids.len(), catalog.len());
        prop_assert_eq!(codes.len(), catalog.len());
    }

    /// Lookup by id finds exactly the record with that id.
    #[test]
    fn lookup_by_id_is_sound(catalog in catalog(), probe in "(art-[0-9]{1,2}|QR-[0-9]{4}|)") {
        let expected = catalog.records().iter().find(|r| r.id == probe);
        prop_assert_eq!(catalog.get_by_id(&probe), expected);
    }

    /// Scan lookup never matches on ids.
    #[test]
    fn scan_lookup_ignores_ids(catalog in catalog()) {
        for record in catalog.records() {
            prop_assert!(catalog.get_by_scan_code(&record.id).is_none());
            prop_assert_eq!(catalog.get_by_scan_code(&record.scan_code), Some(record));
        }
    }

    /// Scan lookup never panics on arbitrary payloads.
    #[test]
    fn scan_lookup_never_panics(catalog in catalog(), payload in any::<String>()) {
        let _ = catalog.get_by_scan_code(&payload);
    }
}

// =============================================================================
// Filter Properties
// =============================================================================

proptest! {
    /// Missing translations resolve to French.
    #[test]
    fn fallback_is_french(catalog in catalog(), lang in language()) {
        for record in catalog.records() {
            if record.translations.get(lang).is_none() {
                prop_assert_eq!(resolve_translation(record, lang), &record.translations.fr);
            }
        }
    }

    /// Category filter is the exact, ordered subsequence.
    #[test]
    fn category_filter_is_exact(catalog in catalog(), category in category()) {
        let expected: Vec<&ArtworkRecord> =
            catalog.records().iter().filter(|r| r.category == category).collect();
        prop_assert_eq!(catalog.filter_by_category(&CategoryFilter::only(category)), expected);

        let all: Vec<&ArtworkRecord> = catalog.records().iter().collect();
        prop_assert_eq!(catalog.filter_by_category(&CategoryFilter::parse("all")), all);
    }

    /// Search is the exact, ordered subsequence of case-insensitive matches.
    #[test]
    fn search_is_exact(catalog in catalog(), text in query_text(), lang in language()) {
        let expected: Vec<&ArtworkRecord> =
            catalog.records().iter().filter(|r| matches(r, &text, lang)).collect();
        prop_assert_eq!(catalog.search(&text, lang), expected);
    }

    /// Empty search returns the whole catalog.
    #[test]
    fn empty_search_returns_all(catalog in catalog(), lang in language()) {
        prop_assert_eq!(catalog.search("", lang).len(), catalog.len());
    }

    /// Combined query equals either order of applying the two filters.
    #[test]
    fn combined_filter_commutes(
        catalog in catalog(),
        category in category(),
        text in query_text(),
        lang in language(),
    ) {
        let filter = CategoryFilter::only(category);
        let combined = CatalogQuery::new()
            .category(filter.clone())
            .text(text.clone())
            .language(lang)
            .run(&catalog);

        let searched = catalog.search(&text, lang);
        let category_first: Vec<&ArtworkRecord> = catalog
            .filter_by_category(&filter)
            .into_iter()
            .filter(|r| searched.contains(r))
            .collect();
        let search_first: Vec<&ArtworkRecord> =
            searched.iter().copied().filter(|r| filter.accepts(r)).collect();

        prop_assert_eq!(&combined, &category_first);
        prop_assert_eq!(&combined, &search_first);
    }

    /// Featured subset is exactly the flagged records.
    #[test]
    fn featured_is_exact(catalog in catalog()) {
        let expected: Vec<&ArtworkRecord> = catalog.records().iter().filter(|r| r.featured).collect();
        prop_assert_eq!(catalog.featured(), expected);
    }

    /// Each category appears once.
    #[test]
    fn categories_are_distinct(catalog in catalog()) {
        let unique: HashSet<&str> = catalog.records().iter().map(|r| r.category.as_str()).collect();
        let categories = catalog.categories();
        prop_assert_eq!(categories.len(), unique.len());
        for category in unique {
            prop_assert!(categories.contains(category));
        }
    }
}
