//! Integration tests for lastfm-titlecase.

use lastfm_titlecase::casing::to_sentence_case;
use lastfm_titlecase::host::{PageEvent, TitleTracker};
use lastfm_titlecase::state::ConfigState;
use lastfm_titlecase::store::{ConfigStore, JsonFileStore};
use lastfm_titlecase::{Config, WordKind, WordSet, normalize, normalize_changed};
use proptest::prelude::*;

fn config_with_replacement(from: &str, to: &str) -> Config {
    let mut config = Config::default();
    config.replacements.insert(from, to).unwrap();
    config
}

/// First and last words are capitalized even when they are small words.
#[test]
fn test_first_and_last_word_capitalized() {
    assert_eq!(normalize("the the the", &Config::default()), "The the The");
}

/// A multi-word replacement matches case-insensitively and is final.
#[test]
fn test_phrase_replacement_is_terminal() {
    let config = config_with_replacement("foo bar", "Foo Bar");
    assert_eq!(normalize("FOO BAR", &config), "Foo Bar");

    let config = config_with_replacement("the xx", "the xx");
    assert_eq!(normalize("The XX", &config), "the xx");
}

/// A multi-word replacement only matches the whole title.
#[test]
fn test_phrase_replacement_needs_whole_title() {
    let config = config_with_replacement("foo bar", "fOO bAR");
    assert_eq!(normalize("foo bar baz", &config), "Foo Bar Baz");
}

/// A single-word replacement wins over the uppercase set.
#[test]
fn test_single_word_replacement_beats_uppercase() {
    let mut config = config_with_replacement("mc", "Mc");
    assert!(config.uppercase_words.contains("mc"));
    config.uppercase_words.insert("mc").unwrap();
    assert_eq!(normalize("mc hammer", &config), "Mc Hammer");
}

/// A deliberately lower-cased replacement is not re-capitalized by later
/// rules, even right after a bracket.
#[test]
fn test_lowercase_replacement_survives_bracket_rule() {
    let config = config_with_replacement("feat", "feat");
    assert_eq!(
        normalize("song (FEAT other artist)", &config),
        "Song (feat Other Artist)"
    );
}

/// Replacements containing punctuation or digits are locked the same way.
#[test]
fn test_punctuated_replacement_survives_bracket_rule() {
    let config = config_with_replacement("feat.", "feat.");
    assert_eq!(normalize("song (feat. someone)", &config), "Song (feat. Someone)");

    let config = config_with_replacement("deadmau5", "deadmau5");
    assert_eq!(
        normalize("ghosts (deadmau5 remix)", &config),
        "Ghosts (deadmau5 Remix)"
    );
}

/// Only text a replacement wrote is locked, not every word that happens to
/// look like a replacement target.
#[test]
fn test_replacement_target_elsewhere_still_capitalized() {
    let config = config_with_replacement("teh", "the");
    assert_eq!(normalize("live (the show)", &config), "Live (The Show)");
    assert_eq!(normalize("live (teh show)", &config), "Live (the Show)");
}

#[test]
fn test_roman_numerals_only_at_word_boundaries() {
    let config = Config::default();
    assert_eq!(normalize("Part iii", &config), "Part III");
    assert_eq!(normalize("trivia", &config), "Trivia");
    assert_eq!(normalize("final fantasy vii", &config), "Final Fantasy VII");
}

#[test]
fn test_musical_keys() {
    let config = Config::default();
    assert_eq!(normalize("sonata in a minor", &config), "Sonata in A Minor");
    assert_eq!(
        normalize("prelude in a sharp major", &config),
        "Prelude in A Sharp Major"
    );
    assert_eq!(normalize("a song for you", &config), "A Song for You");
    assert_eq!(normalize("once upon a time", &config), "Once Upon a Time");
}

#[test]
fn test_acronyms_and_uppercase_words() {
    let config = Config::default();
    assert_eq!(
        normalize("we are the world (u.s.a. for africa)", &config),
        "We Are the World (U.S.A. for Africa)"
    );
    assert_eq!(
        normalize("DJ KOOL - LET ME CLEAR MY THROAT", &config),
        "DJ Kool - Let Me Clear My Throat"
    );
}

#[test]
fn test_capitalize_after_punctuation() {
    let config = Config::default();
    assert_eq!(normalize("live (in the studio)", &config), "Live (In the Studio)");
    assert_eq!(normalize("jay-z", &config), "Jay-Z");
}

#[test]
fn test_cyrillic_is_sentence_cased() {
    let config = Config::default();
    assert_eq!(normalize("ГРУППА КРОВИ", &config), "Группа крови");
    assert_eq!(normalize("КИНО live in MOSCOW", &config), "Кино live in moscow");
}

#[test]
fn test_sentence_case_keeps_overrides() {
    let mut config = Config::default();
    config.capitalized_words.insert("moscow").unwrap();
    assert_eq!(normalize("кино live in MOSCOW ii", &config), "Кино live in Moscow II");
}

#[test]
fn test_normalizing_original_is_repeatable() {
    let config = Config::default();
    let original = "the END of THE world part ii";
    let first = normalize(original, &config);
    let second = normalize(original, &config);
    assert_eq!(first, second);
    assert_eq!(first, "The End of the World Part II");
}

#[test]
fn test_already_normalized_reports_unchanged() {
    let config = Config::default();
    assert_eq!(normalize_changed("The End of the World", &config), None);
}

#[test]
fn test_toml_config_end_to_end() {
    let config = Config::from_toml(
        r#"
lowercase_words = ["of", "the", "and"]
uppercase_words = ["abba"]
capitalized_words = ["elvis"]
sentence_case = false

[[replacements]]
from = "acdc"
to = "AC/DC"
"#,
    )
    .unwrap();
    assert_eq!(normalize("abba and elvis", &config), "ABBA and Elvis");
    assert_eq!(normalize("acdc live", &config), "AC/DC Live");
    assert_eq!(normalize("кино and elvis", &config), "Кино and Elvis");
    // "dj" is no longer in the uppercase set.
    assert_eq!(normalize("dj shadow", &config), "Dj Shadow");
}

#[test]
fn test_options_page_to_content_script() {
    let temp_dir = tempfile::tempdir().unwrap();
    let mut store = JsonFileStore::new(temp_dir.path().join("settings.json"));

    // Options page: load, edit, save.
    let mut state = ConfigState::load(&store).unwrap();
    state.add_word(WordKind::Uppercase, "Abba").unwrap();
    state.add_replacement("the the", "The The").unwrap();
    state.save(&mut store).unwrap();
    assert!(!state.has_unsaved_changes());

    // Content script: load once per page, then normalize.
    let config = Config::from_stored(store.load().unwrap());
    let mut tracker = TitleTracker::new(config);
    let updates = tracker.bulk_scan(vec![
        ("a", "abba gold".to_string()),
        ("b", "THE THE".to_string()),
    ]);
    assert_eq!(
        updates,
        vec![
            ("a", "ABBA Gold".to_string()),
            ("b", "The The".to_string()),
        ]
    );
    assert_eq!(
        tracker.handle(PageEvent::Inserted {
            key: "c",
            text: "dancing queen by abba".to_string(),
        }),
        Some(("c", "Dancing Queen by ABBA".to_string()))
    );
}

fn plain_word() -> impl Strategy<Value = String> {
    // No i, v or x, so no word is read as a roman numeral.
    "[a-h]{3,8}"
}

proptest! {
    #[test]
    fn prop_normalize_is_pure(text in "\\PC{0,40}") {
        let config = Config::default();
        prop_assert_eq!(normalize(&text, &config), normalize(&text, &config));
    }

    #[test]
    fn prop_title_case_edges_capitalized(
        words in prop::collection::vec(
            prop_oneof![
                Just("the".to_string()),
                Just("of".to_string()),
                Just("a".to_string()),
                "[a-z]{1,8}",
            ],
            2..6,
        )
    ) {
        let text = words.join(" ");
        let output = normalize(&text, &Config::default());
        let out_words: Vec<&str> = output.split_whitespace().collect();
        prop_assert_eq!(out_words.len(), words.len());
        let first = out_words[0].chars().next().unwrap();
        let last = out_words[out_words.len() - 1].chars().next().unwrap();
        prop_assert!(first.is_uppercase(), "{}", output);
        prop_assert!(last.is_uppercase(), "{}", output);
    }

    #[test]
    fn prop_cyrillic_is_sentence_cased(
        before in prop::collection::vec(plain_word(), 0..3),
        cyrillic in "[а-я]{2,6}",
        after in prop::collection::vec(plain_word(), 0..3),
    ) {
        let mut words = before;
        words.push(cyrillic);
        words.extend(after);
        let text = words.join(" ").to_uppercase();

        let config = Config {
            uppercase_words: WordSet::new(),
            ..Config::default()
        };
        prop_assert_eq!(normalize(&text, &config), to_sentence_case(&text));
    }
}
