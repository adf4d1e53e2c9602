use wscribe_intro::narration::NARRATION;
use wscribe_intro::segment::{split_sentences, SentenceRules};

fn bare_rules() -> SentenceRules {
    SentenceRules::parse("").unwrap()
}

fn english_rules() -> SentenceRules {
    SentenceRules::load(std::path::Path::new("segmenter_data")).unwrap()
}

#[test]
fn two_sentence_prompt_splits_in_order() {
    let sentences = split_sentences("Hello there. How are you?", &bare_rules());
    assert_eq!(sentences, vec!["Hello there.", "How are you?"]);
}

#[test]
fn empty_input_yields_no_sentences() {
    assert!(split_sentences("", &bare_rules()).is_empty());
    assert!(split_sentences("   \n\n  ", &bare_rules()).is_empty());
}

#[test]
fn repeated_runs_are_deterministic() {
    let rules = english_rules();
    let first = split_sentences(NARRATION, &rules);
    let second = split_sentences(NARRATION, &rules);
    assert!(!first.is_empty());
    assert_eq!(first, second);
}

#[test]
fn sentences_reconstruct_the_narration() {
    let rules = english_rules();
    let sentences = split_sentences(NARRATION, &rules);

    let rebuilt: Vec<&str> = sentences
        .iter()
        .flat_map(|s| s.split_whitespace())
        .collect();
    let original: Vec<&str> = NARRATION.split_whitespace().collect();
    assert_eq!(rebuilt, original);
}

#[test]
fn every_sentence_is_trimmed_and_non_empty() {
    for sentence in split_sentences(NARRATION, &english_rules()) {
        assert!(!sentence.is_empty());
        assert_eq!(sentence, sentence.trim());
    }
}

#[test]
fn abbreviation_periods_do_not_split() {
    let rules = SentenceRules::parse("etc\ne.g\n").unwrap();
    let sentences = split_sentences("Use formats e.g. SRT, VTT etc. when exporting. Done.", &rules);
    assert_eq!(
        sentences,
        vec!["Use formats e.g. SRT, VTT etc. when exporting.", "Done."]
    );
}

#[test]
fn inner_periods_never_split() {
    let sentences = split_sentences("Version 2.5 of the tool shipped today.", &bare_rules());
    assert_eq!(sentences, vec!["Version 2.5 of the tool shipped today."]);
}

#[test]
fn ellipsis_splits_only_before_a_capital() {
    let sentences = split_sentences("Well... maybe. Well... Maybe.", &bare_rules());
    assert_eq!(sentences, vec!["Well... maybe.", "Well...", "Maybe."]);
}

#[test]
fn symbol_fragment_folds_into_previous_sentence() {
    let sentences = split_sentences("♪ Happy editing! ♪", &bare_rules());
    assert_eq!(sentences, vec!["♪ Happy editing! ♪"]);
}

#[test]
fn missing_rules_file_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let err = SentenceRules::load(dir.path()).unwrap_err();
    assert!(err.to_string().contains("sentence rules not found"));
}

#[test]
fn comments_and_blank_lines_are_ignored_in_rules() {
    let rules = SentenceRules::parse("# comment\n\nDr.\n").unwrap();
    let sentences = split_sentences("Ask Dr. Smith. Then leave.", &rules);
    assert_eq!(sentences, vec!["Ask Dr. Smith.", "Then leave."]);
}
