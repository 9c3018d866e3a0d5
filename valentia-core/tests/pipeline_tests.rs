//! End-to-end pipeline tests: detect, segment, classify, store.

use valentia_core::{
    classify, detect, segment, AnnotationKind, AnnotationRole, AnnotationStore, CaseRole,
    LanguageTag, ValencyPattern,
};

#[test]
fn test_latin_document_end_to_end() {
    let text = "Gallia est omnis divisa in partes tres";
    let language = detect(text);
    assert_eq!(language, LanguageTag::Latin);

    let phrases: Vec<_> = segment(text, language).unwrap().collect();
    // No punctuation and no conjunction words, so one span.
    assert_eq!(phrases.len(), 1);
    assert_eq!(phrases[0].text, text);

    let result = classify(phrases[0].text, language).unwrap();
    // "est" is a detection stopword, not a lexicon verb.
    assert!(result.verbs.is_empty());
    assert_eq!(result.pattern, ValencyPattern::Complex);
}

#[test]
fn test_classified_spans_feed_the_store() {
    // "et" doubles as the detection stopword and a phrase boundary.
    let text = "habeo servum, et dominus puero donum dat.";
    let language = detect(text);
    assert_eq!(language, LanguageTag::Latin);

    let mut store = AnnotationStore::new();
    for phrase in segment(text, language).unwrap() {
        store.append(AnnotationKind::Phrase, phrase.text).unwrap();
        let result = classify(phrase.text, language).unwrap();
        for verb in &result.verbs {
            store
                .append(AnnotationKind::ValencyRole(AnnotationRole::Verb), &verb.text)
                .unwrap();
        }
    }

    assert_eq!(store.phrase_count(), 2);
    assert_eq!(store.role_count(AnnotationRole::Verb), 1);
    let texts: Vec<&str> = store.all().iter().map(|r| r.text()).collect();
    assert_eq!(texts, ["habeo servum", "habeo", "dominus puero donum dat"]);

    store.clear();
    assert!(store.all().is_empty());
}

#[test]
fn test_greek_document_end_to_end() {
    let text = "ο ανθρωπος λογον εχει και ο θεος λογος εστιν";
    let language = detect(text);
    assert_eq!(language, LanguageTag::Greek);

    let phrases: Vec<_> = segment(text, language).unwrap().collect();
    assert_eq!(phrases.len(), 2);
    assert_eq!(phrases[0].text, "ο ανθρωπος λογον εχει");

    let first = classify(phrases[0].text, language).unwrap();
    // "ανθρωπος" fires nominative, "λογον" fires accusative.
    assert_eq!(
        first.roles.as_slice(),
        [CaseRole::Nominative, CaseRole::Accusative]
    );
    assert_eq!(first.pattern, ValencyPattern::Transitive);
}

#[test]
fn test_segment_order_is_stable_per_language() {
    let text = "alpha, beta et gamma; delta";
    let latin: Vec<&str> = segment(text, LanguageTag::Latin)
        .unwrap()
        .map(|p| p.text)
        .collect();
    assert_eq!(latin, ["alpha", "beta", "gamma", "delta"]);

    // English has no "et" conjunction, so the middle span stays whole.
    let english: Vec<&str> = segment(text, LanguageTag::English)
        .unwrap()
        .map(|p| p.text)
        .collect();
    assert_eq!(english, ["alpha", "beta et gamma", "delta"]);
}
