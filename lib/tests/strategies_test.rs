use wordle_sim::*;

fn candidates(corpus: &Corpus) -> Vec<&Word> {
    corpus.words().iter().collect()
}

#[test]
fn immediate_selects_the_most_frequent_candidate() {
    let corpus = Corpus::from_entries(vec![("apple", 1), ("crane", 10), ("slate", 9)], 5).unwrap();
    let constraints = WordConstraints::new(5);

    let selected = ImmediateStrategy
        .select_guess(&candidates(&corpus), &constraints)
        .unwrap();

    assert_eq!(&*selected.text, "crane");
}

#[test]
fn strategies_return_none_on_empty_candidates() {
    let constraints = WordConstraints::new(5);

    assert!(ImmediateStrategy.select_guess(&[], &constraints).is_none());
    assert!(MaxSimilarityStrategy
        .select_guess(&[], &constraints)
        .is_none());
}

#[test]
fn max_similarity_prefers_shared_positional_letters() {
    // Positional counts: 'c' at 0 and 'r' at 1 appear twice, 'a' at 2 and
    // 'e' at 4 three times, 't' at 3 twice. "crate" scores 12, "crane" 11,
    // "slate" 10, so the scored pick beats the frequency pick.
    let corpus =
        Corpus::from_entries(vec![("slate", 10), ("crate", 5), ("crane", 4)], 5).unwrap();
    let constraints = WordConstraints::new(5);

    let selected = MaxSimilarityStrategy
        .select_guess(&candidates(&corpus), &constraints)
        .unwrap();

    assert_eq!(&*selected.text, "crate");
}

#[test]
fn max_similarity_tie_breaks_on_corpus_order() {
    // Both words score 9; the earlier (more frequent) one wins.
    let corpus = Corpus::from_entries(vec![("abcdf", 10), ("abcde", 9)], 5).unwrap();
    let constraints = WordConstraints::new(5);

    let selected = MaxSimilarityStrategy
        .select_guess(&candidates(&corpus), &constraints)
        .unwrap();

    assert_eq!(&*selected.text, "abcdf");
}

#[test]
fn max_similarity_scores_only_unresolved_positions() {
    let corpus =
        Corpus::from_entries(vec![("abccc", 30), ("abddd", 20), ("acddd", 10)], 5).unwrap();
    let mut constraints = WordConstraints::new(5);
    // Confirm 'a' at position 0; every candidate still matches.
    constraints.update(&GuessOutcome {
        guess: "azzzz",
        verdicts: vec![
            Verdict::Correct,
            Verdict::NotExist,
            Verdict::NotExist,
            Verdict::NotExist,
            Verdict::NotExist,
        ],
    });
    let remaining: Vec<&Word> = corpus
        .words()
        .iter()
        .filter(|word| constraints.is_satisfied_by(&word.text))
        .collect();
    assert_eq!(remaining.len(), 3);

    let selected = MaxSimilarityStrategy
        .select_guess(&remaining, &constraints)
        .unwrap();

    // Over positions 1..5: "abddd" scores 2+2+2+2, "acddd" 1+2+2+2, and
    // "abccc" 2+1+1+1.
    assert_eq!(&*selected.text, "abddd");
}

#[test]
fn strategies_select_a_member_of_the_candidates() {
    let corpus = Corpus::from_entries(
        vec![("crane", 10), ("slate", 9), ("pride", 8), ("apple", 7)],
        5,
    )
    .unwrap();
    let constraints = WordConstraints::new(5);
    let remaining = candidates(&corpus);

    for strategy in [
        &ImmediateStrategy as &dyn GuessStrategy,
        &MaxSimilarityStrategy,
    ] {
        let selected = strategy.select_guess(&remaining, &constraints).unwrap();
        assert!(remaining
            .iter()
            .any(|word| std::ptr::eq(*word, selected)));
    }
}
