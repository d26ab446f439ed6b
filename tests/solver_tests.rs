use rand::rngs::StdRng;
use rand::SeedableRng;
use wordle_index::{
    Alphabet, CandidatePool, DictionaryIndex, FeedbackPattern, GuessSelector, SelectorConfig,
    Word, MAX_TURNS,
};

fn get_test_words() -> Vec<&'static str> {
    vec![
        "crane", "slate", "trace", "crate", "raise", "arise", "stare", "roast", "toast", "beast",
    ]
}

fn test_index() -> DictionaryIndex {
    DictionaryIndex::build(get_test_words(), Alphabet::letters()).unwrap()
}

fn word(s: &str) -> Word {
    Word::parse(s, &Alphabet::letters()).unwrap()
}

fn sequential() -> GuessSelector {
    GuessSelector::new(SelectorConfig {
        parallel: false,
        ..SelectorConfig::default()
    })
}

#[test]
fn test_rank_orders_by_expected_remaining() {
    let index = test_index();
    let pool = CandidatePool::new(&index);
    let ranked = sequential().rank(&index, &pool, index.words(), 5);

    assert_eq!(ranked.len(), 5);
    for i in 1..ranked.len() {
        assert!(ranked[i - 1].expected_remaining <= ranked[i].expected_remaining);
    }
    assert_eq!(ranked[0].word, word("crane"));
    assert!((ranked[0].expected_remaining - 0.9).abs() < 1e-9);
}

#[test]
fn test_rank_small_dictionary() {
    let index =
        DictionaryIndex::build(["crane", "slate", "trace", "stale"], Alphabet::letters()).unwrap();
    let pool = CandidatePool::new(&index);
    let ranked = sequential().rank(&index, &pool, index.words(), 4);

    let words: Vec<Word> = ranked.iter().map(|a| a.word).collect();
    assert_eq!(
        words,
        vec![word("slate"), word("stale"), word("crane"), word("trace")]
    );
    assert!((ranked[0].expected_remaining - 0.75).abs() < 1e-9);
    assert!((ranked[2].expected_remaining - 1.25).abs() < 1e-9);
    assert!(ranked.iter().all(|a| a.is_possible_answer));
}

#[test]
fn test_expected_remaining_is_sum_of_squared_partitions() {
    let index = test_index();
    let pool = CandidatePool::new(&index);
    let selector = sequential();
    for guess in index.words() {
        let partition = GuessSelector::partition(&pool, guess);
        let squares: usize = partition.iter().map(|&(_, f)| f * f).sum();
        let expected = squares as f64 / pool.len() as f64;
        assert!((selector.expected_remaining(&index, &pool, guess) - expected).abs() < 1e-9);
    }
}

#[test]
fn test_partition_skips_winning_pattern() {
    let index = test_index();
    let pool = CandidatePool::new(&index);

    let partition = GuessSelector::partition(&pool, &word("crane"));
    assert!(partition.iter().all(|&(p, _)| p != FeedbackPattern::ALL_HIT));
    let total: usize = partition.iter().map(|&(_, f)| f).sum();
    assert_eq!(total, pool.len() - 1);
    for i in 1..partition.len() {
        assert!(partition[i - 1].1 >= partition[i].1);
    }

    // not a candidate, so every secret is accounted for
    let partition = GuessSelector::partition(&pool, &word("level"));
    let total: usize = partition.iter().map(|&(_, f)| f).sum();
    assert_eq!(total, pool.len());
}

#[test]
fn test_pruning_does_not_change_the_choice() {
    let index = test_index();
    let pool = CandidatePool::new(&index);
    let pruned = sequential();
    let exhaustive = GuessSelector::new(SelectorConfig {
        epsilon: f64::INFINITY,
        parallel: false,
    });

    for seed in 0..10 {
        let a = pruned.choose(&index, &pool, index.words(), 1, &[], &mut StdRng::seed_from_u64(seed));
        let b = exhaustive.choose(&index, &pool, index.words(), 1, &[], &mut StdRng::seed_from_u64(seed));
        assert_eq!(a, b);
    }
    assert_eq!(
        pruned.rank(&index, &pool, index.words(), 3),
        exhaustive.rank(&index, &pool, index.words(), 3)
    );
}

#[test]
fn test_parallel_matches_sequential() {
    let index = test_index();
    let pool = CandidatePool::new(&index);
    let parallel = GuessSelector::new(SelectorConfig::default());

    for seed in 0..10 {
        let a = sequential().choose(&index, &pool, index.words(), 1, &[], &mut StdRng::seed_from_u64(seed));
        let b = parallel.choose(&index, &pool, index.words(), 1, &[], &mut StdRng::seed_from_u64(seed));
        assert_eq!(a, b);
    }
    assert_eq!(
        sequential().rank(&index, &pool, index.words(), 5),
        parallel.rank(&index, &pool, index.words(), 5)
    );
}

#[test]
fn test_choose_picks_a_minimizer() {
    let index = test_index();
    let pool = CandidatePool::new(&index);
    let minimizers = [word("crane"), word("crate"), word("trace")];
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..20 {
        let guess = sequential()
            .choose(&index, &pool, index.words(), 1, &[], &mut rng)
            .unwrap();
        assert!(minimizers.contains(&guess), "{}", guess);
    }
}

#[test]
fn test_choose_uses_opening_on_first_turn_only() {
    let index = test_index();
    let pool = CandidatePool::new(&index);
    let opening = [word("roast")];
    let mut rng = StdRng::seed_from_u64(1);

    let first = sequential().choose(&index, &pool, index.words(), 0, &opening, &mut rng);
    assert_eq!(first, Some(word("roast")));

    let later = sequential().choose(&index, &pool, index.words(), 1, &opening, &mut rng);
    assert_ne!(later, Some(word("roast")));
}

#[test]
fn test_choose_from_pool_when_two_or_fewer_left() {
    let index = test_index();
    let pool = CandidatePool::from_words([word("toast"), word("roast")]);
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..10 {
        let guess = sequential()
            .choose(&index, &pool, index.words(), 1, &[], &mut rng)
            .unwrap();
        assert!(pool.contains(&guess));
    }

    let single = CandidatePool::from_words([word("beast")]);
    let guess = sequential().choose(&index, &single, index.words(), 2, &[], &mut rng);
    assert_eq!(guess, Some(word("beast")));
}

#[test]
fn test_choose_from_pool_on_final_turn() {
    let index = test_index();
    let pool = CandidatePool::from_words([word("stare"), word("roast"), word("toast"), word("beast")]);
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..10 {
        let guess = sequential()
            .choose(&index, &pool, index.words(), MAX_TURNS - 1, &[], &mut rng)
            .unwrap();
        assert!(pool.contains(&guess));
    }
}

#[test]
fn test_choose_with_empty_pool() {
    let index = test_index();
    let pool = CandidatePool::from_words([]);
    let mut rng = StdRng::seed_from_u64(0);
    assert!(sequential()
        .choose(&index, &pool, index.words(), 1, &[], &mut rng)
        .is_none());
    assert!(sequential().rank(&index, &pool, index.words(), 5).is_empty());
}

#[test]
fn test_hard_mode_guesses_come_from_pool() {
    let index = test_index();
    let full = CandidatePool::new(&index);
    let pattern = FeedbackPattern::calculate(&word("arise"), &word("crate"));
    let pool = full.intersect(&index, &pattern.atoms(&word("arise")));
    assert_eq!(pool.len(), 3);

    let guesses = pool.sorted();
    let mut rng = StdRng::seed_from_u64(11);
    let guess = sequential()
        .choose(&index, &pool, &guesses, 1, &[], &mut rng)
        .unwrap();
    assert!(pool.contains(&guess));
}
