use wordle_index::{Alphabet, Atom, DictionaryIndex, Error, Word};

fn word(s: &str) -> Word {
    Word::parse(s, &Alphabet::letters()).unwrap()
}

fn build(words: &[&str]) -> DictionaryIndex {
    DictionaryIndex::build(words.iter().copied(), Alphabet::letters()).unwrap()
}

fn sorted(index: &DictionaryIndex, atom: Atom) -> Vec<String> {
    let mut words: Vec<String> = index.lookup(&atom).iter().map(|w| w.to_string()).collect();
    words.sort();
    words
}

#[test]
fn test_build_sorts_and_dedups() {
    let index = build(&["trace", "crane", "trace", "slate"]);
    assert_eq!(index.len(), 3);
    assert_eq!(
        index.words(),
        &[word("crane"), word("slate"), word("trace")][..]
    );
    assert!(index.contains(&word("slate")));
    assert!(!index.contains(&word("stale")));
}

#[test]
fn test_position_match_sets() {
    let index = build(&["crane", "slate", "trace", "stale", "level"]);
    assert_eq!(sorted(&index, Atom::PositionMatch(b'c', 0)), ["crane"]);
    assert_eq!(
        sorted(&index, Atom::PositionMatch(b'e', 4)),
        ["crane", "slate", "stale", "trace"]
    );
    assert_eq!(sorted(&index, Atom::PositionMatch(b'l', 4)), ["level"]);
}

#[test]
fn test_position_mismatch_sets() {
    let index = build(&["crane", "slate", "trace", "stale", "level"]);
    assert_eq!(
        sorted(&index, Atom::PositionMismatch(b'a', 0)),
        ["crane", "slate", "stale", "trace"]
    );
    // contains an e, but not in the last position
    assert_eq!(sorted(&index, Atom::PositionMismatch(b'e', 4)), ["level"]);
    // words without the symbol are never in its mismatch sets
    assert_eq!(sorted(&index, Atom::PositionMismatch(b'v', 0)), ["level"]);
}

#[test]
fn test_count_sets() {
    let index = build(&["crane", "slate", "trace", "stale", "level"]);
    assert_eq!(sorted(&index, Atom::CountExact(b'e', 2)), ["level"]);
    assert_eq!(
        sorted(&index, Atom::CountExact(b'e', 1)),
        ["crane", "slate", "stale", "trace"]
    );
    assert_eq!(sorted(&index, Atom::CountAtLeast(b'l', 2)), ["level"]);
    assert!(index.lookup(&Atom::CountAtLeast(b'l', 3)).is_empty());
}

#[test]
fn test_absent_sets() {
    let index = build(&["crane", "slate", "trace", "stale", "level"]);
    assert_eq!(sorted(&index, Atom::Absent(b'c')), ["level", "slate", "stale"]);
    assert_eq!(index.lookup(&Atom::Absent(b'z')).len(), 5);
}

#[test]
fn test_unpopulated_atom_is_empty() {
    let index = build(&["crane", "slate"]);
    assert!(index.lookup(&Atom::PositionMatch(b'z', 0)).is_empty());
    assert!(index.lookup(&Atom::CountAtLeast(b'a', 1)).is_empty());
    assert!(index.lookup(&Atom::CountExact(b'q', 5)).is_empty());
}

#[test]
fn test_build_is_deterministic() {
    let words = ["crane", "slate", "trace", "stale", "level"];
    let first = build(&words);
    let second = build(&["level", "stale", "trace", "slate", "crane"]);
    assert_eq!(first.words(), second.words());
    for &symbol in Alphabet::letters().symbols() {
        for i in 0..5 {
            for atom in [Atom::PositionMatch(symbol, i), Atom::PositionMismatch(symbol, i)] {
                assert_eq!(first.lookup(&atom), second.lookup(&atom));
            }
        }
        assert_eq!(
            first.lookup(&Atom::Absent(symbol)),
            second.lookup(&Atom::Absent(symbol))
        );
    }
}

#[test]
fn test_wrong_length_is_invalid_dictionary() {
    let result = DictionaryIndex::build(["crane", "slates"], Alphabet::letters());
    assert!(matches!(result, Err(Error::InvalidDictionary(_))));

    let result = DictionaryIndex::build(["crane", "cran"], Alphabet::letters());
    assert!(matches!(result, Err(Error::InvalidDictionary(_))));
}

#[test]
fn test_foreign_symbol_is_invalid_dictionary() {
    let result = DictionaryIndex::build(["crane", "Slate"], Alphabet::letters());
    assert!(matches!(result, Err(Error::InvalidDictionary(_))));

    let result = DictionaryIndex::build(["12345", "crane"], Alphabet::digits());
    assert!(matches!(result, Err(Error::InvalidDictionary(_))));
}

#[test]
fn test_empty_dictionary_is_invalid() {
    let result = DictionaryIndex::build(Vec::<String>::new(), Alphabet::letters());
    assert!(matches!(result, Err(Error::InvalidDictionary(_))));
}

#[test]
fn test_digit_alphabet() {
    let index = DictionaryIndex::build(["12345", "11223", "90210"], Alphabet::digits()).unwrap();
    let digits = |s: &str| Word::parse(s, &Alphabet::digits()).unwrap();
    assert!(index.lookup(&Atom::CountAtLeast(b'1', 2)).contains(&digits("11223")));
    assert!(index.lookup(&Atom::CountExact(b'0', 2)).contains(&digits("90210")));
    assert_eq!(index.lookup(&Atom::Absent(b'9')).len(), 2);
}

#[test]
fn test_custom_alphabet() {
    let alphabet = Alphabet::new("abcab").unwrap();
    assert_eq!(alphabet.symbols(), b"abc");
    assert!(Alphabet::new("").is_err());
    assert!(Alphabet::new("a b").is_err());

    assert!(Word::parse("abcca", &alphabet).is_ok());
    assert!(matches!(
        Word::parse("abcda", &alphabet),
        Err(Error::InvalidWord { .. })
    ));
}

#[test]
fn test_word_display_and_counts() {
    let w = word("level");
    assert_eq!(w.to_string(), "level");
    assert_eq!(format!("{:>7}", w), "  level");
    assert_eq!(w.count(b'e'), 2);
    assert!(w.contains(b'v'));
    assert!(!w.contains(b'a'));
}
