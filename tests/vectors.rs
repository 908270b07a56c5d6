use canonical_flops::canon::{BruteForce, Canonicalizer, DirectAssignment};
use canonical_flops::cards::{Card, ParseError, Rank, Suit};
use canonical_flops::sequence::SequenceError;

fn both(input: &str) -> (String, String) {
    (
        BruteForce.canonicalize_str(input).unwrap().to_string(),
        DirectAssignment.canonicalize_str(input).unwrap().to_string(),
    )
}

#[test]
fn rainbow_flop() {
    assert_eq!(both("2sKd7h"), ("Ks7h2d".into(), "Ks7h2d".into()));
}

#[test]
fn paired_flop() {
    assert_eq!(both("7hQdQc"), ("QsQh7d".into(), "QsQh7d".into()));
}

#[test]
fn monotone_flop() {
    assert_eq!(both("JcQc2c"), ("QsJs2s".into(), "QsJs2s".into()));
}

#[test]
fn pair_with_suited_kicker_follows_the_oracle() {
    // The kicker shares a suit with one ace; that suit becomes spades.
    assert_eq!(both("AcAdKd"), ("AsAhKs".into(), "AsAhKs".into()));
}

#[test]
fn odd_length_is_a_parse_error() {
    for canon in [&BruteForce as &dyn Canonicalizer, &DirectAssignment] {
        assert_eq!(canon.canonicalize_str("2s9"), Err(SequenceError::Parse(ParseError::Width(3))));
    }
}

#[test]
fn unknown_symbols_are_parse_errors() {
    assert_eq!(
        BruteForce.canonicalize_str("1s2s3s"),
        Err(SequenceError::Parse(ParseError::Rank('1')))
    );
    assert_eq!(
        BruteForce.canonicalize_str("2s2x3s"),
        Err(SequenceError::Parse(ParseError::Suit('x')))
    );
}

#[test]
fn repeated_card_is_a_duplicate_error() {
    let two_spades = Card::new(Rank::Two, Suit::Spades);
    assert_eq!(
        DirectAssignment.canonicalize_str("2s2s4h"),
        Err(SequenceError::DuplicateCard(two_spades))
    );
}

#[test]
fn empty_input_is_a_length_error() {
    assert_eq!(DirectAssignment.canonicalize_str(""), Err(SequenceError::Length(0)));
    assert_eq!(BruteForce.canonicalize_cards(&[]), Err(SequenceError::Length(0)));
}
