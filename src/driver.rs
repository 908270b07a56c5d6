use crate::canon::{BruteForce, CanonicalKey, Canonicalizer, DirectAssignment};
use crate::cards::Rank;
use crate::combinations::{binomial, Combinations};
use crate::deck::Deck;
use crate::patterns::{canonical_patterns, rank_multisets};
use crate::permutation::SuitPermutation;
use crate::sequence::{CardSequence, SequenceError};
use rand::seq::{IndexedRandom, SliceRandom};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::str::FromStr;

/// Unique canonical keys collected by one run.
pub type EquivalenceClassSet = BTreeSet<CanonicalKey>;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EnumerationError {
    #[error(transparent)]
    Sequence(#[from] SequenceError),
    #[error(
        "canonical forms diverge for {input}: oracle gives {oracle}, candidate gives {candidate}"
    )]
    Divergence { input: String, oracle: String, candidate: String },
}

/// How the combination space is walked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Method {
    /// Every deck combination, canonicalized by trying all relabelings.
    BruteForce,
    /// Every deck combination, canonicalized by direct suit assignment.
    #[default]
    Direct,
    /// Every rank multiset, expanded into its canonical suit patterns.
    RankPatterns,
}

impl Method {
    pub const ALL: [Method; 3] = [Method::BruteForce, Method::Direct, Method::RankPatterns];

    pub const fn name(self) -> &'static str {
        match self {
            Method::BruteForce => "brute",
            Method::Direct => "direct",
            Method::RankPatterns => "patterns",
        }
    }

    /// The per-hand canonicalizer behind this method; `None` for
    /// [`Method::RankPatterns`], which never canonicalizes single hands.
    pub fn canonicalizer(self) -> Option<&'static (dyn Canonicalizer + Sync)> {
        match self {
            Method::BruteForce => Some(&BruteForce),
            Method::Direct => Some(&DirectAssignment),
            Method::RankPatterns => None,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown method '{0}' (expected brute, direct or patterns)")]
pub struct MethodParseError(String);

impl FromStr for Method {
    type Err = MethodParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Method::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| MethodParseError(s.to_string()))
    }
}

/// Result of one enumeration run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enumeration {
    /// Raw inputs visited: deck combinations, or rank multisets.
    pub inputs: usize,
    pub classes: EquivalenceClassSet,
}

/// Number of unordered k-card combinations of a 52-card deck.
pub fn count_combinations(k: usize) -> usize {
    binomial(CardSequence::MAX_LEN, k)
}

fn check_len(k: usize) -> Result<(), SequenceError> {
    if k == 0 || k > CardSequence::MAX_LEN {
        return Err(SequenceError::Length(k));
    }
    Ok(())
}

/// Enumerate every k-card hand and fold the results into a class set.
///
/// Any error aborts the whole run.
///
/// ```
/// use canonical_flops::driver::{enumerate, Method};
///
/// let run = enumerate(3, Method::Direct).unwrap();
/// assert_eq!(run.inputs, 22100);
/// assert_eq!(run.classes.len(), 1755);
/// ```
pub fn enumerate(k: usize, method: Method) -> Result<Enumeration, EnumerationError> {
    check_len(k)?;
    let mut classes = EquivalenceClassSet::new();
    let mut inputs = 0;
    match method.canonicalizer() {
        Some(canonicalizer) => {
            let deck = Deck::standard();
            for combo in Combinations::new(deck.len(), k) {
                classes.insert(canonicalizer.canonicalize_cards(&deck.select(&combo))?);
                inputs += 1;
            }
        }
        None => {
            for ranks in rank_multisets(k) {
                let keys = canonical_patterns(&ranks)?;
                log::debug!("{:<24}{:>6} patterns", format_ranks(&ranks), keys.len());
                classes.extend(keys);
                inputs += 1;
            }
        }
    }
    log::info!("{method}: {inputs} inputs, {} classes for {k}-card hands", classes.len());
    Ok(Enumeration { inputs, classes })
}

/// Same result as [`enumerate`], with the input space split across the
/// rayon pool. Each worker builds a local set; the sets are merged by union.
#[cfg(feature = "parallel")]
pub fn enumerate_parallel(k: usize, method: Method) -> Result<Enumeration, EnumerationError> {
    use rayon::prelude::*;

    check_len(k)?;
    let (inputs, classes) = match method.canonicalizer() {
        Some(canonicalizer) => {
            let deck = Deck::standard();
            let combos: Vec<Vec<usize>> = Combinations::new(deck.len(), k).collect();
            let classes = combos
                .par_iter()
                .try_fold(EquivalenceClassSet::new, |mut local, combo| {
                    local.insert(canonicalizer.canonicalize_cards(&deck.select(combo))?);
                    Ok::<_, SequenceError>(local)
                })
                .try_reduce(EquivalenceClassSet::new, |mut a, mut b| {
                    a.append(&mut b);
                    Ok(a)
                })?;
            (combos.len(), classes)
        }
        None => {
            let multisets: Vec<Vec<Rank>> = rank_multisets(k).collect();
            let classes = multisets
                .par_iter()
                .try_fold(EquivalenceClassSet::new, |mut local, ranks| {
                    local.extend(canonical_patterns(ranks)?);
                    Ok::<_, SequenceError>(local)
                })
                .try_reduce(EquivalenceClassSet::new, |mut a, mut b| {
                    a.append(&mut b);
                    Ok(a)
                })?;
            (multisets.len(), classes)
        }
    };
    log::info!(
        "{method} (parallel, {} threads): {inputs} inputs, {} classes for {k}-card hands",
        rayon::current_num_threads(),
        classes.len()
    );
    Ok(Enumeration { inputs, classes })
}

fn diverged(
    input: impl fmt::Display,
    oracle: impl fmt::Display,
    candidate: impl fmt::Display,
) -> EnumerationError {
    EnumerationError::Divergence {
        input: input.to_string(),
        oracle: oracle.to_string(),
        candidate: candidate.to_string(),
    }
}

fn format_ranks(ranks: &[Rank]) -> String {
    ranks.iter().map(|r| r.to_char()).collect()
}

fn format_keys<'a>(keys: impl IntoIterator<Item = &'a CanonicalKey>) -> String {
    keys.into_iter().map(ToString::to_string).collect::<Vec<_>>().join(",")
}

/// Check both fast paths against the brute-force oracle over every k-card
/// hand: direct assignment per hand, and the rank-pattern enumerator per
/// rank multiset. Returns the number of classes.
pub fn cross_check(k: usize) -> Result<usize, EnumerationError> {
    check_len(k)?;
    let deck = Deck::standard();
    let mut reachable: HashMap<Vec<Rank>, BTreeSet<CanonicalKey>> = HashMap::new();

    for combo in Combinations::new(deck.len(), k) {
        let sequence = CardSequence::try_new(deck.select(&combo))?;
        let oracle = BruteForce.canonicalize(&sequence);
        let candidate = DirectAssignment.canonicalize(&sequence);
        if candidate != oracle {
            return Err(diverged(&sequence, &oracle, &candidate));
        }
        let ranks = oracle.cards().iter().map(|c| c.rank()).collect();
        reachable.entry(ranks).or_default().insert(oracle);
    }

    let mut total = 0;
    for ranks in rank_multisets(k) {
        let produced: BTreeSet<CanonicalKey> = canonical_patterns(&ranks)?.into_iter().collect();
        let expected = reachable.remove(&ranks).unwrap_or_default();
        if produced != expected {
            return Err(diverged(
                format_ranks(&ranks),
                format_keys(&expected),
                format_keys(&produced),
            ));
        }
        total += produced.len();
    }
    log::info!("cross-check passed: {total} classes for {k}-card hands");
    Ok(total)
}

/// Randomized cross-check for hand sizes too large to walk exhaustively.
///
/// Each sample is dealt from a deck shuffled by a seeded ChaCha stream, then
/// checked for direct/oracle agreement and for invariance under a random
/// reordering and a random suit relabeling. Undoing the relabeling must give
/// back the dealt cards.
pub fn sample_check(k: usize, samples: usize, seed: u64) -> Result<(), EnumerationError> {
    check_len(k)?;
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    for _ in 0..samples {
        let mut deck = Deck::standard();
        deck.shuffle_with(&mut rng);
        let sequence = CardSequence::try_new(deck.draw_n(k))?;
        let oracle = BruteForce.canonicalize(&sequence);

        let candidate = DirectAssignment.canonicalize(&sequence);
        if candidate != oracle {
            return Err(diverged(&sequence, &oracle, &candidate));
        }

        let mut order: Vec<usize> = (0..k).collect();
        order.shuffle(&mut rng);
        let permutation = SuitPermutation::ALL
            .choose(&mut rng)
            .copied()
            .unwrap_or_else(SuitPermutation::identity);
        log::trace!("{sequence} relabeled by {permutation}");
        let image = sequence.reorder(&order)?.relabel(&permutation);
        let restored = image.relabel(&permutation.inverse());
        if restored.sorted() != sequence.sorted() {
            return Err(diverged(&sequence, &sequence, &restored));
        }
        for key in [BruteForce.canonicalize(&image), DirectAssignment.canonicalize(&image)] {
            if key != oracle {
                return Err(diverged(&image, &oracle, &key));
            }
        }
    }
    log::info!("sample check passed: {samples} random {k}-card hands (seed {seed})");
    Ok(())
}
