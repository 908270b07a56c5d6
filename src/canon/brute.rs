use super::{CanonicalKey, Canonicalizer};
use crate::permutation::SuitPermutation;
use crate::sequence::CardSequence;

/// Reference canonicalizer: relabel with all 24 suit permutations, sort each
/// image and keep the smallest.
#[derive(Debug, Clone, Copy, Default)]
pub struct BruteForce;

impl Canonicalizer for BruteForce {
    fn canonicalize(&self, sequence: &CardSequence) -> CanonicalKey {
        let best = SuitPermutation::ALL
            .iter()
            .map(|p| sequence.relabel(p).sorted())
            .min()
            .unwrap_or_else(|| sequence.sorted());
        CanonicalKey::from_sorted(best)
    }
}
