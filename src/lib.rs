//! canonical-flops: the strategically distinct poker flops
//!
//! Two card sequences are equivalent when one becomes the other by
//! reordering cards and renaming suits. Of the 22100 flops a 52-card deck
//! can deal, 1755 remain after that reduction.
//!
//! Goals:
//! - One canonical key per equivalence class, reproducible across runs
//! - A brute-force oracle and a direct O(n log n) canonicalizer that always agree
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start
//! ```
//! use canonical_flops::canon::{BruteForce, Canonicalizer, DirectAssignment};
//! use canonical_flops::sequence::CardSequence;
//!
//! let flop: CardSequence = "2sKd7h".parse().unwrap();
//! let key = DirectAssignment.canonicalize(&flop);
//! assert_eq!(key.to_string(), "Ks7h2d");
//! assert_eq!(key, BruteForce.canonicalize(&flop));
//! ```
//!
//! ## CLI
//! Write `flops_1755.txt` with:
//! ```sh
//! cargo run --bin flops
//! ```

pub mod canon;
pub mod cards;
pub mod combinations;
pub mod deck;
pub mod driver;
pub mod output;
pub mod patterns;
pub mod permutation;
pub mod sequence;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
