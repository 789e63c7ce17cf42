//! Digit combinations derived from a candidate set.
//!
//! - Pairwise output is exhaustive: every ordered pair of distinct digits.
//! - Triple and quadruple output is a small sample drawn without replacement
//!   from all combinations of that arity. The random source is supplied by
//!   the caller so identical seeds give identical output.

use rand::Rng;
use serde::Deserialize;

use super::availability::{Availability, Unavailable};
use super::candidate::CandidateSet;
use super::digit::{join_digits, Digit};

/// Smallest candidate set the triple/quadruple sampler accepts.
pub const MIN_SAMPLE_CANDIDATES: usize = 4;

/// Combination generator settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CombinationConfig {
    /// Cap on pairwise output; `None` keeps every pair.
    #[serde(default)]
    pub max_pairs: Option<usize>,

    /// How many triples / quadruples to sample.
    #[serde(default = "default_sample_count")]
    pub sample_count: usize,

    /// Fixed RNG seed; `None` draws a fresh seed per request.
    #[serde(default)]
    pub seed: Option<u64>,
}

const fn default_sample_count() -> usize {
    2
}

impl Default for CombinationConfig {
    fn default() -> Self {
        Self {
            max_pairs: None,
            sample_count: default_sample_count(),
            seed: None,
        }
    }
}

/// All ordered pairs of distinct digits, sorted lexicographically.
///
/// A set of `n` distinct digits yields `n * (n - 1)` pairs before `cap`.
#[must_use]
pub fn pairs(set: &CandidateSet, cap: Option<usize>) -> Vec<String> {
    let digits = set.digits();
    let mut out: Vec<String> = digits
        .iter()
        .flat_map(|a| {
            digits
                .iter()
                .filter(move |b| *b != a)
                .map(move |b| join_digits([a, b]))
        })
        .collect();
    out.sort_unstable();
    if let Some(cap) = cap {
        out.truncate(cap);
    }
    out
}

/// Every `k`-combination of `digits`, keeping the input order inside each one.
#[must_use]
pub fn combinations(digits: &[Digit], k: usize) -> Vec<Vec<Digit>> {
    let n = digits.len();
    if k == 0 || k > n {
        return Vec::new();
    }

    let mut out = Vec::new();
    let mut idx: Vec<usize> = (0..k).collect();
    loop {
        out.push(idx.iter().map(|&i| digits[i]).collect());

        // Advance the rightmost index that still has room.
        let Some(pos) = (0..k).rev().find(|&i| idx[i] != i + n - k) else {
            return out;
        };
        idx[pos] += 1;
        for j in pos + 1..k {
            idx[j] = idx[j - 1] + 1;
        }
    }
}

/// Sample `count` distinct `k`-combinations from the candidate set.
///
/// Sets smaller than [`MIN_SAMPLE_CANDIDATES`] are unavailable. Sampled
/// combinations are returned in combination-space order.
pub fn sample<R: Rng + ?Sized>(
    set: &CandidateSet,
    k: usize,
    count: usize,
    rng: &mut R,
) -> Availability<Vec<String>> {
    if set.len() < MIN_SAMPLE_CANDIDATES {
        return Availability::Unavailable(Unavailable::TooFewCandidates {
            have: set.len(),
            need: MIN_SAMPLE_CANDIDATES,
        });
    }

    let space = combinations(set.digits(), k);
    let amount = count.min(space.len());
    let mut picked = rand::seq::index::sample(rng, space.len(), amount).into_vec();
    picked.sort_unstable();

    Availability::Available(picked.into_iter().map(|i| join_digits(&space[i])).collect())
}

/// Sampled triples and quadruples for one candidate set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopSets {
    pub triples: Availability<Vec<String>>,
    pub quads: Availability<Vec<String>>,
}

/// Sample both triples and quadruples from the same random source.
pub fn top_sets<R: Rng + ?Sized>(set: &CandidateSet, count: usize, rng: &mut R) -> TopSets {
    TopSets {
        triples: sample(set, 3, count, rng),
        quads: sample(set, 4, count, rng),
    }
}
