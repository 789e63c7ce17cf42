//! Secondary hints shown alongside the candidate set.

use super::availability::{Availability, Unavailable};
use super::candidate::CandidateSet;
use super::digit::Digit;
use super::draw::{DrawResult, Position, ResultHistory};
use super::transform::SubstitutionTable;

/// Maximum length of a running digit sequence.
pub const RUNNING_LEN: usize = 5;

/// Running digits derived from the latest result.
///
/// Starts from `|head - tail|`, follows with its `index` and `taysen`
/// images, then the two strongest candidates. Duplicates are dropped across
/// the whole sequence, so a candidate already produced by the difference
/// chain is skipped rather than repeated. The sequence is capped at
/// [`RUNNING_LEN`].
#[must_use]
pub fn running_digits(latest: &DrawResult, candidates: &CandidateSet) -> Vec<Digit> {
    let diff = latest.at(Position::Head).abs_diff(latest.at(Position::Tail));
    let sequence = [
        diff,
        SubstitutionTable::Index.apply(diff),
        SubstitutionTable::Taysen.apply(diff),
    ]
    .into_iter()
    .chain(candidates.digits().iter().take(2).copied());

    let mut out = Vec::with_capacity(RUNNING_LEN);
    for d in sequence {
        if out.len() == RUNNING_LEN {
            break;
        }
        if !out.contains(&d) {
            out.push(d);
        }
    }
    out
}

/// Most frequent digits among draws published on the same weekday.
///
/// `history` is filtered to records whose label contains `weekday`. With
/// fewer than `min_draws` matches the hint is unavailable. Digits rank by
/// occurrence count descending, ties ascending; the first `top` are kept.
#[must_use]
pub fn weekday_digits(
    history: &ResultHistory,
    weekday: &str,
    min_draws: usize,
    top: usize,
) -> Availability<Vec<Digit>> {
    let same_day = history.with_label_containing(weekday);
    if same_day.len() < min_draws.max(1) {
        return Availability::Unavailable(Unavailable::InsufficientHistory {
            have: same_day.len(),
            need: min_draws.max(1),
        });
    }

    let mut counts = [0usize; 10];
    for result in same_day.results() {
        for d in result.digits() {
            counts[d.index()] += 1;
        }
    }

    let mut ranked: Vec<Digit> = Digit::ALL
        .into_iter()
        .filter(|d| counts[d.index()] > 0)
        .collect();
    ranked.sort_by(|a, b| counts[b.index()].cmp(&counts[a.index()]).then(a.cmp(b)));
    ranked.truncate(top);

    Availability::Available(ranked)
}
