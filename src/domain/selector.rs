//! Candidate digit selection.
//!
//! The selector combines three signals taken from a [`ResultHistory`]:
//!
//! 1. **Weighted frequency** - occurrences in the recent window count
//!    `recent_weight`, occurrences in the older window count `older_weight`.
//!    Digits rank by weight descending, ties by digit ascending.
//! 2. **Gap detection** - the first index at which each digit appears;
//!    digits whose gap falls inside `[gap_min, gap_max]` are "due".
//! 3. **Transform seeds** - configured substitution tables applied to
//!    positions of the most recent result.
//!
//! Seeds merge in that precedence order, deduplicated, then the set is
//! padded with ascending digits up to the floor and truncated to the cap.
//! An empty history skips every signal and yields pure padding, marked
//! [`SelectionBasis::NoData`].

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::candidate::{CandidateSet, SelectionBasis, SizeBounds};
use super::digit::Digit;
use super::draw::{Position, ResultHistory};
use super::error::DomainError;
use super::transform::SubstitutionTable;

/// Apply `table` to the digit at `position` of the most recent result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct TransformSeed {
    pub table: SubstitutionTable,
    pub position: Position,
}

impl TransformSeed {
    /// Create a seed rule.
    #[must_use]
    pub const fn new(table: SubstitutionTable, position: Position) -> Self {
        Self { table, position }
    }
}

impl std::fmt::Display for TransformSeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.table, self.position)
    }
}

/// Tunable parameters for candidate selection.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SelectorConfig {
    /// Number of most recent draws in the heavily weighted window.
    #[serde(default = "default_recent_window")]
    pub recent_window: usize,

    /// Number of draws after the recent window in the lightly weighted window.
    #[serde(default = "default_older_window")]
    pub older_window: usize,

    /// Weight per digit occurrence in the recent window.
    #[serde(default = "default_recent_weight")]
    pub recent_weight: u32,

    /// Weight per digit occurrence in the older window.
    #[serde(default = "default_older_weight")]
    pub older_weight: u32,

    /// How many top-weighted digits become frequency seeds.
    #[serde(default = "default_hot_count")]
    pub hot_count: usize,

    /// Smallest first-occurrence index counted as "due".
    #[serde(default = "default_gap_min")]
    pub gap_min: usize,

    /// Largest first-occurrence index counted as "due".
    #[serde(default = "default_gap_max")]
    pub gap_max: usize,

    /// Candidate set floor.
    #[serde(default = "default_min_size")]
    pub min_size: usize,

    /// Candidate set cap.
    #[serde(default = "default_max_size")]
    pub max_size: usize,

    /// Transform seed rules used when a market does not override them.
    #[serde(default = "default_seeds")]
    pub seeds: Vec<TransformSeed>,
}

const fn default_recent_window() -> usize {
    10
}

const fn default_older_window() -> usize {
    30
}

const fn default_recent_weight() -> u32 {
    3
}

const fn default_older_weight() -> u32 {
    1
}

const fn default_hot_count() -> usize {
    4
}

const fn default_gap_min() -> usize {
    3
}

const fn default_gap_max() -> usize {
    5
}

const fn default_min_size() -> usize {
    5
}

const fn default_max_size() -> usize {
    6
}

fn default_seeds() -> Vec<TransformSeed> {
    vec![TransformSeed::new(SubstitutionTable::Taysen, Position::Tail)]
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            recent_window: default_recent_window(),
            older_window: default_older_window(),
            recent_weight: default_recent_weight(),
            older_weight: default_older_weight(),
            hot_count: default_hot_count(),
            gap_min: default_gap_min(),
            gap_max: default_gap_max(),
            min_size: default_min_size(),
            max_size: default_max_size(),
            seeds: default_seeds(),
        }
    }
}

impl SelectorConfig {
    /// Candidate size bounds described by this config.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidSizeBounds`] for an unsatisfiable interval.
    pub fn bounds(&self) -> Result<SizeBounds, DomainError> {
        SizeBounds::try_new(self.min_size, self.max_size)
    }

    /// Total number of draws the frequency and gap signals look at.
    #[must_use]
    pub const fn scan_depth(&self) -> usize {
        self.recent_window + self.older_window
    }
}

/// Per-digit weighted occurrence totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DigitWeights([u32; 10]);

impl DigitWeights {
    /// Weigh digit occurrences in the recent and older windows.
    ///
    /// Totals saturate at `u32::MAX` instead of wrapping.
    #[must_use]
    pub fn compute(history: &ResultHistory, config: &SelectorConfig) -> Self {
        let mut weights = [0u32; 10];
        let recent = history.window(0, config.recent_window);
        let older = history.window(config.recent_window, config.older_window);

        for result in recent {
            for d in result.digits() {
                weights[d.index()] = weights[d.index()].saturating_add(config.recent_weight);
            }
        }
        for result in older {
            for d in result.digits() {
                weights[d.index()] = weights[d.index()].saturating_add(config.older_weight);
            }
        }
        Self(weights)
    }

    /// Weight of a digit.
    #[must_use]
    pub const fn weight(&self, digit: Digit) -> u32 {
        self.0[digit.index()]
    }

    /// Digits with non-zero weight, heaviest first, ties by digit ascending.
    #[must_use]
    pub fn ranked(&self) -> Vec<(Digit, u32)> {
        let mut ranked: Vec<(Digit, u32)> = Digit::ALL
            .into_iter()
            .map(|d| (d, self.weight(d)))
            .filter(|(_, w)| *w > 0)
            .collect();
        ranked.sort_by(|(da, wa), (db, wb)| wb.cmp(wa).then(da.cmp(db)));
        ranked
    }
}

/// First-occurrence index of each digit, scanning from the most recent draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GapMap([Option<usize>; 10]);

impl GapMap {
    /// Sentinel gap reported for digits never seen in the scanned window.
    pub const UNSEEN: usize = usize::MAX;

    /// Scan the first `depth` draws of `history`.
    #[must_use]
    pub fn compute(history: &ResultHistory, depth: usize) -> Self {
        let mut first_seen = [None; 10];
        for (idx, result) in history.window(0, depth).enumerate() {
            for d in result.digits() {
                first_seen[d.index()].get_or_insert(idx);
            }
        }
        Self(first_seen)
    }

    /// Index of the first draw containing `digit`, or [`GapMap::UNSEEN`].
    #[must_use]
    pub fn gap(&self, digit: Digit) -> usize {
        self.0[digit.index()].unwrap_or(Self::UNSEEN)
    }

    /// Digits whose gap lies in `[min, max]`, ascending.
    #[must_use]
    pub fn due(&self, min: usize, max: usize) -> Vec<Digit> {
        Digit::ALL
            .into_iter()
            .filter(|d| (min..=max).contains(&self.gap(*d)))
            .collect()
    }
}

/// The seeds each signal contributed, before merging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Signals {
    pub hot: Vec<Digit>,
    pub due: Vec<Digit>,
    pub seeded: Vec<Digit>,
}

/// Outcome of a selection run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub candidates: CandidateSet,
    pub basis: SelectionBasis,
    pub signals: Signals,
}

/// Produces bounded candidate sets from result histories.
#[derive(Debug, Clone)]
pub struct CandidateSelector {
    config: SelectorConfig,
    bounds: SizeBounds,
}

impl CandidateSelector {
    /// Create a selector, validating the size bounds.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidSizeBounds`] for an unsatisfiable interval.
    pub fn new(config: SelectorConfig) -> Result<Self, DomainError> {
        let bounds = config.bounds()?;
        Ok(Self { config, bounds })
    }

    /// Get the selector configuration.
    #[must_use]
    pub const fn config(&self) -> &SelectorConfig {
        &self.config
    }

    /// Select using the configured transform seeds.
    #[must_use]
    pub fn select(&self, history: &ResultHistory) -> Selection {
        self.select_with_seeds(history, &self.config.seeds)
    }

    /// Select using explicit transform seed rules.
    #[must_use]
    pub fn select_with_seeds(&self, history: &ResultHistory, seeds: &[TransformSeed]) -> Selection {
        let Some(latest) = history.latest() else {
            return Selection {
                candidates: CandidateSet::from_seeds(std::iter::empty(), self.bounds),
                basis: SelectionBasis::NoData,
                signals: Signals::default(),
            };
        };

        let hot: Vec<Digit> = DigitWeights::compute(history, &self.config)
            .ranked()
            .into_iter()
            .take(self.config.hot_count)
            .map(|(d, _)| d)
            .collect();

        let due = GapMap::compute(history, self.config.scan_depth())
            .due(self.config.gap_min, self.config.gap_max);

        let seeded: Vec<Digit> = seeds
            .iter()
            .map(|s| s.table.apply(latest.at(s.position)))
            .collect();

        debug!(
            latest = %latest,
            hot = ?hot,
            due = ?due,
            seeded = ?seeded,
            "Selection signals"
        );

        let candidates = CandidateSet::from_seeds(
            [hot.as_slice(), due.as_slice(), seeded.as_slice()],
            self.bounds,
        );

        Selection {
            candidates,
            basis: SelectionBasis::Statistical,
            signals: Signals { hot, due, seeded },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::domain::history;

    fn rendered(digits: &[Digit]) -> String {
        crate::domain::digit::join_digits(digits)
    }

    fn selector() -> CandidateSelector {
        CandidateSelector::new(SelectorConfig::default()).unwrap()
    }

    #[test]
    fn weights_apply_window_multipliers() {
        let mut draws = vec!["1234", "1234"];
        draws.extend(["5555"; 8]);
        draws.push("9012");
        let weights = DigitWeights::compute(&history(&draws), &SelectorConfig::default());
        let d = |v: u8| Digit::try_from(v).unwrap();

        assert_eq!(weights.weight(d(1)), 6 + 1);
        assert_eq!(weights.weight(d(3)), 6);
        assert_eq!(weights.weight(d(5)), 8 * 4 * 3);
        assert_eq!(weights.weight(d(9)), 1);
        assert_eq!(weights.weight(d(7)), 0);
    }

    #[test]
    fn ranked_breaks_ties_by_ascending_digit() {
        let weights = DigitWeights::compute(&history(&["4321"]), &SelectorConfig::default());
        let order: Vec<u8> = weights.ranked().iter().map(|(d, _)| d.value()).collect();
        assert_eq!(order, vec![1, 2, 3, 4]);
    }

    #[test]
    fn recent_digits_outrank_older_singletons() {
        let mut draws = vec!["1234", "1234", "5678", "9012"];
        draws.extend(["1234"; 6]);
        // 5 shows up once past the recent window, on top of its recent hit.
        draws.push("1235");
        draws.extend(["1234"; 4]);
        let history = history(&draws);

        let weights = DigitWeights::compute(&history, &SelectorConfig::default());
        let w = |v: u8| weights.weight(Digit::try_from(v).unwrap());
        assert_eq!(w(5), 3 + 1);
        for digit in [0, 6, 7, 8, 9] {
            assert_eq!(w(digit), 3);
        }

        let selection = selector().select(&history);
        assert_eq!(rendered(&selection.signals.hot), "1234");
        assert_eq!(rendered(&selection.signals.due), "09");
        assert_eq!(rendered(&selection.signals.seeded), "1");
        assert_eq!(selection.candidates.to_string(), "123409");
        assert!(!selection.candidates.contains(Digit::try_from(5).unwrap()));
    }

    #[test]
    fn older_singleton_trails_recent_digits_when_room_allows() {
        let mut draws = vec!["1234", "1234", "5678", "9012"];
        draws.extend(["1234"; 6]);
        draws.push("1235");
        let config = SelectorConfig {
            hot_count: 5,
            max_size: 8,
            ..SelectorConfig::default()
        };
        let selection = CandidateSelector::new(config).unwrap().select(&history(&draws));

        assert_eq!(rendered(&selection.signals.hot), "12345");
        assert_eq!(selection.candidates.to_string(), "1234509");
    }

    #[test]
    fn oversized_weights_saturate_instead_of_overflowing() {
        let config = SelectorConfig {
            recent_weight: 200_000_000,
            ..SelectorConfig::default()
        };
        let history = history(&["1111"; 11]);

        let weights = DigitWeights::compute(&history, &config);
        assert_eq!(weights.weight(Digit::try_from(1).unwrap()), u32::MAX);

        let selection = CandidateSelector::new(config).unwrap().select(&history);
        assert_eq!(selection.candidates.to_string(), "14023");
    }

    #[test]
    fn gap_map_records_first_occurrence() {
        let gaps = GapMap::compute(&history(&["1111", "2222", "3333", "1234"]), 40);
        let d = |v: u8| Digit::try_from(v).unwrap();

        assert_eq!(gaps.gap(d(1)), 0);
        assert_eq!(gaps.gap(d(2)), 1);
        assert_eq!(gaps.gap(d(4)), 3);
        assert_eq!(gaps.gap(d(9)), GapMap::UNSEEN);
        assert_eq!(rendered(&gaps.due(3, 5)), "4");
    }

    #[test]
    fn gap_scan_respects_depth() {
        let gaps = GapMap::compute(&history(&["1111", "2222", "3333"]), 2);
        assert_eq!(gaps.gap(Digit::try_from(3u8).unwrap()), GapMap::UNSEEN);
    }

    #[test]
    fn empty_history_yields_floor_padding() {
        let selection = selector().select(&ResultHistory::new());
        assert_eq!(selection.basis, SelectionBasis::NoData);
        assert_eq!(selection.candidates.to_string(), "01234");
        assert_eq!(selection.signals, Signals::default());
    }

    #[test]
    fn transform_seeds_use_latest_result() {
        let seeds = [
            TransformSeed::new(SubstitutionTable::Taysen, Position::Tail),
            TransformSeed::new(SubstitutionTable::MistikBaru, Position::Head),
        ];
        let selection = selector().select_with_seeds(&history(&["1234", "5678"]), &seeds);
        // taysen(4) = 1, mistik_baru(3) = 9
        assert_eq!(rendered(&selection.signals.seeded), "19");
    }

    #[test]
    fn merge_order_is_hot_then_due_then_seeded() {
        let config = SelectorConfig {
            hot_count: 2,
            gap_min: 1,
            gap_max: 1,
            min_size: 1,
            max_size: 10,
            seeds: vec![TransformSeed::new(SubstitutionTable::Index, Position::First)],
            ..SelectorConfig::default()
        };
        let selector = CandidateSelector::new(config).unwrap();
        let selection = selector.select(&history(&["1122", "3344"]));

        assert_eq!(rendered(&selection.signals.hot), "12");
        assert_eq!(rendered(&selection.signals.due), "34");
        assert_eq!(rendered(&selection.signals.seeded), "6");
        assert_eq!(selection.candidates.to_string(), "12346");
    }

    #[test]
    fn candidate_bounds_hold_for_varied_histories() {
        let config = SelectorConfig {
            min_size: 5,
            max_size: 7,
            ..SelectorConfig::default()
        };
        let selector = CandidateSelector::new(config).unwrap();
        let cases: Vec<Vec<&str>> = vec![
            vec![],
            vec!["0000"],
            vec!["1111"; 50],
            vec!["0123", "4567", "8901", "2345", "6789", "0246", "1357", "9999"],
        ];

        for draws in cases {
            let selection = selector.select(&history(&draws));
            let len = selection.candidates.len();
            assert!((5..=7).contains(&len), "size {len} for {draws:?}");
            assert!(CandidateSet::try_new(selection.candidates.digits().to_vec()).is_ok());
        }
    }

    #[test]
    fn selector_rejects_bad_bounds() {
        let config = SelectorConfig {
            min_size: 7,
            max_size: 5,
            ..SelectorConfig::default()
        };
        assert!(CandidateSelector::new(config).is_err());
    }

    #[test]
    fn transform_seed_display() {
        let seed = TransformSeed::new(SubstitutionTable::Taysen, Position::Tail);
        assert_eq!(seed.to_string(), "taysen@tail");
    }
}
