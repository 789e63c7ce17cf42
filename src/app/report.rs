//! Analysis response payload.
//!
//! Everything here is presentational: the report is assembled from values
//! the domain layer already computed and only formats them.

use serde::Serialize;

use crate::domain::combination::TopSets;
use crate::domain::{join_digits, Availability, CandidateSet, Digit, SelectionBasis};

/// Placeholder shown for a value that could not be derived.
pub const UNAVAILABLE: &str = "-";

/// Number of leading candidates grouped into pair hints.
const PAIR_HINT_DIGITS: usize = 6;

/// Head / tail position hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PositionHint {
    pub head: Digit,
    pub tail: Digit,
}

impl PositionHint {
    /// Hint from the two strongest candidates.
    #[must_use]
    pub fn from_candidates(set: &CandidateSet) -> Option<Self> {
        Some(Self {
            head: set.head()?,
            tail: set.tail()?,
        })
    }
}

impl std::fmt::Display for PositionHint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "head {} | tail {}", self.head, self.tail)
    }
}

/// Same-weekday hint for the day the analysis ran.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekdayHint {
    pub day: String,
    pub digits: Availability<String>,
}

/// One analysis response for one market.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisReport {
    pub market: String,
    pub last: Option<String>,
    pub basis: SelectionBasis,
    pub history_len: usize,
    pub fetch_error: Option<String>,
    pub candidates: String,
    pub shadow: String,
    pub running: Option<String>,
    pub pairs: String,
    pub position: Option<PositionHint>,
    pub two_digit_main: Vec<String>,
    pub two_digit_shadow: Vec<String>,
    pub top3_main: String,
    pub top4_main: String,
    pub top3_shadow: String,
    pub top4_shadow: String,
    pub weekday: Option<WeekdayHint>,
}

impl AnalysisReport {
    /// Whether the report was built from fetched results.
    #[must_use]
    pub fn has_data(&self) -> bool {
        self.basis == SelectionBasis::Statistical
    }
}

/// Values the analyzer hands over for formatting.
pub(crate) struct ReportParts<'a> {
    pub market: &'a str,
    pub last: Option<String>,
    pub basis: SelectionBasis,
    pub history_len: usize,
    pub fetch_error: Option<String>,
    pub candidates: &'a CandidateSet,
    pub shadow: &'a CandidateSet,
    pub running: Option<Vec<Digit>>,
    pub two_digit_main: Vec<String>,
    pub two_digit_shadow: Vec<String>,
    pub top_main: TopSets,
    pub top_shadow: TopSets,
    pub weekday: Option<(String, Availability<Vec<Digit>>)>,
}

impl From<ReportParts<'_>> for AnalysisReport {
    fn from(parts: ReportParts<'_>) -> Self {
        Self {
            market: parts.market.to_string(),
            last: parts.last,
            basis: parts.basis,
            history_len: parts.history_len,
            fetch_error: parts.fetch_error,
            candidates: parts.candidates.to_string(),
            shadow: parts.shadow.to_string(),
            running: parts.running.map(|digits| join_digits(&digits)),
            pairs: pair_hint(parts.candidates),
            position: PositionHint::from_candidates(parts.candidates),
            two_digit_main: parts.two_digit_main,
            two_digit_shadow: parts.two_digit_shadow,
            top3_main: top_line(&parts.top_main.triples),
            top4_main: top_line(&parts.top_main.quads),
            top3_shadow: top_line(&parts.top_shadow.triples),
            top4_shadow: top_line(&parts.top_shadow.quads),
            weekday: parts.weekday.map(|(day, digits)| WeekdayHint {
                day,
                digits: digits.map(|d| join_digits(&d)),
            }),
        }
    }
}

/// Leading candidates grouped two by two: `"01, 23, 45"`.
///
/// An odd count leaves the last digit on its own.
#[must_use]
pub fn pair_hint(set: &CandidateSet) -> String {
    let head = &set.digits()[..set.len().min(PAIR_HINT_DIGITS)];
    head.chunks(2)
        .map(|chunk| join_digits(chunk))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Sampled combinations joined for display, or [`UNAVAILABLE`].
#[must_use]
pub fn top_line(sampled: &Availability<Vec<String>>) -> String {
    match sampled {
        Availability::Available(values) if !values.is_empty() => values.join(", "),
        _ => UNAVAILABLE.to_string(),
    }
}
