//! Draw results and the per-request result history.
//!
//! - [`DrawResult`] - one published four-digit outcome
//! - [`DrawRecord`] - a result plus the row label it was published under
//! - [`ResultHistory`] - ordered records, index 0 = most recent
//! - [`normalize_cell`] - raw table cell text to a validated result

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};

use super::digit::Digit;
use super::error::DomainError;

/// Number of digits in a draw result.
pub const RESULT_LEN: usize = 4;

/// A named character position within a [`DrawResult`].
///
/// Names are conventional only: `first` and `second` precede the `head`
/// (third) and `tail` (fourth) positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    First,
    Second,
    #[serde(alias = "third")]
    Head,
    #[serde(alias = "fourth")]
    Tail,
}

impl Position {
    /// Zero-based index into the result string.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
            Self::Head => 2,
            Self::Tail => 3,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::First => "first",
            Self::Second => "second",
            Self::Head => "head",
            Self::Tail => "tail",
        };
        f.write_str(name)
    }
}

impl FromStr for Position {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "first" => Ok(Self::First),
            "second" => Ok(Self::Second),
            "head" | "third" => Ok(Self::Head),
            "tail" | "fourth" => Ok(Self::Tail),
            _ => Err(DomainError::UnknownPosition { name: s.to_string() }),
        }
    }
}

/// Exactly four ASCII digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DrawResult([Digit; RESULT_LEN]);

impl DrawResult {
    /// Build a result from a string of exactly four ASCII digits.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidDrawResult`] for any other input.
    pub fn try_new(value: &str) -> Result<Self, DomainError> {
        let invalid = || DomainError::InvalidDrawResult { value: value.to_string() };

        if value.len() != RESULT_LEN || !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let mut digits = [Digit::ALL[0]; RESULT_LEN];
        for (slot, c) in digits.iter_mut().zip(value.chars()) {
            *slot = Digit::try_from(c).map_err(|_| invalid())?;
        }
        Ok(Self(digits))
    }

    /// The four digits in published order.
    #[must_use]
    pub const fn digits(&self) -> &[Digit; RESULT_LEN] {
        &self.0
    }

    /// Digit at a named position.
    #[must_use]
    pub const fn at(&self, position: Position) -> Digit {
        self.0[position.index()]
    }
}

impl fmt::Display for DrawResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in &self.0 {
            write!(f, "{d}")?;
        }
        Ok(())
    }
}

impl FromStr for DrawResult {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_new(s)
    }
}

impl Serialize for DrawResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Reduce a raw table cell to a draw result.
///
/// Every non-digit character is stripped; the remainder is kept only when
/// exactly four digits survive (`"12a34"` becomes `1234`, `"123"` is dropped).
#[must_use]
pub fn normalize_cell(raw: &str) -> Option<DrawResult> {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    DrawResult::try_new(&digits).ok()
}

/// A draw result together with the row label (usually the date cell).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawRecord {
    result: DrawResult,
    label: Option<String>,
}

impl DrawRecord {
    /// Create a record.
    pub fn new(result: DrawResult, label: Option<String>) -> Self {
        Self { result, label }
    }

    /// The draw result.
    #[must_use]
    pub const fn result(&self) -> &DrawResult {
        &self.result
    }

    /// The row label, if the source provided one.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

impl From<DrawResult> for DrawRecord {
    fn from(result: DrawResult) -> Self {
        Self::new(result, None)
    }
}

/// Ordered draw records, most recent first.
///
/// Built fresh for every analysis request and never mutated afterwards
/// except through [`ResultHistory::push`] while an adapter is collecting rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultHistory {
    records: Vec<DrawRecord>,
}

impl ResultHistory {
    /// Create an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a history from raw cell values, dropping any that fail normalization.
    pub fn from_raw<'a>(cells: impl IntoIterator<Item = &'a str>) -> Self {
        cells
            .into_iter()
            .filter_map(normalize_cell)
            .map(DrawRecord::from)
            .collect()
    }

    /// Append a record at the oldest end.
    pub fn push(&mut self, record: DrawRecord) {
        self.records.push(record);
    }

    /// Keep only the first `max` records.
    pub fn truncate(&mut self, max: usize) {
        self.records.truncate(max);
    }

    /// The most recent result.
    #[must_use]
    pub fn latest(&self) -> Option<&DrawResult> {
        self.records.first().map(DrawRecord::result)
    }

    /// All records, most recent first.
    #[must_use]
    pub fn records(&self) -> &[DrawRecord] {
        &self.records
    }

    /// All results, most recent first.
    pub fn results(&self) -> impl Iterator<Item = &DrawResult> + '_ {
        self.records.iter().map(DrawRecord::result)
    }

    /// Results in `[start, start + len)`, clamped to the history length.
    pub fn window(&self, start: usize, len: usize) -> impl Iterator<Item = &DrawResult> + '_ {
        self.records.iter().skip(start).take(len).map(DrawRecord::result)
    }

    /// Records whose label contains `needle`, compared case-insensitively.
    ///
    /// Records without a label never match.
    #[must_use]
    pub fn with_label_containing(&self, needle: &str) -> Self {
        let needle = needle.to_lowercase();
        self.records
            .iter()
            .filter(|r| {
                r.label()
                    .is_some_and(|label| label.to_lowercase().contains(&needle))
            })
            .cloned()
            .collect()
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the history is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<DrawRecord> for ResultHistory {
    fn from_iter<I: IntoIterator<Item = DrawRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl FromIterator<DrawResult> for ResultHistory {
    fn from_iter<I: IntoIterator<Item = DrawResult>>(iter: I) -> Self {
        iter.into_iter().map(DrawRecord::from).collect()
    }
}
