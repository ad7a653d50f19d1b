use crate::analysis::keypad::{keypad_contains, to_lower};
use crate::core::types::Record;
use crate::query::types::Query;
use crate::search::results::ResultView;
use crate::storage::directory::Directory;

/// Character equivalence used when comparing a query against a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStrategy {
    /// Case-insensitive equality
    Literal,
    /// Field letter is on the key named by the query digit
    Keypad,
}

impl MatchStrategy {
    /// Whether field character `c` satisfies query character `q`
    #[inline]
    pub fn matches(self, c: u8, q: u8) -> bool {
        match self {
            MatchStrategy::Literal => to_lower(c) == to_lower(q),
            MatchStrategy::Keypad => keypad_contains(c, q),
        }
    }

    /// Whether `haystack` starts with `needle`. Running out of haystack
    /// before the needle is exhausted is a mismatch.
    fn is_prefix(self, needle: &[u8], haystack: &[u8]) -> bool {
        let compared = needle
            .iter()
            .zip(haystack)
            .take_while(|&(&q, &c)| self.matches(c, q))
            .count();
        compared == needle.len()
    }

    /// Whether `haystack` contains `needle` as one contiguous block.
    ///
    /// Only offsets whose character satisfies the first needle character are
    /// used as anchors for a full comparison.
    pub fn contains_contiguous(self, haystack: &[u8], needle: &[u8]) -> bool {
        let Some(&first) = needle.first() else {
            return true;
        };
        (0..haystack.len()).any(|j| {
            self.matches(haystack[j], first) && self.is_prefix(needle, &haystack[j..])
        })
    }

    /// Whether `haystack` contains every needle character in order, with
    /// anything in between.
    pub fn contains_sequence(self, haystack: &[u8], needle: &[u8]) -> bool {
        let mut cursor = 0;
        for &c in haystack {
            if cursor >= needle.len() {
                break;
            }
            if self.matches(c, needle[cursor]) {
                cursor += 1;
            }
        }
        cursor >= needle.len()
    }
}

/// How a query must occur inside a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchAlgorithm {
    /// Contiguous substring, found by anchored scan
    Anchored,
    /// In-order subsequence (extended search)
    Sequential,
}

/// Field that caused a record to match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchedField {
    /// Empty query, every record matches
    Any,
    Number,
    Name,
}

/// Record matcher - evaluates one query against directory records
pub struct RecordMatcher<'q> {
    query: &'q Query,
    algorithm: MatchAlgorithm,
}

impl<'q> RecordMatcher<'q> {
    pub fn new(query: &'q Query, algorithm: MatchAlgorithm) -> Self {
        RecordMatcher { query, algorithm }
    }

    /// Check if record matches query
    pub fn matches(&self, record: &Record) -> bool {
        self.matched_field(record).is_some()
    }

    /// Field the query was found in. The number is checked first; when it
    /// matches the name is not examined at all.
    pub fn matched_field(&self, record: &Record) -> Option<MatchedField> {
        if self.query.is_empty() {
            return Some(MatchedField::Any);
        }

        if self.field_matches(record.number(), MatchStrategy::Literal) {
            return Some(MatchedField::Number);
        }

        if self.field_matches(record.name(), self.query.name_strategy()) {
            return Some(MatchedField::Name);
        }

        None
    }

    fn field_matches(&self, field: &str, strategy: MatchStrategy) -> bool {
        let needle = self.query.as_bytes();
        match self.algorithm {
            MatchAlgorithm::Anchored => strategy.contains_contiguous(field.as_bytes(), needle),
            MatchAlgorithm::Sequential => strategy.contains_sequence(field.as_bytes(), needle),
        }
    }

    /// Scan the whole directory; matches are reported in directory order
    pub fn scan(&self, directory: &Directory) -> ResultView {
        if self.query.is_empty() {
            return ResultView::all(directory);
        }
        ResultView::scan(directory, |record| self.matches(record))
    }
}

/// Positions of records whose number or keypad name contains the query as a
/// contiguous block
pub fn anchored_match(query: &Query, directory: &Directory) -> ResultView {
    RecordMatcher::new(query, MatchAlgorithm::Anchored).scan(directory)
}

/// Positions of records whose number or keypad name contains the query
/// characters in order
pub fn sequential_match(query: &Query, directory: &Directory) -> ResultView {
    RecordMatcher::new(query, MatchAlgorithm::Sequential).scan(directory)
}
