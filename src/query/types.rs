use crate::analysis::keypad::is_digit;
use crate::core::error::{Error, ErrorKind, Result};
use crate::core::types::check_width;
use crate::query::matcher::MatchStrategy;

/// How query characters are compared against a name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKind {
    Digits,  // Keys pressed on the keypad
    Text,    // Literal, case-insensitive text
}

/// Validated search text.
///
/// An empty query matches every record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    text: String,
    kind: QueryKind,
}

impl Query {
    /// Keypad query; every character must be a decimal digit
    pub fn digits(text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        check_width("query", &text)?;
        if let Some(c) = text.chars().find(|c| !c.is_ascii() || !is_digit(*c as u8)) {
            return Err(Error::new(
                ErrorKind::InvalidArgument,
                format!("query {:?} is not a number (found {:?})", text, c),
            ));
        }
        Ok(Query { text, kind: QueryKind::Digits })
    }

    /// Literal text query
    pub fn text(text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        check_width("query", &text)?;
        Ok(Query { text, kind: QueryKind::Text })
    }

    /// Query given on the command line. Unlike the engine, the command line
    /// does not accept an empty query: leaving the argument out is how to
    /// list every record. Every rejection is an `InvalidArgument`.
    pub fn from_argument(argument: &str, text_mode: bool) -> Result<Self> {
        if argument.is_empty() {
            return Err(Error::new(
                ErrorKind::InvalidArgument,
                "query must not be empty".to_string(),
            ));
        }
        let query = if text_mode {
            Query::text(argument)
        } else {
            Query::digits(argument)
        };
        query.map_err(|e| match e.kind {
            ErrorKind::LineTooLong => Error::new(ErrorKind::InvalidArgument, e.context),
            _ => e,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn kind(&self) -> QueryKind {
        self.kind
    }

    /// Comparison applied to the name field. Numbers are always compared
    /// literally.
    pub fn name_strategy(&self) -> MatchStrategy {
        match self.kind {
            QueryKind::Digits => MatchStrategy::Keypad,
            QueryKind::Text => MatchStrategy::Literal,
        }
    }
}

/// Optional command line switches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchFlags {
    /// Match query characters in order, not necessarily adjacent
    pub extended_search: bool,
    /// Diagnostic output only, never changes results
    pub verbose: bool,
}
