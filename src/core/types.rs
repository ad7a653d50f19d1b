use serde::Serialize;
use crate::analysis::keypad::is_digit;
use crate::core::error::{Error, ErrorKind, Result};

/// Maximum number of bytes in a name, number or query line (terminator excluded)
pub const MAX_LINE_WIDTH: usize = 100;

/// Number of records a directory holds unless configured otherwise
pub const DEFAULT_CAPACITY: usize = 100;

/// Largest capacity a directory can be configured with
pub const MAX_CAPACITY: usize = 256;

/// One directory entry.
///
/// Fields are private so that every `Record` in a directory went through
/// [`Record::new`]: both fields fit in `MAX_LINE_WIDTH` and the number is a
/// non-empty run of decimal digits. Matching relies on this and never
/// re-validates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    name: String,
    number: String,
}

impl Record {
    pub fn new(name: impl Into<String>, number: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let number = number.into();

        check_width("name", &name)?;
        check_width("number", &number)?;
        check_number(&number)?;

        Ok(Record { name, number })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn number(&self) -> &str {
        &self.number
    }
}

/// Reject text wider than a directory line
pub fn check_width(field: &str, text: &str) -> Result<()> {
    if text.len() > MAX_LINE_WIDTH {
        return Err(Error::new(
            ErrorKind::LineTooLong,
            format!("{} is {} bytes long, the limit is {}", field, text.len(), MAX_LINE_WIDTH),
        ));
    }
    Ok(())
}

fn check_number(number: &str) -> Result<()> {
    if number.is_empty() {
        return Err(Error::new(
            ErrorKind::MalformedRecord,
            "number is empty".to_string(),
        ));
    }
    if let Some(pos) = number.bytes().position(|c| !is_digit(c)) {
        return Err(Error::new(
            ErrorKind::MalformedRecord,
            format!("number {:?} has a non-digit character at offset {}", number, pos),
        ));
    }
    Ok(())
}
