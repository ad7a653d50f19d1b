use crate::core::error::{Error, ErrorKind, Result};
use crate::core::types::{DEFAULT_CAPACITY, MAX_CAPACITY};
use crate::query::types::SearchFlags;
use crate::writer::printer::OutputFormat;

#[derive(Debug, Clone)]
pub struct Config {
    pub capacity: usize,                // Maximum number of records in the directory, at most MAX_CAPACITY
    pub truncate_at_capacity: bool,     // Stop reading at capacity instead of failing
    pub flags: SearchFlags,             // Search mode and diagnostics
    pub output_format: OutputFormat,
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        check_capacity(self.capacity)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            capacity: DEFAULT_CAPACITY,
            truncate_at_capacity: false,
            flags: SearchFlags::default(),
            output_format: OutputFormat::Text,
        }
    }
}

/// Reject a directory capacity above `MAX_CAPACITY`
pub fn check_capacity(capacity: usize) -> Result<()> {
    if capacity > MAX_CAPACITY {
        return Err(Error::new(
            ErrorKind::InvalidArgument,
            format!("capacity {} is above the limit of {}", capacity, MAX_CAPACITY),
        ));
    }
    Ok(())
}
