use crate::core::error::{Error, ErrorKind, Result};
use crate::core::types::{Record, DEFAULT_CAPACITY, MAX_CAPACITY};

/// Bounded, insertion-ordered collection of records.
///
/// A record is identified by its position. The directory is filled once by
/// the line parser and only read afterwards; there is no removal.
#[derive(Debug, Clone)]
pub struct Directory {
    records: Vec<Record>,
    capacity: usize,
}

impl Directory {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Empty directory holding at most `capacity` records. Storage beyond
    /// `MAX_CAPACITY` records is allocated as records arrive.
    pub fn with_capacity(capacity: usize) -> Self {
        Directory {
            records: Vec::with_capacity(capacity.min(MAX_CAPACITY)),
            capacity,
        }
    }

    /// Add a record at the next position
    pub fn append(&mut self, record: Record) -> Result<()> {
        if self.is_full() {
            return Err(Error::new(
                ErrorKind::CapacityExceeded,
                format!("directory holds at most {} records", self.capacity),
            ));
        }
        self.records.push(record);
        Ok(())
    }

    /// Record at `index`.
    ///
    /// # Panics
    /// If `index >= self.len()`.
    pub fn get(&self, index: usize) -> &Record {
        &self.records[index]
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.records.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Records paired with their positions, in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Record)> {
        self.records.iter().enumerate()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }
}

impl Default for Directory {
    fn default() -> Self {
        Self::new()
    }
}
