use std::io::{BufRead, Read};
use tracing::{debug, warn};
use crate::core::config::{check_capacity, Config};
use crate::core::error::{Error, ErrorKind, Result};
use crate::core::types::{Record, MAX_LINE_WIDTH};
use crate::storage::directory::Directory;

/// Bytes read per line at most: the widest line, `\r\n`, and one byte more
/// to tell an oversized line apart from a terminated one
const LINE_READ_LIMIT: u64 = (MAX_LINE_WIDTH + 3) as u64;

/// Reads a directory from alternating name and number lines.
///
/// The whole input is validated before the directory is handed out, so a
/// caller never matches against a partially valid directory.
pub struct LineParser {
    pub capacity: usize,
    pub truncate_at_capacity: bool,
}

impl LineParser {
    pub fn new(config: &Config) -> Self {
        LineParser {
            capacity: config.capacity,
            truncate_at_capacity: config.truncate_at_capacity,
        }
    }

    pub fn parse<R: BufRead>(&self, reader: R) -> Result<Directory> {
        check_capacity(self.capacity)?;

        let mut directory = Directory::with_capacity(self.capacity);
        let mut lines = NumberedLines::new(reader);

        while let Some((name_line, name)) = lines.next_line()? {
            let (number_line, number) = match lines.next_line()? {
                Some(line) => line,
                // Blank last line, e.g. a stray newline at the end of the file
                None if name.is_empty() => break,
                None => {
                    return Err(Error::new(
                        ErrorKind::MalformedRecord,
                        format!("name {:?} has no number line", name),
                    )
                    .at_line(name_line));
                }
            };

            if directory.is_full() {
                if self.truncate_at_capacity {
                    warn!(
                        capacity = self.capacity,
                        line = name_line,
                        "directory is full, ignoring the rest of the input"
                    );
                    break;
                }
                return Err(Error::new(
                    ErrorKind::CapacityExceeded,
                    format!("more than {} records in the input", self.capacity),
                )
                .at_line(name_line));
            }

            let record = Record::new(name, number).map_err(|e| e.at_line(number_line))?;
            directory.append(record)?;
        }

        debug!(records = directory.len(), "directory loaded");
        Ok(directory)
    }
}

/// Line reader that tracks 1-based line numbers and enforces the width
/// limit as lines are read. A line is never buffered past `LINE_READ_LIMIT`.
struct NumberedLines<R> {
    reader: R,
    buffer: Vec<u8>,
    line_number: usize,
}

impl<R: BufRead> NumberedLines<R> {
    fn new(reader: R) -> Self {
        NumberedLines {
            reader,
            buffer: Vec::with_capacity(LINE_READ_LIMIT as usize),
            line_number: 0,
        }
    }

    fn next_line(&mut self) -> Result<Option<(usize, String)>> {
        self.buffer.clear();
        let read = self
            .reader
            .by_ref()
            .take(LINE_READ_LIMIT)
            .read_until(b'\n', &mut self.buffer)
            .map_err(|e| Error::from(e).at_line(self.line_number + 1))?;
        if read == 0 {
            return Ok(None);
        }
        self.line_number += 1;

        if self.buffer.last() == Some(&b'\n') {
            self.buffer.pop();
            if self.buffer.last() == Some(&b'\r') {
                self.buffer.pop();
            }
        } else if read as u64 == LINE_READ_LIMIT {
            return Err(Error::new(
                ErrorKind::LineTooLong,
                format!("line is longer than {} bytes", MAX_LINE_WIDTH),
            )
            .at_line(self.line_number));
        }

        if self.buffer.len() > MAX_LINE_WIDTH {
            return Err(Error::new(
                ErrorKind::LineTooLong,
                format!("line is {} bytes long, the limit is {}", self.buffer.len(), MAX_LINE_WIDTH),
            )
            .at_line(self.line_number));
        }

        let line = String::from_utf8(self.buffer.clone()).map_err(|e| {
            Error::new(
                ErrorKind::MalformedRecord,
                format!("invalid UTF-8 at byte {}", e.utf8_error().valid_up_to()),
            )
            .at_line(self.line_number)
        })?;

        Ok(Some((self.line_number, line)))
    }
}
