//! Random directory generation for manual testing and benchmarks.

use std::io::Write;
use rand::Rng;
use crate::core::error::Result;
use crate::core::types::{Record, MAX_LINE_WIDTH};
use crate::storage::directory::Directory;

/// Mixed-case ASCII letters, `len` of them
pub fn random_name<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| {
            let letter = rng.gen_range(b'a'..=b'z');
            if rng.gen_bool(0.5) {
                letter.to_ascii_uppercase() as char
            } else {
                letter as char
            }
        })
        .collect()
}

pub fn random_number<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    (0..len).map(|_| rng.gen_range(b'0'..=b'9') as char).collect()
}

/// `count` valid records whose fields are 1 to `max_width` bytes long
/// (`max_width` is clamped to the directory line width)
pub fn generate_records<R: Rng + ?Sized>(rng: &mut R, count: usize, max_width: usize) -> Result<Vec<Record>> {
    let max_width = max_width.clamp(1, MAX_LINE_WIDTH);
    (0..count)
        .map(|_| {
            let name_len = rng.gen_range(1..=max_width);
            let number_len = rng.gen_range(1..=max_width);
            Record::new(random_name(rng, name_len), random_number(rng, number_len))
        })
        .collect()
}

/// Directory sized to hold exactly the generated records
pub fn generate_directory<R: Rng + ?Sized>(rng: &mut R, count: usize, max_width: usize) -> Result<Directory> {
    let mut directory = Directory::with_capacity(count);
    for record in generate_records(rng, count, max_width)? {
        directory.append(record)?;
    }
    Ok(directory)
}

/// Write records in the line format the parser reads
pub fn write_records<W: Write>(out: &mut W, records: &[Record]) -> Result<()> {
    for record in records {
        writeln!(out, "{}", record.name())?;
        writeln!(out, "{}", record.number())?;
    }
    Ok(())
}
