use std::io::Write;
use clap::ValueEnum;
use crate::core::error::Result;
use crate::core::types::Record;
use crate::search::results::ResultView;
use crate::storage::directory::Directory;

/// Printed in text mode when nothing matched
pub const NOT_FOUND: &str = "Not found";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `name, number` per line
    #[default]
    Text,
    /// JSON array of `{"name", "number"}` objects
    Json,
}

/// Writes the records selected by a result view
pub struct ResultPrinter {
    pub format: OutputFormat,
}

impl ResultPrinter {
    pub fn new(format: OutputFormat) -> Self {
        ResultPrinter { format }
    }

    pub fn print<W: Write>(&self, out: &mut W, view: &ResultView, directory: &Directory) -> Result<()> {
        match self.format {
            OutputFormat::Text => self.print_text(out, view, directory),
            OutputFormat::Json => self.print_json(out, view, directory),
        }
    }

    fn print_text<W: Write>(&self, out: &mut W, view: &ResultView, directory: &Directory) -> Result<()> {
        if view.is_empty() {
            writeln!(out, "{}", NOT_FOUND)?;
            return Ok(());
        }
        for record in view.records(directory) {
            writeln!(out, "{}, {}", record.name(), record.number())?;
        }
        Ok(())
    }

    fn print_json<W: Write>(&self, out: &mut W, view: &ResultView, directory: &Directory) -> Result<()> {
        let records: Vec<&Record> = view.records(directory).collect();
        serde_json::to_writer_pretty(&mut *out, &records)?;
        writeln!(out)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Directory {
        let mut dir = Directory::with_capacity(4);
        for (name, number) in [("Alice", "2541"), ("Bob", "9102"), ("Cab", "555")] {
            dir.append(Record::new(name, number).unwrap()).unwrap();
        }
        dir
    }

    fn render(format: OutputFormat, view: &ResultView, dir: &Directory) -> String {
        let mut out = Vec::new();
        ResultPrinter::new(format).print(&mut out, view, dir).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_text_lines_in_view_order() {
        let dir = sample();
        let mut view = ResultView::with_capacity(dir.capacity());
        view.push(0).unwrap();
        view.push(2).unwrap();
        assert_eq!(render(OutputFormat::Text, &view, &dir), "Alice, 2541\nCab, 555\n");
    }

    #[test]
    fn test_text_not_found() {
        let dir = Directory::with_capacity(1);
        let view = ResultView::all(&dir);
        assert_eq!(render(OutputFormat::Text, &view, &dir), "Not found\n");
    }

    #[test]
    fn test_json_output() {
        let dir = sample();
        let mut view = ResultView::with_capacity(dir.capacity());
        view.push(1).unwrap();
        let json = render(OutputFormat::Json, &view, &dir);
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, serde_json::json!([{"name": "Bob", "number": "9102"}]));
    }

    #[test]
    fn test_json_empty_is_empty_array() {
        let dir = sample();
        let view = ResultView::with_capacity(dir.capacity());
        let json = render(OutputFormat::Json, &view, &dir);
        assert_eq!(json.trim(), "[]");
    }
}
