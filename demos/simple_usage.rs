/// tnine library walkthrough
///
/// Loads a small directory, then runs a keypad query, an extended search
/// and a listing without a query.

use tnine::core::config::Config;
use tnine::query::types::{Query, SearchFlags};
use tnine::reader::line_parser::LineParser;
use tnine::search::executor::QueryExecutor;
use tnine::writer::printer::{OutputFormat, ResultPrinter};

const CONTACTS: &str = "\
Petr Dvorak
603123456
Jana Novotna
777987654
Bedrich Smetana ml.
541141120
";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let directory = LineParser::new(&Config::default()).parse(CONTACTS.as_bytes())?;
    let executor = QueryExecutor::new(&directory);
    let printer = ResultPrinter::new(OutputFormat::Text);
    let mut stdout = std::io::stdout();

    println!("Keypad search for 686 (\"nov\"):");
    let query = Query::digits("686")?;
    let view = executor.execute(Some(&query), &SearchFlags::default());
    printer.print(&mut stdout, &view, &directory)?;

    println!("\nExtended search for 7383:");
    let flags = SearchFlags { extended_search: true, verbose: false };
    let query = Query::digits("7383")?;
    let view = executor.execute(Some(&query), &flags);
    printer.print(&mut stdout, &view, &directory)?;

    println!("\nEvery contact:");
    let view = executor.execute(None, &SearchFlags::default());
    printer.print(&mut stdout, &view, &directory)?;

    Ok(())
}
