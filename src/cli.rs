use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use crate::analysis::keypad::to_keypad_digits;
use crate::core::config::{check_capacity, Config};
use crate::core::error::{Error, Result};
use crate::core::types::DEFAULT_CAPACITY;
use crate::query::types::{Query, SearchFlags};
use crate::reader::line_parser::LineParser;
use crate::search::executor::QueryExecutor;
use crate::writer::printer::{OutputFormat, ResultPrinter};

/// Search a contact directory the way a phone keypad does.
///
/// The directory is read from standard input (or --input) as alternating
/// name and number lines.
#[derive(Debug, Parser)]
#[command(name = "tnine", author, version, about, long_about = None)]
pub struct Cli {
    /// Digits typed on the keypad; leave out to list every contact
    pub query: Option<String>,

    /// Extended search: query characters may be separated by other characters
    #[arg(short = 's', long = "search")]
    pub extended_search: bool,

    /// Treat the query as literal text instead of keypad digits
    #[arg(long)]
    pub text: bool,

    /// Read the directory from a file instead of standard input
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Maximum number of contacts (at most 256)
    #[arg(long, default_value_t = DEFAULT_CAPACITY, env = "TNINE_CAPACITY", value_parser = parse_capacity)]
    pub capacity: usize,

    /// Ignore contacts beyond the capacity instead of failing
    #[arg(long)]
    pub truncate: bool,

    /// Log parsing and matching details to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

fn parse_capacity(value: &str) -> std::result::Result<usize, String> {
    let capacity: usize = value.parse().map_err(|e| format!("{}", e))?;
    check_capacity(capacity).map_err(|e| e.context)?;
    Ok(capacity)
}

impl Cli {
    pub fn config(&self) -> Result<Config> {
        let config = Config {
            capacity: self.capacity,
            truncate_at_capacity: self.truncate,
            flags: SearchFlags {
                extended_search: self.extended_search,
                verbose: self.verbose,
            },
            output_format: self.format,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn query(&self) -> Result<Option<Query>> {
        self.query
            .as_deref()
            .map(|argument| Query::from_argument(argument, self.text))
            .transpose()
    }
}

/// Install the stderr log subscriber. `RUST_LOG` overrides the default level.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

/// Parse the directory from `input`, search it and print the matches to `output`
pub fn search<R: BufRead, W: Write>(
    config: &Config,
    query: Option<&Query>,
    input: R,
    output: &mut W,
) -> Result<()> {
    let directory = LineParser::new(config).parse(input)?;

    if config.flags.verbose {
        for (index, record) in directory.iter() {
            debug!(
                index,
                name = record.name(),
                number = record.number(),
                keypad = %to_keypad_digits(record.name()),
                "parsed record"
            );
        }
    }

    let view = QueryExecutor::new(&directory).execute(query, &config.flags);
    ResultPrinter::new(config.output_format).print(output, &view, &directory)?;
    output.flush()?;
    Ok(())
}

fn open_input(path: Option<&PathBuf>) -> Result<Box<dyn BufRead>> {
    match path {
        Some(path) => {
            let file = File::open(path).map_err(|e| {
                let err = Error::from(e);
                Error::new(err.kind, format!("{}: {}", path.display(), err.context))
            })?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => Ok(Box::new(io::stdin().lock())),
    }
}

/// Run the command line tool; arguments are validated before any input is read
pub fn run(cli: &Cli) -> Result<()> {
    let query = cli.query()?;
    let config = cli.config()?;
    let input = open_input(cli.input.as_ref())?;

    let stdout = io::stdout();
    let mut output = BufWriter::new(stdout.lock());
    search(&config, query.as_ref(), input, &mut output)
}
