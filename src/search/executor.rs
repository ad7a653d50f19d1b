use std::time::Instant;
use tracing::debug;
use crate::query::matcher::{MatchAlgorithm, RecordMatcher};
use crate::query::types::{Query, SearchFlags};
use crate::search::results::ResultView;
use crate::storage::directory::Directory;

/// Execute queries against a loaded directory
pub struct QueryExecutor<'d> {
    directory: &'d Directory,
}

impl<'d> QueryExecutor<'d> {
    pub fn new(directory: &'d Directory) -> Self {
        QueryExecutor { directory }
    }

    /// Algorithm used for a query under `flags`
    pub fn algorithm(flags: &SearchFlags) -> MatchAlgorithm {
        if flags.extended_search {
            MatchAlgorithm::Sequential
        } else {
            MatchAlgorithm::Anchored
        }
    }

    /// Select records for `query`.
    ///
    /// Without a query every record is returned. Otherwise the extended
    /// search flag picks between subsequence and contiguous matching.
    pub fn execute(&self, query: Option<&Query>, flags: &SearchFlags) -> ResultView {
        let Some(query) = query else {
            debug!(records = self.directory.len(), "no query, listing every record");
            return ResultView::all(self.directory);
        };

        let start = Instant::now();
        let algorithm = Self::algorithm(flags);
        let view = RecordMatcher::new(query, algorithm).scan(self.directory);

        debug!(
            query = query.as_str(),
            kind = ?query.kind(),
            ?algorithm,
            scanned = self.directory.len(),
            matched = view.len(),
            took_us = start.elapsed().as_micros() as u64,
            "match pass finished"
        );

        view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Record;

    fn sample() -> Directory {
        let mut dir = Directory::with_capacity(8);
        for (name, number) in [
            ("Alice", "2541"),
            ("Bob", "9102"),
            ("Cab", "555"),
            ("Dan", "1020304"),
        ] {
            dir.append(Record::new(name, number).unwrap()).unwrap();
        }
        dir
    }

    #[test]
    fn test_no_query_lists_everything() {
        let dir = sample();
        let executor = QueryExecutor::new(&dir);
        let view = executor.execute(None, &SearchFlags::default());
        assert_eq!(view.indices(), &[0, 1, 2, 3]);

        let extended = SearchFlags { extended_search: true, verbose: false };
        assert_eq!(executor.execute(None, &extended).indices(), &[0, 1, 2, 3]);
    }

    #[test]
    fn test_default_mode_is_contiguous() {
        let dir = sample();
        let executor = QueryExecutor::new(&dir);
        let query = Query::digits("1234").unwrap();
        assert!(executor.execute(Some(&query), &SearchFlags::default()).is_empty());
    }

    #[test]
    fn test_extended_mode_is_sequential() {
        let dir = sample();
        let executor = QueryExecutor::new(&dir);
        let query = Query::digits("1234").unwrap();
        let flags = SearchFlags { extended_search: true, verbose: false };
        assert_eq!(executor.execute(Some(&query), &flags).indices(), &[3]);
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let dir = sample();
        let executor = QueryExecutor::new(&dir);
        let query = Query::digits("").unwrap();
        let view = executor.execute(Some(&query), &SearchFlags::default());
        assert_eq!(view, ResultView::all(&dir));
    }

    #[test]
    fn test_verbose_does_not_change_results() {
        let dir = sample();
        let executor = QueryExecutor::new(&dir);
        let query = Query::digits("222").unwrap();
        let quiet = executor.execute(Some(&query), &SearchFlags::default());
        let verbose = executor.execute(
            Some(&query),
            &SearchFlags { extended_search: false, verbose: true },
        );
        assert_eq!(quiet, verbose);
        assert_eq!(quiet.indices(), &[2]);
    }

    #[test]
    fn test_algorithm_selection() {
        assert_eq!(
            QueryExecutor::algorithm(&SearchFlags::default()),
            MatchAlgorithm::Anchored
        );
        assert_eq!(
            QueryExecutor::algorithm(&SearchFlags { extended_search: true, verbose: false }),
            MatchAlgorithm::Sequential
        );
    }
}
