use crate::core::error::{Error, ErrorKind, Result};
use crate::core::types::{Record, MAX_CAPACITY};
use crate::storage::directory::Directory;

/// Ordered positions of selected directory records.
///
/// The view never copies records; resolve them against the directory it was
/// built from. Positions are unique and strictly increasing, and the view
/// can hold at most as many positions as the directory can hold records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultView {
    indices: Vec<usize>,
    capacity: usize,
}

impl ResultView {
    pub fn with_capacity(capacity: usize) -> Self {
        ResultView {
            indices: Vec::with_capacity(capacity.min(MAX_CAPACITY)),
            capacity,
        }
    }

    /// Every record of the directory, in order
    pub fn all(directory: &Directory) -> Self {
        ResultView {
            indices: (0..directory.len()).collect(),
            capacity: directory.capacity(),
        }
    }

    /// Full scan keeping the records `predicate` accepts
    pub fn scan<F>(directory: &Directory, mut predicate: F) -> Self
    where
        F: FnMut(&Record) -> bool,
    {
        let indices = directory
            .iter()
            .filter(|&(_, record)| predicate(record))
            .map(|(index, _)| index)
            .collect();

        ResultView {
            indices,
            capacity: directory.capacity(),
        }
    }

    /// Append a position after the current last one
    pub fn push(&mut self, index: usize) -> Result<()> {
        if self.indices.len() >= self.capacity {
            return Err(Error::new(
                ErrorKind::CapacityExceeded,
                format!("result view holds at most {} positions", self.capacity),
            ));
        }
        if let Some(&last) = self.indices.last() {
            if index <= last {
                return Err(Error::new(
                    ErrorKind::InvalidArgument,
                    format!("position {} does not follow {}", index, last),
                ));
            }
        }
        self.indices.push(index);
        Ok(())
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Selected records, resolved against `directory`
    pub fn records<'d>(&self, directory: &'d Directory) -> impl Iterator<Item = &'d Record> {
        self.indices.iter().map(move |&index| directory.get(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Directory {
        let mut dir = Directory::with_capacity(4);
        for (name, number) in [("Alice", "1"), ("Bob", "2"), ("Carol", "3")] {
            dir.append(Record::new(name, number).unwrap()).unwrap();
        }
        dir
    }

    #[test]
    fn test_all() {
        let dir = sample();
        let view = ResultView::all(&dir);
        assert_eq!(view.indices(), &[0, 1, 2]);
        assert_eq!(view.capacity(), 4);
    }

    #[test]
    fn test_scan_keeps_directory_order() {
        let dir = sample();
        let view = ResultView::scan(&dir, |r| r.name() != "Bob");
        assert_eq!(view.indices(), &[0, 2]);

        let names: Vec<_> = view.records(&dir).map(|r| r.name()).collect();
        assert_eq!(names, vec!["Alice", "Carol"]);
    }

    #[test]
    fn test_push_must_increase() {
        let mut view = ResultView::with_capacity(3);
        view.push(1).unwrap();
        assert_eq!(view.push(1).unwrap_err().kind, ErrorKind::InvalidArgument);
        assert_eq!(view.push(0).unwrap_err().kind, ErrorKind::InvalidArgument);
        view.push(2).unwrap();
        assert_eq!(view.indices(), &[1, 2]);
    }

    #[test]
    fn test_push_respects_capacity() {
        let mut view = ResultView::with_capacity(1);
        view.push(0).unwrap();
        assert_eq!(view.push(1).unwrap_err().kind, ErrorKind::CapacityExceeded);
    }

    #[test]
    fn test_huge_capacity_view() {
        let mut view = ResultView::with_capacity(usize::MAX);
        view.push(7).unwrap();
        assert_eq!(view.capacity(), usize::MAX);
        assert_eq!(view.indices(), &[7]);
    }

    #[test]
    fn test_empty_directory_view() {
        let dir = Directory::with_capacity(2);
        assert!(ResultView::all(&dir).is_empty());
    }
}
