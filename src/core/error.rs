use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Io,
    InvalidArgument,
    CapacityExceeded,
    MalformedRecord,
    LineTooLong,
    Serialization,
}

impl ErrorKind {
    /// Process exit code reported when an error of this kind ends the run
    pub fn exit_code(&self) -> u8 {
        match self {
            ErrorKind::InvalidArgument => 2,
            ErrorKind::Io => 3,
            ErrorKind::CapacityExceeded => 4,
            ErrorKind::MalformedRecord => 5,
            ErrorKind::LineTooLong => 6,
            ErrorKind::Serialization => 7,
        }
    }
}

#[derive(Debug)]
pub struct Error {
    pub kind: ErrorKind,
    pub context: String,
}

impl Error {
    pub fn new(kind: ErrorKind, context: String) -> Self {
        Error { kind, context }
    }

    /// Prefix the context with the input line the error was found on
    pub fn at_line(self, line: usize) -> Self {
        Error {
            kind: self.kind,
            context: format!("line {}: {}", line, self.context),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.context)
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error {
            kind: ErrorKind::Io,
            context: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error {
            kind: ErrorKind::Serialization,
            context: format!("JSON error: {}", err),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_distinct_and_non_zero() {
        let kinds = [
            ErrorKind::Io,
            ErrorKind::InvalidArgument,
            ErrorKind::CapacityExceeded,
            ErrorKind::MalformedRecord,
            ErrorKind::LineTooLong,
            ErrorKind::Serialization,
        ];
        let mut codes: Vec<u8> = kinds.iter().map(|k| k.exit_code()).collect();
        assert!(codes.iter().all(|&c| c != 0));
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), kinds.len());
    }

    #[test]
    fn test_display_and_line_prefix() {
        let err = Error::new(ErrorKind::MalformedRecord, "bad number".to_string()).at_line(4);
        assert_eq!(err.to_string(), "MalformedRecord: line 4: bad number");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "eof");
        let err: Error = io.into();
        assert_eq!(err.kind, ErrorKind::Io);
    }
}
