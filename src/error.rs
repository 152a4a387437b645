//! Parse error taxonomy.
//!
//! Every error is fatal: the first failure aborts the whole parse and no
//! partial tree is returned. Each variant carries enough context to
//! locate the offending line without re-parsing.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors raised while loading or parsing a configuration file.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The same group name was opened twice in one file.
    #[error("duplicate group '{group}' found at line {line} while parsing {file}")]
    DuplicateGroup {
        /// The group name that was opened a second time.
        group: String,
        /// The file being parsed.
        file: Utf8PathBuf,
        /// 1-based line number of the second occurrence.
        line: usize,
    },

    /// A setting line appeared before any group header.
    #[error("unable to find a group at line {line} while parsing {file}")]
    MissingGroup {
        /// The file being parsed.
        file: Utf8PathBuf,
        /// 1-based line number of the orphaned setting.
        line: usize,
    },

    /// A non-blank, non-comment line matched none of the known shapes.
    #[error("unable to parse line {line} while parsing {file}")]
    InvalidLine {
        /// The file being parsed.
        file: Utf8PathBuf,
        /// 1-based line number of the unrecognized line.
        line: usize,
    },

    /// The file could not be opened or read. The underlying I/O error is
    /// kept as the source, not remapped.
    #[error("unable to read {file}")]
    Io {
        /// The file that could not be read.
        file: Utf8PathBuf,
        /// The operating system error.
        #[source]
        source: std::io::Error,
    },
}

impl ParseError {
    /// The 1-based line number the error was raised at, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            ParseError::DuplicateGroup { line, .. }
            | ParseError::MissingGroup { line, .. }
            | ParseError::InvalidLine { line, .. } => Some(*line),
            ParseError::Io { .. } => None,
        }
    }

    /// The file the error was raised for.
    pub fn file(&self) -> &Utf8PathBuf {
        match self {
            ParseError::DuplicateGroup { file, .. }
            | ParseError::MissingGroup { file, .. }
            | ParseError::InvalidLine { file, .. }
            | ParseError::Io { file, .. } => file,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_carries_context() {
        let err = ParseError::DuplicateGroup {
            group: "ftp".to_string(),
            file: Utf8PathBuf::from("settings.conf"),
            line: 12,
        };
        let message = err.to_string();
        assert!(message.contains("'ftp'"));
        assert!(message.contains("line 12"));
        assert!(message.contains("settings.conf"));
    }

    #[test]
    fn test_line_accessor() {
        let err = ParseError::InvalidLine {
            file: Utf8PathBuf::from("a.conf"),
            line: 3,
        };
        assert_eq!(err.line(), Some(3));
        assert_eq!(err.file().as_str(), "a.conf");
    }
}
