use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StreamError {
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV parse error in {path} at line {line}")]
    CsvParse {
        path: PathBuf,
        line: u64,
        #[source]
        source: csv::Error,
    },

    #[error("line {line}: expected 'label,text', found '{content}'")]
    MalformedRow { line: usize, content: String },
}
