use crate::streams::{LabeledText, Stream, StreamError};
use csv::{ReaderBuilder, StringRecord, StringRecordsIntoIter};
use std::fs::File;
use std::path::{Path, PathBuf};

/// Reads `label,text` rows from a CSV file without a header.
///
/// Blank rows and rows starting with `#` are skipped. The label is the first
/// field; the text is the remaining fields joined back with commas, so an
/// unquoted text may itself contain commas. Quoted fields follow RFC 4180 and
/// may span lines.
pub struct CsvTextStream {
    path: PathBuf,
    records: StringRecordsIntoIter<File>,
    pending: Option<Result<LabeledText, StreamError>>,
}

impl CsvTextStream {
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, StreamError> {
        let path = path.as_ref().to_path_buf();
        let records = Self::open(&path)?;
        let mut stream = Self {
            path,
            records,
            pending: None,
        };
        stream.advance();
        Ok(stream)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn open(path: &Path) -> Result<StringRecordsIntoIter<File>, StreamError> {
        let file = File::open(path).map_err(|source| StreamError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        // flexible: rows carry as many fields as their text has unquoted commas.
        Ok(ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .comment(Some(b'#'))
            .from_reader(file)
            .into_records())
    }

    fn advance(&mut self) {
        self.pending = None;
        for result in self.records.by_ref() {
            let record = match result {
                Ok(r) => r,
                Err(source) => {
                    self.pending = Some(Err(StreamError::CsvParse {
                        path: self.path.clone(),
                        line: source.position().map_or(0, |p| p.line()),
                        source,
                    }));
                    return;
                }
            };
            if record.iter().all(|field| field.trim().is_empty()) {
                continue;
            }
            self.pending = Some(to_labeled_text(&record));
            return;
        }
    }
}

fn to_labeled_text(record: &StringRecord) -> Result<LabeledText, StreamError> {
    if record.len() < 2 {
        return Err(StreamError::MalformedRow {
            line: record.position().map_or(0, |p| p.line() as usize),
            content: record.iter().collect::<Vec<_>>().join(","),
        });
    }
    let text = record.iter().skip(1).collect::<Vec<_>>().join(",");
    Ok(LabeledText::new(record[0].trim(), text.trim()))
}

impl Stream for CsvTextStream {
    fn has_more_examples(&self) -> bool {
        self.pending.is_some()
    }

    fn next_example(&mut self) -> Option<Result<LabeledText, StreamError>> {
        let current = self.pending.take()?;
        if current.is_ok() {
            self.advance();
        }
        Some(current)
    }

    fn restart(&mut self) -> Result<(), StreamError> {
        self.records = Self::open(&self.path)?;
        self.advance();
        Ok(())
    }
}
