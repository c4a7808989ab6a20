mod csv_text_stream;
mod dataset;
mod error;
mod stream;

pub use csv_text_stream::CsvTextStream;
pub use dataset::Dataset;
pub use error::StreamError;
pub use stream::{LabeledText, Stream};
