use std::fmt::Display;
use std::str::FromStr;

use error_stack::Report;

use crate::entity::{Book, BookTitle};
use crate::KernelError;

/// Declared format of an uploaded payload.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum FileKind {
    Excel,
    Json,
}

impl FromStr for FileKind {
    type Err = Report<KernelError>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Excel" => Ok(FileKind::Excel),
            "Json" => Ok(FileKind::Json),
            _ => Err(Report::new(KernelError::InvalidFileType)
                .attach_printable(format!("unrecognized file type: {s}"))),
        }
    }
}

impl Display for FileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileKind::Excel => write!(f, "Excel"),
            FileKind::Json => write!(f, "JSON"),
        }
    }
}

/// Conversion from uploaded bytes to book records.
///
/// `extract_books` feeds the import pipeline. `extract_titles` feeds the
/// delete pipeline and carries the per-format asymmetry: the spreadsheet
/// implementation skips rows with an empty title and may legally yield zero
/// candidates, while the JSON implementation rejects an empty array outright.
pub trait BookExtractor: 'static + Sync + Send {
    fn extract_books(&self, payload: &[u8]) -> error_stack::Result<Vec<Book>, KernelError>;

    fn extract_titles(&self, payload: &[u8])
        -> error_stack::Result<Vec<BookTitle>, KernelError>;
}

pub trait DependOnBookExtractor: 'static + Sync + Send {
    type ExcelExtractor: BookExtractor;
    type JsonExtractor: BookExtractor;
    fn excel_extractor(&self) -> &Self::ExcelExtractor;
    fn json_extractor(&self) -> &Self::JsonExtractor;
}
