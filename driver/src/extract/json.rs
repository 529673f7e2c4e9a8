use error_stack::Report;
use serde::Deserialize;

use kernel::interface::extract::BookExtractor;
use kernel::prelude::entity::{Book, BookAuthor, BookTitle, BookYear};
use kernel::KernelError;

use crate::error::ConvertError;

/// Accepted wire shape: a JSON array of these objects. Field names are
/// PascalCase to match the upload format; absent fields take their zero
/// value.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
struct BookRecord {
    title: String,
    author: String,
    year: i32,
}

impl From<BookRecord> for Book {
    fn from(value: BookRecord) -> Self {
        Book::new(
            BookTitle::new(value.title),
            BookAuthor::new(value.author),
            BookYear::new(value.year),
        )
    }
}

pub struct JsonBookExtractor;

impl BookExtractor for JsonBookExtractor {
    fn extract_books(&self, payload: &[u8]) -> error_stack::Result<Vec<Book>, KernelError> {
        let records: Vec<BookRecord> = serde_json::from_slice(payload).convert_error()?;
        tracing::debug!(elements = records.len(), "decoded book array");
        Ok(records.into_iter().map(Book::from).collect())
    }

    fn extract_titles(
        &self,
        payload: &[u8],
    ) -> error_stack::Result<Vec<BookTitle>, KernelError> {
        let books = self.extract_books(payload)?;
        // An explicit empty array is rejected here, while the spreadsheet
        // path reports zero candidates as "no matches" downstream.
        if books.is_empty() {
            return Err(Report::new(KernelError::NoDeleteTarget));
        }
        Ok(books.into_iter().map(|book| book.title().clone()).collect())
    }
}

#[cfg(test)]
mod test {
    use kernel::interface::extract::BookExtractor;
    use kernel::KernelError;

    use crate::extract::json::JsonBookExtractor;

    #[test]
    fn imports_every_array_element() {
        let payload = br#"[
            {"Title": "Dune", "Author": "Herbert", "Year": 1965},
            {"Title": "Foundation", "Author": "Asimov", "Year": 1951}
        ]"#;
        let books = JsonBookExtractor.extract_books(payload).unwrap();
        assert_eq!(books.len(), 2);
        assert_eq!(books[1].title().as_ref(), "Foundation");
        assert_eq!(*books[1].year().as_ref(), 1951);
    }

    #[test]
    fn missing_fields_default_to_zero_values() {
        let books = JsonBookExtractor
            .extract_books(br#"[{"Title": "Dune"}]"#)
            .unwrap();
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].title().as_ref(), "Dune");
        assert_eq!(books[0].author().as_ref(), "");
        assert_eq!(*books[0].year().as_ref(), 0);
    }

    #[test]
    fn empty_array_is_a_valid_import() {
        let books = JsonBookExtractor.extract_books(b"[]").unwrap();
        assert!(books.is_empty());
    }

    #[test]
    fn empty_array_is_rejected_for_delete() {
        let report = JsonBookExtractor.extract_titles(b"[]").unwrap_err();
        assert!(matches!(
            report.current_context(),
            KernelError::NoDeleteTarget
        ));
    }

    #[test]
    fn malformed_json_is_a_decode_error() {
        let report = JsonBookExtractor.extract_books(b"{not json").unwrap_err();
        assert!(matches!(report.current_context(), KernelError::Decode));
    }

    #[test]
    fn non_array_document_is_a_decode_error() {
        let report = JsonBookExtractor
            .extract_books(br#"{"Title": "Dune"}"#)
            .unwrap_err();
        assert!(matches!(report.current_context(), KernelError::Decode));
    }

    #[test]
    fn delete_candidates_keep_empty_titles() {
        let titles = JsonBookExtractor
            .extract_titles(br#"[{"Author": "Herbert"}]"#)
            .unwrap();
        assert_eq!(titles.len(), 1);
        assert!(titles[0].is_empty());
    }
}
