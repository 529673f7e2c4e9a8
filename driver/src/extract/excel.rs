use std::io::Cursor;

use calamine::{Data, Range, Reader, Xlsx};
use error_stack::Report;

use kernel::interface::extract::BookExtractor;
use kernel::prelude::entity::{Book, BookAuthor, BookTitle, BookYear};
use kernel::KernelError;

use crate::error::ConvertError;

/// Expected column layout. Row 1 is a header and is never read.
mod cols {
    pub const TITLE: usize = 0;
    pub const AUTHOR: usize = 1;
    pub const YEAR: usize = 2;
}

pub struct ExcelBookExtractor;

impl BookExtractor for ExcelBookExtractor {
    fn extract_books(&self, payload: &[u8]) -> error_stack::Result<Vec<Book>, KernelError> {
        let range = first_sheet(payload)?;
        let books = range
            .rows()
            .skip(1)
            .filter(|row| !is_empty_row(row))
            .map(|row| {
                Book::new(
                    BookTitle::new(cell_string(row, cols::TITLE)),
                    BookAuthor::new(cell_string(row, cols::AUTHOR)),
                    cell_year(row, cols::YEAR),
                )
            })
            .collect::<Vec<_>>();
        tracing::debug!(rows = books.len(), "extracted books from workbook");
        Ok(books)
    }

    fn extract_titles(
        &self,
        payload: &[u8],
    ) -> error_stack::Result<Vec<BookTitle>, KernelError> {
        let range = first_sheet(payload)?;
        // Rows without a title are not deletion targets. Zero candidates is
        // legal here, unlike the JSON path.
        let titles = range
            .rows()
            .skip(1)
            .map(|row| cell_string(row, cols::TITLE))
            .filter(|title| !title.is_empty())
            .map(BookTitle::new)
            .collect();
        Ok(titles)
    }
}

fn first_sheet(payload: &[u8]) -> error_stack::Result<Range<Data>, KernelError> {
    let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(payload)).convert_error()?;
    let sheet = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| {
            Report::new(KernelError::Decode).attach_printable("workbook has no sheets")
        })?;
    workbook.worksheet_range(&sheet).convert_error()
}

fn is_empty_row(row: &[Data]) -> bool {
    row.iter().all(|cell| cell.to_string().trim().is_empty())
}

fn cell_string(row: &[Data], col: usize) -> String {
    row.get(col)
        .map(|cell| match cell {
            Data::String(s) => s.clone(),
            Data::Int(i) => i.to_string(),
            Data::Float(f) => {
                if f.fract() == 0.0 {
                    (*f as i64).to_string()
                } else {
                    f.to_string()
                }
            }
            Data::Bool(b) => b.to_string(),
            _ => String::new(),
        })
        .unwrap_or_default()
}

fn cell_year(row: &[Data], col: usize) -> BookYear {
    row.get(col)
        .and_then(|cell| match cell {
            Data::Int(i) => i32::try_from(*i).ok(),
            Data::Float(f) => Some(*f as i32),
            Data::String(s) => s.trim().parse().ok(),
            _ => None,
        })
        .map(BookYear::new)
        .unwrap_or_default()
}

#[cfg(test)]
mod test {
    use kernel::interface::extract::BookExtractor;
    use kernel::KernelError;
    use rust_xlsxwriter::Workbook;

    use crate::extract::excel::ExcelBookExtractor;

    fn sheet_bytes(rows: &[[&str; 3]]) -> Vec<u8> {
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        for (col, header) in ["Title", "Author", "Year"].iter().enumerate() {
            sheet.write_string(0, col as u16, *header).unwrap();
        }
        for (row, cells) in rows.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                sheet.write_string(row as u32 + 1, col as u16, *cell).unwrap();
            }
        }
        workbook.save_to_buffer().unwrap()
    }

    #[test]
    fn imports_one_book_per_data_row() {
        let payload = sheet_bytes(&[
            ["Dune", "Herbert", "1965"],
            ["Foundation", "Asimov", "1951"],
        ]);
        let books = ExcelBookExtractor.extract_books(&payload).unwrap();
        assert_eq!(books.len(), 2);
        assert_eq!(books[0].title().as_ref(), "Dune");
        assert_eq!(books[0].author().as_ref(), "Herbert");
        assert_eq!(*books[0].year().as_ref(), 1965);
    }

    #[test]
    fn unparseable_year_coerces_to_zero() {
        let payload = sheet_bytes(&[["Dune", "Herbert", "1965-oops"]]);
        let books = ExcelBookExtractor.extract_books(&payload).unwrap();
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].title().as_ref(), "Dune");
        assert_eq!(*books[0].year().as_ref(), 0);
    }

    #[test]
    fn numeric_year_cell_is_read() {
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.write_string(0, 0, "Title").unwrap();
        sheet.write_string(1, 0, "Dune").unwrap();
        sheet.write_number(1, 2, 1965).unwrap();
        let payload = workbook.save_to_buffer().unwrap();

        let books = ExcelBookExtractor.extract_books(&payload).unwrap();
        assert_eq!(*books[0].year().as_ref(), 1965);
        assert_eq!(books[0].author().as_ref(), "");
    }

    #[test]
    fn header_only_sheet_yields_no_books() {
        let payload = sheet_bytes(&[]);
        let books = ExcelBookExtractor.extract_books(&payload).unwrap();
        assert!(books.is_empty());
        let titles = ExcelBookExtractor.extract_titles(&payload).unwrap();
        assert!(titles.is_empty());
    }

    #[test]
    fn rows_without_title_are_not_delete_candidates() {
        let payload = sheet_bytes(&[["Dune", "Herbert", "1965"], ["", "Unknown", "2000"]]);
        let titles = ExcelBookExtractor.extract_titles(&payload).unwrap();
        assert_eq!(titles.len(), 1);
        assert_eq!(titles[0].as_ref(), "Dune");
    }

    #[test]
    fn unreadable_workbook_is_a_decode_error() {
        let report = ExcelBookExtractor
            .extract_books(b"definitely not a workbook")
            .unwrap_err();
        assert!(matches!(report.current_context(), KernelError::Decode));
    }
}
