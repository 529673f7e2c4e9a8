use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use application::transfer::{DeleteSummaryDto, ImportSummaryDto};
use kernel::interface::extract::FileKind;

use crate::controller::Exhaust;

#[derive(Debug)]
pub struct ImportBookResponse {
    kind: FileKind,
}

impl ImportBookResponse {
    fn message(&self) -> String {
        format!("{} data imported successfully", self.kind)
    }
}

impl IntoResponse for ImportBookResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, self.message()).into_response()
    }
}

#[derive(Debug)]
pub struct DeleteBookResponse {
    deleted: usize,
}

impl DeleteBookResponse {
    fn message(&self) -> String {
        format!("Deleted {} books from the database", self.deleted)
    }
}

impl IntoResponse for DeleteBookResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, self.message()).into_response()
    }
}

pub struct BookPresenter;

impl Exhaust<ImportSummaryDto> for BookPresenter {
    type To = ImportBookResponse;
    fn emit(&self, input: ImportSummaryDto) -> Self::To {
        ImportBookResponse { kind: input.kind }
    }
}

impl Exhaust<DeleteSummaryDto> for BookPresenter {
    type To = DeleteBookResponse;
    fn emit(&self, input: DeleteSummaryDto) -> Self::To {
        DeleteBookResponse {
            deleted: input.deleted,
        }
    }
}

#[cfg(test)]
mod test {
    use application::transfer::{DeleteSummaryDto, ImportSummaryDto};
    use kernel::interface::extract::FileKind;

    use crate::controller::Exhaust;
    use crate::response::BookPresenter;

    #[test]
    fn import_messages_name_the_format() {
        let excel = BookPresenter.emit(ImportSummaryDto {
            kind: FileKind::Excel,
            inserted: 3,
        });
        assert_eq!(excel.message(), "Excel data imported successfully");

        let json = BookPresenter.emit(ImportSummaryDto {
            kind: FileKind::Json,
            inserted: 0,
        });
        assert_eq!(json.message(), "JSON data imported successfully");
    }

    #[test]
    fn delete_message_carries_the_count() {
        let response = BookPresenter.emit(DeleteSummaryDto { deleted: 1 });
        assert_eq!(response.message(), "Deleted 1 books from the database");
    }
}
