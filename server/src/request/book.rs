use std::str::FromStr;

use axum::extract::Multipart;
use error_stack::{Report, ResultExt};
use serde::Deserialize;

use application::transfer::{DeleteBookDto, ImportBookDto};
use kernel::interface::extract::FileKind;
use kernel::KernelError;

use crate::controller::{Intake, TryIntake};

#[derive(Debug, Deserialize)]
pub struct FileTypeQuery {
    #[serde(rename = "fileType")]
    pub file_type: String,
}

/// Reads the `file` part of a multipart upload to completion. A request
/// without that part is indistinguishable from a zero-length file and is
/// rejected the same way.
pub async fn read_upload(mut multipart: Multipart) -> error_stack::Result<Vec<u8>, KernelError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .change_context(KernelError::Decode)?
    {
        if field.name() == Some("file") {
            let bytes = field.bytes().await.change_context(KernelError::Decode)?;
            return Ok(bytes.to_vec());
        }
    }
    Err(Report::new(KernelError::EmptyFile))
}

#[derive(Debug)]
pub struct UploadDataRequest {
    file_type: String,
    payload: Vec<u8>,
}

impl UploadDataRequest {
    pub fn new(file_type: String, payload: Vec<u8>) -> Self {
        Self { file_type, payload }
    }
}

#[derive(Debug)]
pub struct DeleteDataRequest {
    file_type: String,
    payload: Vec<u8>,
}

impl DeleteDataRequest {
    pub fn new(file_type: String, payload: Vec<u8>) -> Self {
        Self { file_type, payload }
    }
}

#[derive(Debug)]
pub struct UploadFileRequest {
    payload: Vec<u8>,
}

impl UploadFileRequest {
    pub fn new(payload: Vec<u8>) -> Self {
        Self { payload }
    }
}

#[derive(Debug)]
pub struct DeleteFileRequest {
    payload: Vec<u8>,
}

impl DeleteFileRequest {
    pub fn new(payload: Vec<u8>) -> Self {
        Self { payload }
    }
}

/// Transformer for the generic endpoints, which carry the file type as a
/// query argument and may therefore fail on an unrecognized value.
pub struct BookTransformer;

impl TryIntake<UploadDataRequest> for BookTransformer {
    type To = ImportBookDto;
    type Error = Report<KernelError>;
    fn emit(&self, input: UploadDataRequest) -> Result<Self::To, Self::Error> {
        let kind = FileKind::from_str(&input.file_type)?;
        Ok(ImportBookDto {
            kind,
            payload: input.payload,
        })
    }
}

impl TryIntake<DeleteDataRequest> for BookTransformer {
    type To = DeleteBookDto;
    type Error = Report<KernelError>;
    fn emit(&self, input: DeleteDataRequest) -> Result<Self::To, Self::Error> {
        let kind = FileKind::from_str(&input.file_type)?;
        Ok(DeleteBookDto {
            kind,
            payload: input.payload,
        })
    }
}

/// Transformers for the format-specific endpoints, which hard-code the
/// discriminator and cannot fail.
pub struct ExcelTransformer;

impl Intake<UploadFileRequest> for ExcelTransformer {
    type To = ImportBookDto;
    fn emit(&self, input: UploadFileRequest) -> Self::To {
        ImportBookDto {
            kind: FileKind::Excel,
            payload: input.payload,
        }
    }
}

impl Intake<DeleteFileRequest> for ExcelTransformer {
    type To = DeleteBookDto;
    fn emit(&self, input: DeleteFileRequest) -> Self::To {
        DeleteBookDto {
            kind: FileKind::Excel,
            payload: input.payload,
        }
    }
}

pub struct JsonTransformer;

impl Intake<UploadFileRequest> for JsonTransformer {
    type To = ImportBookDto;
    fn emit(&self, input: UploadFileRequest) -> Self::To {
        ImportBookDto {
            kind: FileKind::Json,
            payload: input.payload,
        }
    }
}

impl Intake<DeleteFileRequest> for JsonTransformer {
    type To = DeleteBookDto;
    fn emit(&self, input: DeleteFileRequest) -> Self::To {
        DeleteBookDto {
            kind: FileKind::Json,
            payload: input.payload,
        }
    }
}

#[cfg(test)]
mod test {
    use kernel::KernelError;

    use crate::controller::{Intake, TryIntake};
    use crate::request::{
        BookTransformer, DeleteDataRequest, DeleteFileRequest, ExcelTransformer, JsonTransformer,
        UploadDataRequest, UploadFileRequest,
    };

    // The generic endpoint with an explicit discriminator must produce the
    // same DTO the format-specific endpoints hard-code.
    #[test]
    fn generic_and_excel_imports_are_equivalent() {
        let payload = b"workbook".to_vec();
        let generic = BookTransformer
            .emit(UploadDataRequest::new("Excel".into(), payload.clone()))
            .unwrap();
        let specific = ExcelTransformer.emit(UploadFileRequest::new(payload));
        assert_eq!(generic, specific);
    }

    #[test]
    fn generic_and_json_imports_are_equivalent() {
        let payload = br#"[{"Title":"Dune"}]"#.to_vec();
        let generic = BookTransformer
            .emit(UploadDataRequest::new("Json".into(), payload.clone()))
            .unwrap();
        let specific = JsonTransformer.emit(UploadFileRequest::new(payload));
        assert_eq!(generic, specific);
    }

    #[test]
    fn generic_and_specific_deletes_are_equivalent() {
        let payload = b"workbook".to_vec();
        let generic = BookTransformer
            .emit(DeleteDataRequest::new("Excel".into(), payload.clone()))
            .unwrap();
        let excel = ExcelTransformer.emit(DeleteFileRequest::new(payload.clone()));
        assert_eq!(generic, excel);

        let generic = BookTransformer
            .emit(DeleteDataRequest::new("Json".into(), payload.clone()))
            .unwrap();
        let json = JsonTransformer.emit(DeleteFileRequest::new(payload));
        assert_eq!(generic, json);
    }

    #[test]
    fn unrecognized_file_type_is_rejected() {
        let report = BookTransformer
            .emit(UploadDataRequest::new("Csv".into(), b"x".to_vec()))
            .unwrap_err();
        assert!(matches!(
            report.current_context(),
            KernelError::InvalidFileType
        ));
    }
}
