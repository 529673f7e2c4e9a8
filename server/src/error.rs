use axum::http::StatusCode;
use axum::response::IntoResponse;
use error_stack::Report;
use kernel::KernelError;
use std::process::{ExitCode, Termination};

#[derive(Debug)]
pub struct StackTrace(Report<KernelError>);

impl From<Report<KernelError>> for StackTrace {
    fn from(e: Report<KernelError>) -> Self {
        StackTrace(e)
    }
}

impl Termination for StackTrace {
    fn report(self) -> ExitCode {
        self.0.report()
    }
}

#[derive(Debug)]
pub struct ErrorStatus(Report<KernelError>);

impl From<Report<KernelError>> for ErrorStatus {
    fn from(e: Report<KernelError>) -> Self {
        ErrorStatus(e)
    }
}

impl ErrorStatus {
    pub fn status(&self) -> StatusCode {
        match self.0.current_context() {
            KernelError::EmptyFile
            | KernelError::InvalidFileType
            | KernelError::Decode
            | KernelError::NoDeleteTarget => StatusCode::BAD_REQUEST,
            KernelError::NoMatch => StatusCode::NOT_FOUND,
            KernelError::Timeout => StatusCode::REQUEST_TIMEOUT,
            KernelError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ErrorStatus {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{:?}", self.0);
        }
        let message = self.0.current_context().to_string();
        (status, message).into_response()
    }
}

#[cfg(test)]
mod test {
    use axum::http::StatusCode;
    use error_stack::Report;
    use kernel::KernelError;

    use crate::error::ErrorStatus;

    #[test]
    fn client_errors_map_to_bad_request() {
        for context in [
            KernelError::EmptyFile,
            KernelError::InvalidFileType,
            KernelError::Decode,
            KernelError::NoDeleteTarget,
        ] {
            let status = ErrorStatus::from(Report::new(context)).status();
            assert_eq!(status, StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn no_match_is_not_found() {
        let status = ErrorStatus::from(Report::new(KernelError::NoMatch)).status();
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn store_failures_are_server_errors() {
        let status = ErrorStatus::from(Report::new(KernelError::Internal)).status();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
