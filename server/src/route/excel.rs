use axum::extract::{Multipart, State};
use axum::routing::post;
use axum::Router;

use application::service::{DeleteBookService, ImportBookService};

use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::request::{read_upload, DeleteFileRequest, ExcelTransformer, UploadFileRequest};
use crate::response::BookPresenter;

pub trait ExcelRouter {
    fn route_excel(self) -> Self;
}

impl ExcelRouter for Router<AppModule> {
    fn route_excel(self) -> Self {
        self.route(
            "/api/excel/upload",
            post(
                |State(module): State<AppModule>, multipart: Multipart| async move {
                    let payload = read_upload(multipart).await.map_err(ErrorStatus::from)?;
                    Controller::new(ExcelTransformer, BookPresenter)
                        .intake(UploadFileRequest::new(payload))
                        .handle(|dto| async move { module.import_books(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/api/excel/delete",
            post(
                |State(module): State<AppModule>, multipart: Multipart| async move {
                    let payload = read_upload(multipart).await.map_err(ErrorStatus::from)?;
                    Controller::new(ExcelTransformer, BookPresenter)
                        .intake(DeleteFileRequest::new(payload))
                        .handle(|dto| async move { module.delete_books(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
