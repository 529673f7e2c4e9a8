use axum::extract::{Multipart, Query, State};
use axum::routing::post;
use axum::Router;

use application::service::{DeleteBookService, ImportBookService};

use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::request::{
    read_upload, BookTransformer, DeleteDataRequest, FileTypeQuery, UploadDataRequest,
};
use crate::response::BookPresenter;

/// Generic endpoints: the file type arrives as a query argument and is
/// validated before dispatch.
pub trait BookRouter {
    fn route_book(self) -> Self;
}

impl BookRouter for Router<AppModule> {
    fn route_book(self) -> Self {
        self.route(
            "/api/book/upload",
            post(
                |State(module): State<AppModule>,
                 Query(query): Query<FileTypeQuery>,
                 multipart: Multipart| async move {
                    let payload = read_upload(multipart).await.map_err(ErrorStatus::from)?;
                    Controller::new(BookTransformer, BookPresenter)
                        .try_intake(UploadDataRequest::new(query.file_type, payload))
                        .map_err(ErrorStatus::from)?
                        .handle(|dto| async move { module.import_books(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/api/book/delete",
            post(
                |State(module): State<AppModule>,
                 Query(query): Query<FileTypeQuery>,
                 multipart: Multipart| async move {
                    let payload = read_upload(multipart).await.map_err(ErrorStatus::from)?;
                    Controller::new(BookTransformer, BookPresenter)
                        .try_intake(DeleteDataRequest::new(query.file_type, payload))
                        .map_err(ErrorStatus::from)?
                        .handle(|dto| async move { module.delete_books(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
