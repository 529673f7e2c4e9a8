use axum::extract::{Multipart, State};
use axum::routing::post;
use axum::Router;

use application::service::{DeleteBookService, ImportBookService};

use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::request::{read_upload, DeleteFileRequest, JsonTransformer, UploadFileRequest};
use crate::response::BookPresenter;

pub trait JsonRouter {
    fn route_json(self) -> Self;
}

impl JsonRouter for Router<AppModule> {
    fn route_json(self) -> Self {
        self.route(
            "/api/json/upload",
            post(
                |State(module): State<AppModule>, multipart: Multipart| async move {
                    let payload = read_upload(multipart).await.map_err(ErrorStatus::from)?;
                    Controller::new(JsonTransformer, BookPresenter)
                        .intake(UploadFileRequest::new(payload))
                        .handle(|dto| async move { module.import_books(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/api/json/delete",
            post(
                |State(module): State<AppModule>, multipart: Multipart| async move {
                    let payload = read_upload(multipart).await.map_err(ErrorStatus::from)?;
                    Controller::new(JsonTransformer, BookPresenter)
                        .intake(DeleteFileRequest::new(payload))
                        .handle(|dto| async move { module.delete_books(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
