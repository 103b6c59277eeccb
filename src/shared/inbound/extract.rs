// Path and query extractors whose rejections use the `{"detail"}` error body.

use axum::extract::{FromRequestParts, Path, Query};

use crate::shared::application::errors::ApplicationError;

#[derive(FromRequestParts)]
#[from_request(via(Path), rejection(ApplicationError))]
pub struct ApiPath<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(Query), rejection(ApplicationError))]
pub struct ApiQuery<T>(pub T);
