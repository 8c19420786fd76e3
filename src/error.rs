use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use log::warn;
use thiserror::Error;

use crate::{storage, structs::ErrorBody};

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Storage(#[from] storage::Error),
    #[error("Missing required parameter: {0}.")]
    MissingParameter(&'static str),
    #[error("Invalid query string: {0}")]
    InvalidQuery(#[from] QueryRejection),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // The practice API answers 404 for duplicate keys as well.
        let status = match &self {
            ApiError::Storage(_) => StatusCode::NOT_FOUND,
            ApiError::MissingParameter(_) | ApiError::InvalidQuery(_) => StatusCode::BAD_REQUEST,
        };

        warn!("request rejected ({status}): {}", self);

        (status, Json(ErrorBody { error: self.to_string() })).into_response()
    }
}
