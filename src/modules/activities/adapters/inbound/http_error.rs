use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::modules::activities::application::errors::{ApplicationError, INTERNAL_ERROR_DETAIL};
use crate::modules::activities::core::decision::DecideError;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub message: String,
}

pub fn status_for(error: &ApplicationError) -> StatusCode {
    match error {
        ApplicationError::Domain(DecideError::NotFound) => StatusCode::NOT_FOUND,
        ApplicationError::Domain(DecideError::AlreadyRegistered)
        | ApplicationError::Domain(DecideError::NotRegistered) => StatusCode::BAD_REQUEST,
        ApplicationError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub fn error_response(error: ApplicationError) -> Response {
    let status = status_for(&error);
    match error {
        ApplicationError::Domain(_) => (
            status,
            Json(ErrorBody {
                detail: error.public_detail(),
            }),
        )
            .into_response(),
        other => {
            tracing::error!(error = %other, "request failed");
            internal_error()
        }
    }
}

pub fn internal_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody {
            detail: INTERNAL_ERROR_DETAIL.into(),
        }),
    )
        .into_response()
}

pub fn message_response(message: String) -> Response {
    (StatusCode::OK, Json(MessageBody { message })).into_response()
}
