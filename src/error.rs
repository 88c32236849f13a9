use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::response::ErrorResponse;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("{0}")]
    InvalidInput(String),

    #[error("{0}")]
    Unauthenticated(String),

    #[error("Forbidden")]
    Forbidden,

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    InvalidTransition(String),

    #[error("Database error")]
    DbError(#[from] sqlx::Error),

    #[error("ORM error")]
    OrmError(#[from] sea_orm::DbErr),

    #[error("Internal Server Error")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidInput(_)
            | AppError::Conflict(_)
            | AppError::InvalidTransition(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::DbError(_) | AppError::OrmError(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Store failures keep their detail in the log, not in the payload.
        match &self {
            AppError::DbError(err) => tracing::error!(error = %err, "database failure"),
            AppError::OrmError(err) => tracing::error!(error = %err, "orm failure"),
            AppError::Internal(err) => tracing::error!(error = %err, "internal failure"),
            _ => {}
        }

        let body = ErrorResponse::new(self.to_string(), kind(&self));
        (status, axum::Json(body)).into_response()
    }
}

fn kind(err: &AppError) -> &'static str {
    match err {
        AppError::NotFound(_) => "not_found",
        AppError::InvalidInput(_) => "invalid_input",
        AppError::Unauthenticated(_) => "unauthenticated",
        AppError::Forbidden => "forbidden",
        AppError::Conflict(_) => "conflict",
        AppError::InvalidTransition(_) => "invalid_transition",
        AppError::DbError(_) | AppError::OrmError(_) | AppError::Internal(_) => "internal",
    }
}

pub type AppResult<T> = Result<T, AppError>;
