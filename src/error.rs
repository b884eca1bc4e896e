use std::path::PathBuf;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

// A missing recipe is not an error; repository operations signal it with None.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to read recipe data from {path}")]
    StorageRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write recipe data to {path}")]
    StorageWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed recipe data")]
    Parse(#[from] csv::Error),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "storage failure");

        let message = match self {
            Self::StorageRead { .. } => "recipe storage could not be read",
            Self::StorageWrite { .. } => "recipe storage could not be written",
            Self::Parse(_) => "recipe storage is malformed",
        };

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
