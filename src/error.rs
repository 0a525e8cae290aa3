//! Error types for the visitor desk.

use crate::flash::Flash;
use crate::handlers::{ApiResponse, LoginView};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Json,
};
use axum_extra::extract::cookie::CookieJar;
use serde::Serialize;
use thiserror::Error;

/// Shown on the login view after a failed attempt.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Hatalı kullanıcı adı veya şifre!";

/// Path of the login page every unauthenticated request is sent to.
pub const LOGIN_PATH: &str = "/giris";

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("invalid username or password")]
    InvalidCredentials,

    #[error("authentication required")]
    Unauthenticated,

    #[error("visitor {0} not found")]
    NotFound(i64),

    /// Path segment that cannot be a visitor ID.
    #[error("visitor {0:?} not found")]
    MalformedId(String),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("internal error: {0:#}")]
    Internal(#[from] anyhow::Error),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::InvalidCredentials => {
                let view = ApiResponse::new(LoginView::default())
                    .with_message(Some(INVALID_CREDENTIALS_MESSAGE));
                (StatusCode::UNAUTHORIZED, view).into_response()
            }
            AppError::Unauthenticated => {
                let jar = Flash::LoginRequired.set(CookieJar::new());
                (jar, Redirect::to(LOGIN_PATH)).into_response()
            }
            AppError::NotFound(id) => {
                let body = Json(ErrorResponse {
                    error: format!("visitor {id} not found"),
                });
                (StatusCode::NOT_FOUND, body).into_response()
            }
            AppError::MalformedId(raw) => {
                let body = Json(ErrorResponse {
                    error: format!("visitor {raw:?} not found"),
                });
                (StatusCode::NOT_FOUND, body).into_response()
            }
            AppError::Validation(msg) => {
                let body = Json(ErrorResponse { error: msg });
                (StatusCode::BAD_REQUEST, body).into_response()
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {:?}", e);
                let body = Json(ErrorResponse {
                    error: "Internal server error".to_string(),
                });
                (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
            }
        }
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
