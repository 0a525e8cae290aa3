use crate::flash::Flash;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Wrapper type for successful view responses.
///
/// Encapsulates the data payload and an optional one-shot flash message,
/// and prepares them for JSON serialization.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub data: T,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub flash: Option<&'static str>,
}

impl<T> ApiResponse<T> {
    // ---
    pub fn new(data: T) -> Self {
        Self { data, flash: None }
    }

    pub fn with_flash(self, flash: Option<Flash>) -> Self {
        self.with_message(flash.map(Flash::message))
    }

    pub fn with_message(mut self, message: Option<&'static str>) -> Self {
        self.flash = message;
        self
    }
}

impl<T> IntoResponse for ApiResponse<T>
where
    T: Serialize,
{
    fn into_response(self) -> Response {
        axum::Json(self).into_response()
    }
}
