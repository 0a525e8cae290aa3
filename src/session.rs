//! Request-scoped authentication context.
//!
//! Every protected handler takes a [`CurrentAdmin`] argument. Extraction reads
//! the session cookie and resolves it through the session store; a missing,
//! unknown or expired token rejects the request with `Unauthenticated`, which
//! renders as a redirect to the login page.

use crate::app_state::AppState;
use crate::domain::SessionInfo;
use crate::error::AppError;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

// ---

/// Authenticated administrator for the current request.
#[derive(Debug, Clone)]
pub struct CurrentAdmin {
    // ---
    /// Raw session token, needed to end the session on logout.
    pub token: String,
    pub session: SessionInfo,
}

impl FromRequestParts<AppState> for CurrentAdmin {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, AppError> {
        // ---
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar
            .get(&state.cookies().name)
            .map(|c| c.value().to_string())
            .ok_or_else(|| {
                tracing::debug!("Missing session cookie");
                AppError::Unauthenticated
            })?;

        let session = state.services().auth.authenticate(&token).await?;

        Ok(CurrentAdmin { token, session })
    }
}

// ---

/// Session cookie attributes.
#[derive(Debug, Clone)]
pub struct CookieSettings {
    pub name: String,
    pub secure: bool,
}

impl CookieSettings {
    // ---
    /// Cookie carrying a freshly issued session token.
    pub fn session_cookie(&self, token: String) -> Cookie<'static> {
        // ---
        Cookie::build((self.name.clone(), token))
            .path("/")
            .http_only(true)
            .secure(self.secure)
            .same_site(SameSite::Lax)
            .build()
    }

    /// Cookie used to remove the session cookie from the client.
    pub fn removal_cookie(&self) -> Cookie<'static> {
        // ---
        Cookie::build((self.name.clone(), "")).path("/").build()
    }
}
