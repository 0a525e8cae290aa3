//! One-shot flash messages carried between a redirect and the next view.
//!
//! The cookie holds only a short code; the message text stays on the server,
//! so cookie values are always plain ASCII.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

const FLASH_COOKIE: &str = "visitor_flash";

/// A message shown once by the next rendered view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flash {
    LoginRequired,
    VisitorAdded,
    VisitorUpdated,
    VisitorDeleted,
}

impl Flash {
    // ---
    fn code(self) -> &'static str {
        match self {
            Flash::LoginRequired => "login-required",
            Flash::VisitorAdded => "visitor-added",
            Flash::VisitorUpdated => "visitor-updated",
            Flash::VisitorDeleted => "visitor-deleted",
        }
    }

    fn from_code(code: &str) -> Option<Self> {
        match code {
            "login-required" => Some(Flash::LoginRequired),
            "visitor-added" => Some(Flash::VisitorAdded),
            "visitor-updated" => Some(Flash::VisitorUpdated),
            "visitor-deleted" => Some(Flash::VisitorDeleted),
            _ => None,
        }
    }

    /// User-facing text.
    pub fn message(self) -> &'static str {
        match self {
            Flash::LoginRequired => "Bu sayfayı görüntülemek için lütfen giriş yapın.",
            Flash::VisitorAdded => "Ziyaretçi başarıyla eklendi!",
            Flash::VisitorUpdated => "Ziyaretçi başarıyla güncellendi!",
            Flash::VisitorDeleted => "Ziyaretçi silindi.",
        }
    }

    /// Queue this message for the next view.
    pub fn set(self, jar: CookieJar) -> CookieJar {
        // ---
        let cookie = Cookie::build((FLASH_COOKIE, self.code()))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax);

        jar.add(cookie)
    }

    /// Consume the pending message, if any, clearing the cookie.
    pub fn take(jar: CookieJar) -> (CookieJar, Option<Flash>) {
        // ---
        let flash = jar.get(FLASH_COOKIE).and_then(|c| Flash::from_code(c.value()));

        if jar.get(FLASH_COOKIE).is_some() {
            (jar.remove(Cookie::build((FLASH_COOKIE, "")).path("/")), flash)
        } else {
            (jar, flash)
        }
    }
}
