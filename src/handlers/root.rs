use crate::handlers::shared_types::ApiResponse;
use crate::session::CurrentAdmin;
use serde::Serialize;

/// Landing page data: who is logged in and where they can go.
#[derive(Debug, Serialize)]
pub struct LandingView {
    pub username: String,
    pub version: &'static str,
    pub links: Vec<Link>,
}

#[derive(Debug, Serialize)]
pub struct Link {
    pub title: &'static str,
    pub href: &'static str,
}

const LINKS: [(&str, &str); 4] = [
    ("Ziyaretçi Listesi", "/ziyaretci-listesi"),
    ("Ziyaretçi Ekle", "/ziyaretci-ekle"),
    ("İstatistikler", "/istatistikler"),
    ("Çıkış", "/cikis"),
];

pub async fn root_handler(admin: CurrentAdmin) -> ApiResponse<LandingView> {
    // ---
    ApiResponse::new(LandingView {
        username: admin.session.username,
        version: env!("CARGO_PKG_VERSION"),
        links: LINKS
            .iter()
            .map(|&(title, href)| Link { title, href })
            .collect(),
    })
}
