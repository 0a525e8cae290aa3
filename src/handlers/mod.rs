// Gateway module - controls public API for handlers
// Modules are private, only exported symbols are public

mod auth;
mod health;
mod metrics;
mod root;
mod shared_types;
mod stats;
mod visitors;

// Core handlers
pub use health::health_check;
pub use metrics::{metrics_handler, track_http_metrics};
pub use root::root_handler;
pub use shared_types::ApiResponse;

// Authentication handlers
pub use auth::{login, login_page, logout, LoginView};

// Visitor CRUD handlers
pub use visitors::{
    add_visitor, add_visitor_form, delete_visitor, edit_visitor, edit_visitor_form, list_visitors,
};

// Statistics handler
pub use stats::get_stats;
