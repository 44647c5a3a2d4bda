//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod analysis;
pub mod auth;
pub mod health;
pub mod history;
pub mod options;
pub mod recommendation;
pub mod restore;

pub use analysis::analysis_handler;
pub use auth::{
    guest_handler, login_handler, logout_handler, me_handler, rename_handler, signup_handler,
};
pub use health::health_handler;
pub use history::{delete_history_handler, history_item_handler, history_list_handler};
pub use options::options_handler;
pub use recommendation::recommendation_handler;
pub use restore::restore_handler;
