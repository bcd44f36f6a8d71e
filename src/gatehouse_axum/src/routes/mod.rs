//! Axum-specific route handlers.
//!
//! These routes are Axum-specific - they use Axum's extractors to get data
//! from requests, call the use cases, and convert results to Axum responses.

pub mod delete_user;
pub mod google_login;
pub mod list_users;
pub mod register;

pub use delete_user::delete_user;
pub use google_login::google_login;
pub use list_users::list_users;
pub use register::register;

/// The generic body for failures the caller cannot act on. Details go to
/// the log, not the wire.
pub(crate) const SERVER_ERROR_MESSAGE: &str = "Server error. Please try again later.";
