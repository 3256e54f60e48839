//! Lambda HTTP handler for the advent calendar site.
//!
//! Endpoints:
//! - GET / - The whole calendar
//! - GET /day/{n} - One day's content, once unlocked
//! - GET /static/{path} - Static assets

pub mod http;
pub mod pages;
pub mod router;
pub mod state;
pub mod static_files;

pub use router::handler;
pub use state::AppState;
