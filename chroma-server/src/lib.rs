//! # Chroma Server
//!
//! HTTP front end for [`chroma_core`]: random colors, hue-rotation schemes
//! and a list of named colors.
//!
//! ## Architecture
//!
//! The server is built on Axum and uses:
//! - `chroma-core` for all color math and the storage port
//! - an in-memory color repository (contents are lost on restart)
//! - tower-http for request tracing, CORS and the browser client's static files

pub mod api;
pub mod app;
pub mod handlers;
pub mod infra;
pub mod routes;

pub use app::create_app;
pub use infra::app_state::AppState;
