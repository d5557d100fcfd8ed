//! Web layer: the REST façade itself.
//!
//! Wraps the normalizer calls in JSON success envelopes. Normalizers never
//! fail for upstream-data problems, so handlers are infallible; the only
//! error responses are the 404 fallback and axum's own rejections.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
