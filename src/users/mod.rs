mod dto;
pub mod handlers;
pub mod registry;
mod validate;

pub use dto::{User, UserPayload};

use crate::state::AppState;
use axum::Router;

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(handlers::read_routes())
        .merge(handlers::write_routes())
}
