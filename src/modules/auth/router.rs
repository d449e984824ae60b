use axum::{Router, routing::post};

use super::controller::{login, register};
use crate::pipeline::adapt;
use crate::state::AppState;

pub fn init_auth_router() -> Router<AppState> {
    Router::new()
        .route("/register", post(adapt(register)))
        .route("/login", post(adapt(login)))
}
