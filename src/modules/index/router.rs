use axum::{Router, routing::get};

use super::controller::health;
use crate::pipeline::adapt;
use crate::state::AppState;

pub fn init_index_router() -> Router<AppState> {
    Router::new().route("/", get(adapt(health)))
}
