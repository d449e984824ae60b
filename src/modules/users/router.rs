use axum::{Router, routing::get};

use crate::middleware::{Authenticate, RequireRole};
use crate::modules::users::controller::{
    create_user, delete_user, get_user, list_users, update_user,
};
use crate::pipeline::{Chain, adapt};
use crate::state::AppState;

pub fn init_users_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(adapt(Chain::new().then(Authenticate).handle(list_users))).post(adapt(
                Chain::new()
                    .then(Authenticate)
                    .then(RequireRole::admin())
                    .handle(create_user),
            )),
        )
        .route(
            "/{id}",
            get(adapt(Chain::new().then(Authenticate).handle(get_user)))
                .put(adapt(Chain::new().then(Authenticate).handle(update_user)))
                .delete(adapt(
                    Chain::new()
                        .then(Authenticate)
                        .then(RequireRole::admin())
                        .handle(delete_user),
                )),
        )
}
