use axum::{Router, routing::get};

use super::handlers::{
    get_user::get_user, get_user_form::get_user_form, list_users::list_users,
};
use crate::application::http::server::app_state::AppState;

pub fn user_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/users/list", state.args.server.root_path),
            get(list_users),
        )
        .route(
            &format!("{}/users/{{user_id}}", state.args.server.root_path),
            get(get_user),
        )
        .route(
            &format!("{}/users/{{user_id}}/form", state.args.server.root_path),
            get(get_user_form),
        )
}
