use axum::{Router, routing::get};

use super::handlers::{
    get_dict_items::get_dict_items, get_dict_options::get_dict_options,
    list_dict_types::list_dict_types,
};
use crate::application::http::server::app_state::AppState;

pub fn dict_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/dicts/types", state.args.server.root_path),
            get(list_dict_types),
        )
        .route(
            &format!("{}/dicts/{{dict_code}}/items", state.args.server.root_path),
            get(get_dict_items),
        )
        .route(
            &format!(
                "{}/dicts/{{dict_code}}/items/options",
                state.args.server.root_path
            ),
            get(get_dict_options),
        )
}
