use std::sync::Arc;

use axum::Router;
use axum::http::header::{ACCEPT, AUTHORIZATION, CONTENT_LENGTH, CONTENT_TYPE, LOCATION};
use axum::http::{HeaderValue, Method};
use rbac_admin_core::{application::create_service, domain::common::RbacAdminConfig};
use tower_http::cors::CorsLayer;
use tracing::{debug, info_span, warn};

use crate::application::http::dict::router::dict_routes;
use crate::application::http::server::app_state::AppState;
use crate::application::http::user::router::user_routes;
use crate::args::Args;

pub async fn state(args: Arc<Args>) -> Result<AppState, anyhow::Error> {
    let config = RbacAdminConfig::from(args.as_ref().clone());
    let service = create_service(config).await?;

    Ok(AppState::new(args, service))
}

///  Returns the [`Router`] of this application.
pub fn router(state: AppState) -> Result<Router, anyhow::Error> {
    let trace_layer = tower_http::trace::TraceLayer::new_for_http().make_span_with(
        |request: &axum::extract::Request| {
            let uri: String = request.uri().to_string();
            info_span!("http_request", method = ?request.method(), uri)
        },
    );

    let allowed_origins = state
        .args
        .server
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Ignoring invalid allowed origin '{}': {}", origin, e);
                None
            }
        })
        .collect::<Vec<HeaderValue>>();

    debug!("Allowed origins: {:?}", allowed_origins);

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_origin(allowed_origins)
        .allow_headers([
            AUTHORIZATION,
            CONTENT_TYPE,
            CONTENT_LENGTH,
            ACCEPT,
            LOCATION,
        ])
        .allow_credentials(true);

    let router = axum::Router::new()
        .merge(user_routes(state.clone()))
        .merge(dict_routes(state.clone()))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state);
    Ok(router)
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use chrono::NaiveDate;
    use clap::Parser;
    use rbac_admin_core::{
        domain::common::{generate_uuid_v7, services::Service},
        entity::{
            sys_dept, sys_dict, sys_dict_item, sys_permission, sys_role, sys_role_permission,
            sys_user, sys_user_role,
        },
        infrastructure::{dict::PostgresDictRepository, user::PostgresUserRepository},
    };
    use sea_orm::{
        ActiveModelTrait, ConnectOptions, ConnectionTrait, Database, DatabaseConnection,
        DbBackend, EntityTrait, Schema,
    };
    use serde_json::{Value, json};
    use uuid::Uuid;

    use super::*;

    async fn connect() -> DatabaseConnection {
        let mut options = ConnectOptions::new("sqlite::memory:");
        options.max_connections(1).sqlx_logging(false);
        let db = Database::connect(options).await.expect("connect sqlite");

        let schema = Schema::new(DbBackend::Sqlite);
        let statements = [
            schema.create_table_from_entity(sys_user::Entity),
            schema.create_table_from_entity(sys_role::Entity),
            schema.create_table_from_entity(sys_permission::Entity),
            schema.create_table_from_entity(sys_dept::Entity),
            schema.create_table_from_entity(sys_user_role::Entity),
            schema.create_table_from_entity(sys_role_permission::Entity),
            schema.create_table_from_entity(sys_dict::Entity),
            schema.create_table_from_entity(sys_dict_item::Entity),
        ];
        for statement in statements {
            db.execute(db.get_database_backend().build(&statement))
                .await
                .expect("create table");
        }
        db
    }

    async fn seed_user(db: &DatabaseConnection, username: &str) -> Uuid {
        let id = generate_uuid_v7();
        let model = sys_user::Model {
            id,
            username: username.to_string(),
            nickname: Some(format!("{username} nick")),
            gender: Some(1),
            password: "hash".to_string(),
            dept_id: None,
            avatar: None,
            mobile: Some("13800000000".to_string()),
            status: 1,
            email: None,
            openid: Some("openid-1".to_string()),
            create_by: None,
            create_time: NaiveDate::from_ymd_opt(2024, 1, 15)
                .and_then(|d| d.and_hms_opt(8, 30, 0))
                .expect("valid date"),
            update_by: None,
            update_time: None,
            is_deleted: 0,
        };
        sys_user::Entity::insert(sys_user::ActiveModel::from(model).reset_all())
            .exec_without_returning(db)
            .await
            .expect("insert user");
        id
    }

    async fn seed_dict_item(db: &DatabaseConnection, value: &str, label: &str) {
        let model = sys_dict_item::Model {
            id: generate_uuid_v7(),
            dict_code: Some("gender".to_string()),
            value: Some(value.to_string()),
            label: Some(label.to_string()),
            tag_type: Some("primary".to_string()),
            status: 1,
            sort: value.parse().unwrap_or(0),
            remark: None,
            create_time: NaiveDate::from_ymd_opt(2024, 1, 1)
                .and_then(|d| d.and_hms_opt(0, 0, 0))
                .expect("valid date"),
            update_time: None,
        };
        sys_dict_item::Entity::insert(sys_dict_item::ActiveModel::from(model).reset_all())
            .exec_without_returning(db)
            .await
            .expect("insert dict item");
    }

    fn server(db: DatabaseConnection) -> TestServer {
        let args = Args::parse_from(["rbac-admin-api", "--server-root-path", "/api/v1"]);
        let service = Service::new(
            PostgresUserRepository::new(db.clone()),
            PostgresDictRepository::new(db),
        );
        let app = router(AppState::new(Arc::new(args), service)).expect("router");
        TestServer::new(app).expect("test server")
    }

    #[tokio::test]
    async fn test_list_users_with_filters() {
        let db = connect().await;
        seed_user(&db, "alice").await;
        seed_user(&db, "bob").await;
        let server = server(db);

        let response = server
            .get("/api/v1/users/list")
            .add_query_param("username__like", "ALI")
            .add_query_param("unknown__eq", "ignored")
            .await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["total"], json!(1));
        assert_eq!(body["data"][0]["username"], json!("alice"));
        assert_eq!(body["data"][0]["createTime"], json!("2024-01-15T08:30:00"));
    }

    #[tokio::test]
    async fn test_list_users_unknown_format_is_rejected() {
        let server = server(connect().await);

        let response = server
            .get("/api/v1/users/list")
            .add_query_param("format", "summary")
            .await;
        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["code"], json!("E_BAD_REQUEST"));
        assert_eq!(body["status"], json!(400));
    }

    #[tokio::test]
    async fn test_get_user_views() {
        let db = connect().await;
        let id = seed_user(&db, "alice").await;
        let server = server(db);

        let me: Value = server
            .get(&format!("/api/v1/users/{id}"))
            .add_query_param("format", "me_response")
            .await
            .json();
        assert_eq!(me["userId"], json!(id.to_string()));
        assert_eq!(me["roles"], json!([]));

        let form: Value = server.get(&format!("/api/v1/users/{id}/form")).await.json();
        assert_eq!(form["openId"], json!("openid-1"));
        assert_eq!(form["roleIds"], json!([]));
    }

    #[tokio::test]
    async fn test_missing_user_is_not_found() {
        let server = server(connect().await);

        let response = server
            .get(&format!("/api/v1/users/{}", Uuid::new_v4()))
            .await;
        assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_dict_items_and_options() {
        let db = connect().await;
        seed_dict_item(&db, "1", "Male").await;
        seed_dict_item(&db, "2", "Female").await;
        let server = server(db);

        let options: Value = server
            .get("/api/v1/dicts/gender/items/options")
            .await
            .json();
        assert_eq!(
            options["data"],
            json!([
                {"value": "1", "label": "Male", "tagType": "primary"},
                {"value": "2", "label": "Female", "tagType": "primary"},
            ])
        );

        let items: Value = server.get("/api/v1/dicts/gender/items").await.json();
        assert_eq!(items["data"][0]["dictCode"], json!("gender"));
    }

    #[tokio::test]
    async fn test_blank_dict_code_is_bad_request() {
        let server = server(connect().await);

        let response = server.get("/api/v1/dicts/%20/items/options").await;
        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["message"], json!("dict code must not be empty"));
    }

    #[tokio::test]
    async fn test_dict_types_page() {
        let server = server(connect().await);

        let response = server
            .get("/api/v1/dicts/types")
            .add_query_param("limit", "5")
            .await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["total"], json!(0));
        assert_eq!(body["limit"], json!(5));
    }
}
