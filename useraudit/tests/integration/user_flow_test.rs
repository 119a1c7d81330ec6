//! 実SQLite + モック監査サービスでのエンドツーエンド

use std::time::Duration;

use axum::{http::StatusCode, Router};
use serde_json::{json, Value};
use useraudit::config::{AppConfig, AuditConfig, ServerConfig, StorageConfig};
use useraudit::{api, AppState};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

use crate::support::http::{get_user, post_user_json};
use crate::support::sqlite::{count_users, create_users_db, seed_user};

fn build_app(database_url: &str, audit_url: String) -> Router {
    let config = AppConfig {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        storage: StorageConfig {
            database_url: database_url.to_string(),
        },
        audit: AuditConfig {
            url: audit_url,
            timeout: Duration::from_secs(5),
        },
    };
    api::create_router(AppState::from_config(&config).unwrap())
}

async fn audit_server() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/audit"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;
    server
}

async fn received_bodies(server: &MockServer) -> Vec<Value> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .map(|req: &Request| serde_json::from_slice(&req.body).unwrap())
        .collect()
}

/// 作成したユーザーをそのまま取得でき、2件の監査ログが同じ内容を運ぶ
#[tokio::test]
async fn test_create_then_get() {
    let dir = tempfile::tempdir().unwrap();
    let database_url = create_users_db(dir.path()).await;
    let server = audit_server().await;
    let app = build_app(&database_url, format!("{}/audit", server.uri()));

    let (status, created) = post_user_json(&app, &json!({"name": "grrr"})).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["name"], "grrr");
    let id = created["id"].as_i64().unwrap();

    let (status, fetched) = get_user(&app, &id.to_string()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let bodies = received_bodies(&server).await;
    assert_eq!(bodies.len(), 2);
    assert_eq!(bodies[0]["action"], "CREATE_USER");
    assert_eq!(bodies[0]["detail"], created);
    assert_eq!(bodies[1]["action"], "GET_USER");
    assert_eq!(bodies[1]["detail"], created);
    for body in &bodies {
        assert!(body["timestamp"].as_str().unwrap().starts_with("20"));
    }
}

/// 既存行の取得
#[tokio::test]
async fn test_get_seeded_user() {
    let dir = tempfile::tempdir().unwrap();
    let database_url = create_users_db(dir.path()).await;
    seed_user(&database_url, 99, "Alice").await;
    let server = audit_server().await;
    let app = build_app(&database_url, format!("{}/audit", server.uri()));

    let (status, body) = get_user(&app, "99").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"id": 99, "name": "Alice"}));
    let bodies = received_bodies(&server).await;
    assert_eq!(bodies.len(), 1);
    assert_eq!(bodies[0]["detail"], json!({"id": 99, "name": "Alice"}));
}

/// 404と400では監査ログも行の追加も起きない
#[tokio::test]
async fn test_rejections_have_no_side_effects() {
    let dir = tempfile::tempdir().unwrap();
    let database_url = create_users_db(dir.path()).await;
    let server = audit_server().await;
    let app = build_app(&database_url, format!("{}/audit", server.uri()));

    let (status, _) = get_user(&app, "999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = post_user_json(&app, &json!({"country": "taiwan"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    assert_eq!(count_users(&database_url).await, 0);
    assert!(received_bodies(&server).await.is_empty());
}

/// IDは一意で単調増加
#[tokio::test]
async fn test_generated_ids_are_unique() {
    let dir = tempfile::tempdir().unwrap();
    let database_url = create_users_db(dir.path()).await;
    let server = audit_server().await;
    let app = build_app(&database_url, format!("{}/audit", server.uri()));

    let mut ids = Vec::new();
    for name in ["a", "b", "c"] {
        let (_, body) = post_user_json(&app, &json!({ "name": name })).await;
        ids.push(body["id"].as_i64().unwrap());
    }

    assert!(ids.windows(2).all(|w| w[1] > w[0]));
    assert_eq!(count_users(&database_url).await, 3);
}

/// テーブルがないDBではストレージエラーとして500になる
#[tokio::test]
async fn test_missing_database_is_500() {
    let dir = tempfile::tempdir().unwrap();
    let database_url = format!("sqlite://{}", dir.path().join("absent.db").display());
    let server = audit_server().await;
    let app = build_app(&database_url, format!("{}/audit", server.uri()));

    let (status, body) = get_user(&app, "1").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"message": "Internal server error"}));

    let (status, _) = post_user_json(&app, &json!({"name": "grrr"})).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    assert!(received_bodies(&server).await.is_empty());
}
