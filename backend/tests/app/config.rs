use crate::helpers::{spawn_app, spawn_app_with};
use backend::conf::EnvConf;
use hyper::StatusCode;

#[tokio::test]
async fn health_check_works() {
    let app = spawn_app().await;

    let r = app.get("/api/health_check").send().await.unwrap();

    assert_eq!(r.status(), StatusCode::OK);
}

#[tokio::test]
async fn paypal_config_returns_configured_client_id() {
    let mut env_conf = EnvConf::test_default();
    env_conf.paypal_client_id = Some("abc123".into());
    let app = spawn_app_with(env_conf).await;

    let r = app.get("/api/config/paypal").send().await.unwrap();

    assert_eq!(r.status(), StatusCode::OK);
    let body: serde_json::Value = r.json().await.unwrap();
    assert_eq!(body, serde_json::json!({ "clientId": "abc123" }));
}

#[tokio::test]
async fn paypal_config_serves_empty_object_when_unset() {
    let app = spawn_app().await;

    let r = app.get("/api/config/paypal").send().await.unwrap();

    assert_eq!(r.status(), StatusCode::OK);
    assert_eq!(r.text().await.unwrap(), "{}");
}
