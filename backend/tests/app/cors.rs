use crate::helpers::spawn_app;
use hyper::StatusCode;

// Must match EnvConf::test_default().frontend_url
const ALLOWED_ORIGIN: &str = "http://localhost:5173";

#[tokio::test]
async fn configured_origin_is_allowed_with_credentials() {
    let app = spawn_app().await;

    let r = app
        .get("/api/config/paypal")
        .header("Origin", ALLOWED_ORIGIN)
        .send()
        .await
        .unwrap();

    let headers = r.headers();
    assert_eq!(
        headers.get("access-control-allow-origin").unwrap(),
        ALLOWED_ORIGIN
    );
    assert_eq!(
        headers.get("access-control-allow-credentials").unwrap(),
        "true"
    );
}

#[tokio::test]
async fn other_origins_get_no_cors_headers() {
    let app = spawn_app().await;

    let r = app
        .get("/api/config/paypal")
        .header("Origin", "https://evil.example.com")
        .send()
        .await
        .unwrap();

    assert_eq!(r.status(), StatusCode::OK);
    assert!(r.headers().get("access-control-allow-origin").is_none());
}

#[tokio::test]
async fn preflight_allows_configured_methods() {
    let app = spawn_app().await;

    let r = app
        .api_client
        .request(
            reqwest::Method::OPTIONS,
            format!("{}/api/products", app.address),
        )
        .header("Origin", ALLOWED_ORIGIN)
        .header("Access-Control-Request-Method", "POST")
        .send()
        .await
        .unwrap();

    assert_eq!(r.status(), StatusCode::OK);
    assert_eq!(
        r.headers().get("access-control-allow-origin").unwrap(),
        ALLOWED_ORIGIN
    );
}
