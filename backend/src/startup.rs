use crate::conf::Conf;
use crate::state::AppState;

use axum::extract::{DefaultBodyLimit, Extension};
use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::routing::get;
use axum::{Json, Router};

use serde::Serialize;
use std::sync::Arc;
use tower_http::{
    add_extension::AddExtensionLayer,
    compression::CompressionLayer,
    cors::CorsLayer,
    services::ServeDir,
    trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer},
    LatencyUnit, ServiceBuilderExt,
};

// Uploads are images; anything bigger than this is not one.
const BODY_LIMIT: usize = 10 * 1024 * 1024;

#[derive(Clone, Default)]
pub struct RequestIdProducer {
    counter: Arc<std::sync::atomic::AtomicU64>,
}

impl tower_http::request_id::MakeRequestId for RequestIdProducer {
    fn make_request_id<B>(
        &mut self,
        _request: &hyper::http::Request<B>,
    ) -> Option<tower_http::request_id::RequestId> {
        let request_id = self
            .counter
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst)
            .to_string()
            .parse()
            .unwrap();

        Some(tower_http::request_id::RequestId::new(request_id))
    }
}

pub fn router(conf: &Conf, state: AppState) -> Router {
    use crate::routes;

    let api_router = Router::new()
        .route("/health_check", get(health_check))
        .route("/config/paypal", get(paypal_config))
        .nest("/users", routes::users::router())
        .nest("/category", routes::category::router())
        .nest("/products", routes::products::router())
        .nest("/upload", routes::upload::router())
        .nest("/orders", routes::orders::router());

    // Browsers only get to call this API from the configured frontend,
    // and they may send cookies when doing so.
    let cors_layer = CorsLayer::new()
        .allow_origin(
            conf.env_conf
                .frontend_url
                .parse::<HeaderValue>()
                .expect("valid frontend origin"),
        )
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION])
        .allow_credentials(true);

    let request_tracing_layer = tower::ServiceBuilder::new()
        .set_x_request_id(RequestIdProducer::default())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &hyper::http::Request<hyper::Body>| {
                    tracing::info_span!(
                        "request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id = ?request.headers().get("x-request-id"),
                    )
                })
                .on_request(DefaultOnRequest::new().level(tracing::Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(tracing::Level::INFO)
                        .latency_unit(LatencyUnit::Millis),
                ),
        )
        .propagate_x_request_id();

    Router::new()
        .nest("/api", api_router)
        .nest_service("/uploads", ServeDir::new(state.uploads_dir.clone()))
        .layer(DefaultBodyLimit::max(BODY_LIMIT))
        .layer(cors_layer)
        .layer(CompressionLayer::new())
        .layer(AddExtensionLayer::new(state))
        .layer(request_tracing_layer)
}

async fn health_check() -> StatusCode {
    StatusCode::OK
}

#[derive(Debug, Serialize)]
pub struct PaypalConfig {
    #[serde(rename = "clientId", skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
}

/// Hands the PayPal client id to the frontend. Public by design of the
/// checkout flow; the id is not a secret.
async fn paypal_config(Extension(state): Extension<AppState>) -> Json<PaypalConfig> {
    Json(PaypalConfig {
        client_id: state.conf.env_conf.paypal_client_id.clone(),
    })
}

pub struct Application {
    host: String,
    port: u16,
    server: std::pin::Pin<Box<dyn std::future::Future<Output = hyper::Result<()>> + Send>>,
}

impl Application {
    pub async fn build(conf: &Conf, state: AppState) -> Self {
        let address = format!("{}:{}", conf.env_conf.host, conf.env_conf.port);
        let listener = std::net::TcpListener::bind(&address).expect("vacant port");
        let host = conf.env_conf.host.clone();
        let port = listener.local_addr().unwrap().port();
        tracing::info!("Serving on http://{}:{}", host, port);

        Self {
            server: Box::pin(
                axum::Server::from_tcp(listener)
                    .unwrap()
                    .serve(router(conf, state).into_make_service()),
            ),
            port,
            host,
        }
    }

    // consumes self, one server max per built application
    pub fn server(
        self,
    ) -> impl std::future::Future<Output = hyper::Result<()>> + Send {
        self.server
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn host(&self) -> &str {
        &self.host
    }
}
