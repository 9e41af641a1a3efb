#[allow(unused)]
pub use crate::{
    error::{ApiError, ApiResult},
    state::AppState,
};
#[allow(unused)]
pub use axum::{
    extract::{Extension, Json, Multipart, Path},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Router,
};
#[allow(unused)]
pub use serde::{Deserialize, Serialize};
#[allow(unused)]
pub use sqlx::FromRow;
