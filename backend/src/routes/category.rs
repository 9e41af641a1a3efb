use crate::routes::imports::*;

#[derive(Debug, Serialize, FromRow)]
pub struct Category {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateCategory {
    pub name: String,
}

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_categories).post(create_category))
        .route("/:id", get(get_category).delete(delete_category))
}

async fn list_categories(Extension(state): Extension<AppState>) -> ApiResult<Json<Vec<Category>>> {
    let categories = sqlx::query_as::<_, Category>("SELECT id, name FROM categories ORDER BY name")
        .fetch_all(&state.db)
        .await?;

    Ok(Json(categories))
}

async fn create_category(
    Extension(state): Extension<AppState>,
    Json(req): Json<CreateCategory>,
) -> ApiResult<Json<Category>> {
    if req.name.trim().is_empty() {
        return Err(ApiError::bad_request("name is required"));
    }

    let category =
        sqlx::query_as::<_, Category>("INSERT INTO categories (name) VALUES ($1) RETURNING id, name")
            .bind(req.name.trim())
            .fetch_one(&state.db)
            .await?;

    Ok(Json(category))
}

async fn get_category(
    Extension(state): Extension<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<Category>> {
    let category = sqlx::query_as::<_, Category>("SELECT id, name FROM categories WHERE id = $1")
        .bind(id)
        .fetch_one(&state.db)
        .await?;

    Ok(Json(category))
}

async fn delete_category(
    Extension(state): Extension<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<StatusCode> {
    let result = sqlx::query("DELETE FROM categories WHERE id = $1")
        .bind(id)
        .execute(&state.db)
        .await?;

    if result.rows_affected() == 0 {
        return Err(ApiError::not_found("no such category"));
    }

    Ok(StatusCode::NO_CONTENT)
}
