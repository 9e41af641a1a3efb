use crate::routes::imports::*;

#[derive(Debug, Serialize, FromRow)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub is_admin: bool,
}

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_users))
        .route("/:id", get(get_user))
}

async fn list_users(Extension(state): Extension<AppState>) -> ApiResult<Json<Vec<User>>> {
    let users =
        sqlx::query_as::<_, User>("SELECT id, username, email, is_admin FROM users ORDER BY id")
            .fetch_all(&state.db)
            .await?;

    Ok(Json(users))
}

async fn get_user(
    Extension(state): Extension<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<User>> {
    let user =
        sqlx::query_as::<_, User>("SELECT id, username, email, is_admin FROM users WHERE id = $1")
            .bind(id)
            .fetch_one(&state.db)
            .await?;

    Ok(Json(user))
}
