use crate::routes::imports::*;

#[derive(Debug, Serialize, FromRow)]
pub struct Order {
    pub id: i32,
    pub user_id: i32,
    pub total_price: f64,
    pub is_paid: bool,
    pub is_delivered: bool,
}

#[derive(Debug, Deserialize)]
pub struct CreateOrder {
    pub user_id: i32,
    pub total_price: f64,
}

const ORDER_COLUMNS: &str = "id, user_id, total_price, is_paid, is_delivered";

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_orders).post(create_order))
        .route("/:id", get(get_order))
}

async fn list_orders(Extension(state): Extension<AppState>) -> ApiResult<Json<Vec<Order>>> {
    let query = format!("SELECT {ORDER_COLUMNS} FROM orders ORDER BY id");
    let orders = sqlx::query_as::<_, Order>(&query)
        .fetch_all(&state.db)
        .await?;

    Ok(Json(orders))
}

async fn get_order(
    Extension(state): Extension<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<Order>> {
    let query = format!("SELECT {ORDER_COLUMNS} FROM orders WHERE id = $1");
    let order = sqlx::query_as::<_, Order>(&query)
        .bind(id)
        .fetch_one(&state.db)
        .await?;

    Ok(Json(order))
}

async fn create_order(
    Extension(state): Extension<AppState>,
    Json(req): Json<CreateOrder>,
) -> ApiResult<Json<Order>> {
    if req.total_price < 0.0 {
        return Err(ApiError::bad_request("total must not be negative"));
    }

    let query = format!(
        "INSERT INTO orders (user_id, total_price, is_paid, is_delivered) \
         VALUES ($1, $2, false, false) RETURNING {ORDER_COLUMNS}"
    );
    let order = sqlx::query_as::<_, Order>(&query)
        .bind(req.user_id)
        .bind(req.total_price)
        .fetch_one(&state.db)
        .await?;

    Ok(Json(order))
}
