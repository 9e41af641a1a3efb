use crate::routes::imports::*;

#[derive(Debug, Serialize, FromRow)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub image: String,
    pub brand: String,
    pub description: String,
    pub price: f64,
    pub count_in_stock: i32,
}

#[derive(Debug, Deserialize)]
pub struct CreateProduct {
    pub name: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub count_in_stock: i32,
}

const PRODUCT_COLUMNS: &str = "id, name, image, brand, description, price, count_in_stock";

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/:id", get(get_product).delete(delete_product))
}

async fn list_products(Extension(state): Extension<AppState>) -> ApiResult<Json<Vec<Product>>> {
    let query = format!("SELECT {PRODUCT_COLUMNS} FROM products ORDER BY id");
    let products = sqlx::query_as::<_, Product>(&query)
        .fetch_all(&state.db)
        .await?;

    Ok(Json(products))
}

async fn get_product(
    Extension(state): Extension<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<Product>> {
    let query = format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1");
    let product = sqlx::query_as::<_, Product>(&query)
        .bind(id)
        .fetch_one(&state.db)
        .await?;

    Ok(Json(product))
}

async fn create_product(
    Extension(state): Extension<AppState>,
    Json(req): Json<CreateProduct>,
) -> ApiResult<Json<Product>> {
    if req.name.trim().is_empty() {
        return Err(ApiError::bad_request("name is required"));
    }
    if req.price < 0.0 {
        return Err(ApiError::bad_request("price must not be negative"));
    }

    let query = format!(
        "INSERT INTO products (name, image, brand, description, price, count_in_stock) \
         VALUES ($1, $2, $3, $4, $5, $6) RETURNING {PRODUCT_COLUMNS}"
    );
    let product = sqlx::query_as::<_, Product>(&query)
        .bind(req.name.trim())
        .bind(&req.image)
        .bind(&req.brand)
        .bind(&req.description)
        .bind(req.price)
        .bind(req.count_in_stock)
        .fetch_one(&state.db)
        .await?;

    Ok(Json(product))
}

async fn delete_product(
    Extension(state): Extension<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<StatusCode> {
    let result = sqlx::query("DELETE FROM products WHERE id = $1")
        .bind(id)
        .execute(&state.db)
        .await?;

    if result.rows_affected() == 0 {
        return Err(ApiError::not_found("no such product"));
    }

    Ok(StatusCode::NO_CONTENT)
}
