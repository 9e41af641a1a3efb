use crate::routes::imports::*;

use rand::distributions::Alphanumeric;
use rand::Rng;

const ALLOWED_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "webp"];

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub message: String,
    pub image: String,
}

pub fn router() -> Router {
    Router::new().route("/", post(upload_image))
}

/// Stores the `image` multipart field in the uploads directory and answers
/// with the path the file is served under. The bytes are written verbatim.
async fn upload_image(
    Extension(state): Extension<AppState>,
    mut multipart: Multipart,
) -> ApiResult<Json<UploadResponse>> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(e.to_string()))?
    {
        if field.name() != Some("image") {
            continue;
        }

        let file_name = field.file_name().unwrap_or_default().to_owned();
        let ext = std::path::Path::new(&file_name)
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();
        if !ALLOWED_EXTENSIONS.contains(&ext.as_str()) {
            return Err(ApiError::bad_request("images only (jpg, jpeg, png, webp)"));
        }

        let data = field
            .bytes()
            .await
            .map_err(|e| ApiError::bad_request(e.to_string()))?;

        let name = format!("image-{}.{}", random_suffix(), ext);
        let dest = state.uploads_dir.join(&name);

        tokio::fs::create_dir_all(&state.uploads_dir)
            .await
            .map_err(write_error)?;
        tokio::fs::write(&dest, &data).await.map_err(write_error)?;

        tracing::info!("Stored upload: {}", dest.display());

        return Ok(Json(UploadResponse {
            message: "Image uploaded successfully".into(),
            image: format!("/uploads/{name}"),
        }));
    }

    Err(ApiError::bad_request("no image field in request"))
}

fn write_error(e: std::io::Error) -> ApiError {
    tracing::error!("upload write failed: {e}");
    ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "could not store upload")
}

fn random_suffix() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(10)
        .map(char::from)
        .collect()
}
