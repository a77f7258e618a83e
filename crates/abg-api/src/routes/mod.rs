pub mod calculate;
pub mod causes;
pub mod health;
pub mod interpret;
pub mod reference;

use axum::http::Uri;

use crate::error::ApiError;

pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("no route for {}", uri.path()))
}
