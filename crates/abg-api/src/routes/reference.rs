use axum::Json;

use abg_engine::reference::{NamedRange, normal_ranges};

pub async fn list_ranges() -> Json<Vec<NamedRange>> {
    Json(normal_ranges().to_vec())
}
