use axum::{extract::State, Json};

use service::category::CategoryRequest;
use service::response::RestResponse;

use crate::errors::ApiError;
use crate::extract::ValidatedJson;
use crate::routes::auth::ServerState;

#[utoipa::path(post, path = "/category", tag = "category", request_body = crate::openapi::CategoryDoc, responses((status = 200, description = "Created"), (status = 409, description = "Duplicate name")))]
pub async fn create_category(
    State(state): State<ServerState>,
    ValidatedJson(req): ValidatedJson<CategoryRequest>,
) -> Result<Json<RestResponse<()>>, ApiError> {
    Ok(Json(state.category.create_category(req).await?))
}
