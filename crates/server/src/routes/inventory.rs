use axum::{extract::{Path, State}, Json};

use service::inventory::domain::Item;
use service::pagination::PageRequest;
use service::response::{PaginatedResponse, RestResponse};

use crate::errors::ApiError;
use crate::extract::{EnvelopeQuery, ValidatedJson};
use crate::routes::auth::ServerState;

#[utoipa::path(post, path = "/inventory", tag = "inventory", request_body = crate::openapi::ItemDoc, responses((status = 200, description = "Created"), (status = 404, description = "Unknown category"), (status = 409, description = "Duplicate barcode")))]
pub async fn create_item(
    State(state): State<ServerState>,
    ValidatedJson(item): ValidatedJson<Item>,
) -> Result<Json<RestResponse<Item>>, ApiError> {
    Ok(Json(state.inventory.create_item(item).await?))
}

#[utoipa::path(get, path = "/inventory", tag = "inventory", params(("page" = Option<u64>, Query, description = "0-based page index"), ("size" = Option<u64>, Query, description = "page size, 1-100")), responses((status = 200, description = "Page of items")))]
pub async fn list_items(
    State(state): State<ServerState>,
    EnvelopeQuery(page): EnvelopeQuery<PageRequest>,
) -> Result<Json<PaginatedResponse<Item>>, ApiError> {
    Ok(Json(state.inventory.find_paginated_inventories(page).await?))
}

#[utoipa::path(get, path = "/inventory/{barcode}", tag = "inventory", params(("barcode" = String, Path, description = "item barcode")), responses((status = 200, description = "Item with categories"), (status = 404, description = "Not found")))]
pub async fn get_item(
    State(state): State<ServerState>,
    Path(barcode): Path<String>,
) -> Result<Json<RestResponse<Item>>, ApiError> {
    Ok(Json(state.inventory.find_item_by_barcode(&barcode).await?))
}
