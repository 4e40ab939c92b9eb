use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct SignUpDoc {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: i32,
    pub first_name: String,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
}

#[derive(ToSchema)]
pub struct SignInDoc { pub username: Option<String>, pub email: Option<String>, pub password: String }

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct ItemDoc {
    pub barcode: String,
    pub item_name: String,
    pub description: Option<String>,
    pub quantity: i32,
    pub buying_price: f64,
    pub selling_price: f64,
    pub categories: Option<Vec<String>>,
}

#[derive(ToSchema)]
pub struct CategoryDoc { pub name: String }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::auth::sign_up,
        crate::routes::auth::sign_in,
        crate::routes::inventory::create_item,
        crate::routes::inventory::list_items,
        crate::routes::inventory::get_item,
        crate::routes::category::create_category,
    ),
    components(schemas(HealthResponse, SignUpDoc, SignInDoc, ItemDoc, CategoryDoc)),
    tags((name = "health"), (name = "auth"), (name = "inventory"), (name = "category"))
)]
pub struct ApiDoc;
