use utoipa::{OpenApi, ToSchema};

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct ProductDoc {
    pub id: i32,
    pub name: String,
    pub last_name: String,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct ProductInputDoc {
    pub name: String,
    pub last_name: String,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct ProductPageDoc {
    pub total_count: u64,
    pub total_pages: u64,
    pub products: Vec<ProductDoc>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::products::list,
        crate::products::create,
        crate::products::update,
        crate::products::delete,
    ),
    components(schemas(ProductDoc, ProductInputDoc, ProductPageDoc)),
    tags(
        (name = "health"),
        (name = "product")
    )
)]
pub struct ApiDoc;
