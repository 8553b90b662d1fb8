//! Read-only product endpoints.
//!
//! ```text
//! GET /api/products[?q=<search>]
//! GET /api/products/{id}
//! GET /api/products/category/{name}
//! GET /api/products/filter/featured
//! GET /api/products/filter/popular
//! ```

use actix_web::{get, web};
use serde::Deserialize;
use serde_json::json;
use tracing::debug;
use utoipa::IntoParams;

use crate::domain::Error;
use crate::domain::catalogue::{Product, ProductId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Optional search filter for the product listing.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProductListQuery {
    /// Case-insensitive substring matched against name, description and
    /// category.
    #[param(example = "rust")]
    pub q: Option<String>,
}

/// List the catalogue, optionally filtered by a search term.
#[utoipa::path(
    get,
    path = "/api/products",
    params(ProductListQuery),
    responses(
        (status = 200, description = "Products in catalogue order", body = [Product])
    ),
    tags = ["products"],
    operation_id = "listProducts"
)]
#[get("/products")]
pub async fn list_products(
    state: web::Data<HttpState>,
    query: web::Query<ProductListQuery>,
) -> web::Json<Vec<Product>> {
    web::Json(match query.q.as_deref() {
        Some(term) => state.catalogue.search(term),
        None => state.catalogue.all(),
    })
}

/// Fetch one product by identifier.
#[utoipa::path(
    get,
    path = "/api/products/{id}",
    params(("id" = u32, Path, description = "Product identifier", example = 1)),
    responses(
        (status = 200, description = "Product", body = Product),
        (status = 400, description = "Identifier is not a positive integer", body = Error),
        (status = 404, description = "No product with this identifier", body = Error)
    ),
    tags = ["products"],
    operation_id = "getProduct"
)]
#[get("/products/{id}")]
pub async fn get_product(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Product>> {
    let raw = path.into_inner();
    let id = raw.parse::<ProductId>().map_err(|err| {
        Error::invalid_request("product id must be a positive integer")
            .with_details(json!({ "id": raw, "reason": err.to_string() }))
    })?;
    let product = state.catalogue.by_id(id).ok_or_else(|| {
        debug!(product = %id, "product lookup missed");
        Error::not_found("Product not found").with_details(json!({ "id": id }))
    })?;
    Ok(web::Json(product))
}

/// List products in one category. Unknown categories yield an empty list.
#[utoipa::path(
    get,
    path = "/api/products/category/{name}",
    params(("name" = String, Path, description = "Category label", example = "External Tool")),
    responses(
        (status = 200, description = "Products in the category", body = [Product])
    ),
    tags = ["products"],
    operation_id = "listProductsByCategory"
)]
#[get("/products/category/{name}")]
pub async fn list_by_category(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> web::Json<Vec<Product>> {
    web::Json(state.catalogue.by_category(&path))
}

/// List featured products.
#[utoipa::path(
    get,
    path = "/api/products/filter/featured",
    responses((status = 200, description = "Featured products", body = [Product])),
    tags = ["products"],
    operation_id = "listFeaturedProducts"
)]
#[get("/products/filter/featured")]
pub async fn list_featured(state: web::Data<HttpState>) -> web::Json<Vec<Product>> {
    web::Json(state.catalogue.featured())
}

/// List popular products.
#[utoipa::path(
    get,
    path = "/api/products/filter/popular",
    responses((status = 200, description = "Popular products", body = [Product])),
    tags = ["products"],
    operation_id = "listPopularProducts"
)]
#[get("/products/filter/popular")]
pub async fn list_popular(state: web::Data<HttpState>) -> web::Json<Vec<Product>> {
    web::Json(state.catalogue.popular())
}

/// Register every product route on `cfg`, for mounting under `/api`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_featured)
        .service(list_popular)
        .service(list_by_category)
        .service(get_product)
        .service(list_products);
}
