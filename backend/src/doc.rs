//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the product endpoints, the health probes and the
//! domain schemas they return. The document backs Swagger UI in debug builds
//! and is exported by `cargo run --bin openapi-dump` for external tooling.

use utoipa::OpenApi;

use crate::domain::catalogue::{Product, ProductId};
use crate::domain::{Error, ErrorCode};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Existence storefront API",
        description = "Read-only product catalogue and health probes.",
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::products::list_products,
        crate::inbound::http::products::get_product,
        crate::inbound::http::products::list_by_category,
        crate::inbound::http::products::list_featured,
        crate::inbound::http::products::list_popular,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(Product, ProductId, Error, ErrorCode)),
    tags(
        (name = "products", description = "Catalogue queries"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying OpenAPI schema field structure.

    use super::*;
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[rstest]
    #[case("Product", "colorIndicator")]
    #[case("Product", "downloadUrl")]
    #[case("Product", "featured")]
    #[case("Error", "code")]
    #[case("Error", "traceId")]
    fn schemas_use_wire_field_names(#[case] schema: &str, #[case] field: &str) {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;

        assert_object_schema_has_field(schemas.get(schema).expect("schema registered"), field);
    }

    #[rstest]
    #[case("/api/products")]
    #[case("/api/products/{id}")]
    #[case("/api/products/category/{name}")]
    #[case("/api/products/filter/featured")]
    #[case("/api/products/filter/popular")]
    #[case("/health/ready")]
    fn every_route_is_documented(#[case] path: &str) {
        let doc = ApiDoc::openapi();

        assert!(doc.paths.paths.contains_key(path), "missing {path}");
    }
}
