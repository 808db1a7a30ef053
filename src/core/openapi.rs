use utoipa::{Modify, OpenApi};

use crate::features::regions::{dtos as regions_dtos, handlers as regions_handlers};
use crate::shared::types::{ErrorResponse, FieldError};

#[derive(OpenApi)]
#[openapi(
    paths(
        regions_handlers::list_regions,
        regions_handlers::get_region,
        regions_handlers::add_region,
        regions_handlers::update_region,
        regions_handlers::delete_region,
    ),
    components(
        schemas(
            // Shared
            ErrorResponse,
            FieldError,
            // Regions
            regions_dtos::RegionDto,
            regions_dtos::AddRegionRequestDto,
            regions_dtos::UpdateRegionRequestDto,
        )
    ),
    tags(
        (name = "regions", description = "Geographic regions"),
    ),
    info(
        title = "Regions API",
        version = "0.1.0",
        description = "CRUD API for geographic regions",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_documents_region_routes() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/regions"));
        assert!(doc.paths.paths.contains_key("/regions/{id}"));
    }

    #[test]
    fn test_swagger_info_modifier_overrides_info() {
        let mut doc = ApiDoc::openapi();
        SwaggerInfoModifier {
            title: "Custom".to_string(),
            version: "9.9.9".to_string(),
            description: "desc".to_string(),
        }
        .modify(&mut doc);

        assert_eq!(doc.info.title, "Custom");
        assert_eq!(doc.info.version, "9.9.9");
        assert_eq!(doc.info.description.as_deref(), Some("desc"));
    }
}
