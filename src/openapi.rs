use utoipa::OpenApi;

use crate::errors::ErrorResponse;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Service",
        version = "0.1.0",
        description = "Shared schemas of the user-management service. Every failed request is answered with an ErrorResponse body.",
    ),
    components(
        schemas(
            ErrorResponse,
        )
    ),
    tags(
        (name = "errors", description = "Error payloads returned by the service"),
    )
)]
pub struct ApiDoc;
