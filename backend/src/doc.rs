//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint from the inbound layer together
//! with the user record and response wrapper schemas. Swagger UI serves the
//! generated document in debug builds.

use utoipa::OpenApi;

use crate::domain::{User, UserDraft, UserPatchDraft};
use crate::inbound::http::users::{SingleUser, UsersList};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Users service API",
        description = "CRUD interface over the users_list collection, plus health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::greeting::greet,
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(User, UserDraft, UserPatchDraft, UsersList, SingleUser)),
    tags(
        (name = "users", description = "Operations on user records"),
        (name = "health", description = "Endpoints for health checks"),
        (name = "greeting", description = "Root greeting")
    )
)]
pub struct ApiDoc;
