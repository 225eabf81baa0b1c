//! Users API handlers.
//!
//! ```text
//! GET    /users?name=..&job=..
//! GET    /users/{id}
//! POST   /users        {"name":"Harry Potter","job":"Young wizard"}
//! PATCH  /users/{id}   {"job":"Auror"}
//! DELETE /users/{id}
//! ```
//!
//! Every response body is wrapped under a `users_list` key, whether it holds a
//! list or a single record.

use actix_web::{HttpResponse, delete, get, patch, post, web};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};
use utoipa::{IntoParams, ToSchema};

use crate::domain::ports::{InsertError, UpdateOutcome, UserDirectoryError};
use crate::domain::{Error, User, UserDraft, UserPatchDraft};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Optional exact-match filters for `GET /users`.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UsersQuery {
    /// Only users with exactly this name.
    pub name: Option<String>,
    /// Only users with exactly this job.
    pub job: Option<String>,
}

/// Response body of `GET /users`.
#[derive(Debug, Serialize, ToSchema)]
pub struct UsersList {
    pub users_list: Vec<User>,
}

/// Response body of `GET /users/{id}`.
#[derive(Debug, Serialize, ToSchema)]
pub struct SingleUser {
    pub users_list: User,
}

fn map_directory_error(err: UserDirectoryError) -> Error {
    Error::internal(err.to_string())
}

/// List users, optionally filtered by name and/or job.
#[utoipa::path(
    get,
    path = "/users",
    params(UsersQuery),
    responses(
        (status = 200, description = "Matching users", body = UsersList),
        (status = 500, description = "Unreadable query or store failure", body = String, content_type = "text/plain")
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(
    state: web::Data<HttpState>,
    query: Result<web::Query<UsersQuery>, actix_web::Error>,
) -> ApiResult<web::Json<UsersList>> {
    let UsersQuery { name, job } = query.map_err(Error::from)?.into_inner();
    let users = match (name.as_deref(), job.as_deref()) {
        (None, None) => state.users.find_all().await,
        (Some(name), None) => state.users.find_by_name(name).await,
        (None, Some(job)) => state.users.find_by_job(job).await,
        (Some(name), Some(job)) => state.users.find_by_name_and_job(name, job).await,
    }
    .map_err(map_directory_error)?;

    Ok(web::Json(UsersList { users_list: users }))
}

/// Fetch one user by identifier.
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = String, Path, description = "User identifier")),
    responses(
        (status = 200, description = "The user", body = SingleUser),
        (status = 404, description = "Unknown or malformed identifier", body = String, content_type = "text/plain")
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<SingleUser>> {
    let id = path.into_inner();
    let user = state
        .users
        .find_by_id(&id)
        .await
        .ok_or_else(|| Error::not_found(format!("user {id} not found")))?;
    Ok(web::Json(SingleUser { users_list: user }))
}

/// Create a user. The store generates the identifier unless one is supplied.
#[utoipa::path(
    post,
    path = "/users",
    request_body = UserDraft,
    responses(
        (status = 201, description = "User created"),
        (status = 500, description = "Invalid candidate or store failure")
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: Result<web::Json<UserDraft>, actix_web::Error>,
) -> HttpResponse {
    let draft = match payload {
        Ok(payload) => payload.into_inner(),
        Err(err) => {
            warn!(error = %err, "unreadable user payload");
            return HttpResponse::InternalServerError().finish();
        }
    };

    match state.users.insert(draft).await {
        Ok(user) => {
            debug!(id = %user.id(), "user created");
            HttpResponse::Created().finish()
        }
        Err(InsertError::Store(err)) => {
            error!(error = %err, "user creation failed");
            HttpResponse::InternalServerError().finish()
        }
        Err(err) => {
            warn!(error = %err, "user candidate rejected");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// A blank body is an empty patch; anything else must be a JSON object.
fn patch_from_body(body: &[u8]) -> Result<UserPatchDraft, Error> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(UserPatchDraft::default());
    }
    serde_json::from_slice(body).map_err(|err| {
        warn!(error = %err, "unreadable user patch");
        Error::internal(format!("unreadable user patch: {err}"))
    })
}

/// Apply a partial update to a user.
#[utoipa::path(
    patch,
    path = "/users/{id}",
    params(("id" = String, Path, description = "User identifier")),
    request_body = UserPatchDraft,
    responses(
        (status = 204, description = "User updated"),
        (status = 404, description = "No user with this identifier", body = String, content_type = "text/plain"),
        (status = 500, description = "Malformed identifier, invalid field, or store failure", body = String, content_type = "text/plain")
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[patch("/users/{id}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    body: Result<web::Bytes, actix_web::Error>,
) -> ApiResult<HttpResponse> {
    let id = path.into_inner();
    let patch = patch_from_body(&body.map_err(Error::from)?)?;

    match state.users.update_by_id(&id, patch).await {
        UpdateOutcome::Updated(_) => Ok(HttpResponse::NoContent().finish()),
        UpdateOutcome::NotFound => Err(Error::not_found(format!("user {id} not found"))),
        UpdateOutcome::Failed(failure) => {
            error!(%id, error = %failure, "user update failed");
            Err(Error::internal(failure.to_string()))
        }
    }
}

/// Remove a user.
#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(("id" = String, Path, description = "User identifier")),
    responses(
        (status = 204, description = "User removed"),
        (status = 404, description = "Unknown or malformed identifier", body = String, content_type = "text/plain")
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/users/{id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = path.into_inner();
    if state.users.delete_by_id(&id).await {
        Ok(HttpResponse::NoContent().finish())
    } else {
        Err(Error::not_found(format!("user {id} not found")))
    }
}

/// Register every users endpoint on an app or scope.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use users_service::inbound::http::users::configure;
///
/// let _app = App::new().configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_users)
        .service(get_user)
        .service(create_user)
        .service(update_user)
        .service(delete_user);
}
