//! User registration and listing handlers.
//!
//! ```text
//! POST /api/users {"username":"alice"}
//! GET /api/users
//! ```

use actix_web::{HttpResponse, get, post, web};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::{Error, User, Username};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::map_store_error;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, missing_field_error};

/// Registration request body, accepted as JSON or a form post.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateUserRequest {
    pub username: Option<String>,
}

/// Registration response: the echoed username and the freshly minted id.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateUserResponse {
    pub username: String,
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub id: String,
}

/// Full user record returned by the listing endpoint, exercises included.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserRecordBody {
    pub id: String,
    pub username: String,
    pub exercises: Vec<ExerciseRecordBody>,
}

/// Stored exercise as listed verbatim (ISO date, unformatted).
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ExerciseRecordBody {
    pub description: String,
    pub duration: i64,
    #[schema(value_type = String, example = "2023-01-15")]
    pub date: NaiveDate,
}

impl From<&User> for UserRecordBody {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().to_string(),
            username: user.username().to_string(),
            exercises: user
                .exercises()
                .iter()
                .map(|exercise| ExerciseRecordBody {
                    description: exercise.description().to_string(),
                    duration: exercise.duration().minutes(),
                    date: exercise.date(),
                })
                .collect(),
        }
    }
}

/// Register a new user with an empty exercise history.
///
/// Duplicate usernames are allowed; each registration mints a fresh id.
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User registered", body = CreateUserResponse),
        (status = 400, description = "Missing or blank username", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/api/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Either<web::Json<CreateUserRequest>, web::Form<CreateUserRequest>>,
) -> ApiResult<HttpResponse> {
    let CreateUserRequest { username } = payload.into_inner();
    let username = username
        .ok_or_else(|| missing_field_error(FieldName::new("username")))
        .and_then(|raw| {
            Username::new(raw).map_err(|err| {
                Error::invalid_request(err.to_string())
                    .with_details(json!({ "field": "username", "code": "empty_username" }))
            })
        })?;

    let user = User::register(username);
    state.users.insert(&user).await.map_err(map_store_error)?;
    tracing::debug!(user_id = %user.id(), "user registered");

    Ok(HttpResponse::Created().json(CreateUserResponse {
        username: user.username().to_string(),
        id: user.id().to_string(),
    }))
}

/// List every user record verbatim, full exercise lists included.
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "All user records", body = [UserRecordBody]),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/api/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<UserRecordBody>>> {
    let users = state.users.find_all().await.map_err(map_store_error)?;
    Ok(web::Json(users.iter().map(UserRecordBody::from).collect()))
}
