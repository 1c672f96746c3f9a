//! Exercise recording handler.
//!
//! ```text
//! POST /api/users/{id}/exercises {"description":"run","duration":30,"date":"2023-01-15"}
//! ```

use actix_web::{post, web};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, Exercise};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::map_store_error;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, IntOrString, parse_description, parse_duration, parse_optional_date,
};

/// Exercise request body, accepted as JSON or a form post.
///
/// `duration` may arrive as a number or a numeric string; `date` is an
/// optional `YYYY-MM-DD` value defaulting to today.
#[derive(Debug, Deserialize, ToSchema)]
pub struct AddExerciseRequest {
    pub description: Option<String>,
    #[schema(value_type = Option<i64>)]
    pub duration: Option<IntOrString>,
    pub date: Option<String>,
}

/// The newly appended exercise echoed together with its owner.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AddExerciseResponse {
    pub username: String,
    pub description: String,
    pub duration: i64,
    #[schema(example = "Sun Jan 15 2023")]
    pub date: String,
    pub id: String,
}

/// Append an exercise to a user's history and persist the updated record.
///
/// Read-then-save with no concurrency guard: simultaneous appends to the
/// same user can lose one entry, an accepted limitation of the document
/// model.
#[utoipa::path(
    post,
    path = "/api/users/{id}/exercises",
    request_body = AddExerciseRequest,
    params(("id" = String, Path, description = "User identifier")),
    responses(
        (status = 200, description = "Exercise recorded", body = AddExerciseResponse),
        (status = 400, description = "Validation failure", body = Error),
        (status = 404, description = "Unknown user", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["exercises"],
    operation_id = "addExercise"
)]
#[post("/api/users/{id}/exercises")]
pub async fn add_exercise(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Either<web::Json<AddExerciseRequest>, web::Form<AddExerciseRequest>>,
) -> ApiResult<web::Json<AddExerciseResponse>> {
    let mut user = state.load_user(&path.into_inner()).await?;

    let AddExerciseRequest {
        description,
        duration,
        date,
    } = payload.into_inner();
    let description = parse_description(description)?;
    let duration = parse_duration(duration)?;
    let date = parse_optional_date(date, FieldName::new("date"))?
        .unwrap_or_else(|| Utc::now().date_naive());

    let exercise = Exercise::new(description, duration, date);
    user.add_exercise(exercise.clone());
    state.users.save(&user).await.map_err(map_store_error)?;
    tracing::debug!(user_id = %user.id(), "exercise recorded");

    Ok(web::Json(AddExerciseResponse {
        username: user.username().to_string(),
        description: exercise.description().to_string(),
        duration: exercise.duration().minutes(),
        date: exercise.date_string(),
        id: user.id().to_string(),
    }))
}
