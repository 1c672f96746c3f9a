//! Exercise log retrieval handler.
//!
//! ```text
//! GET /api/users/{id}/logs?from=2023-01-01&to=2023-01-31&limit=2
//! ```

use actix_web::{get, web};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, LogQuery, filter_log};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_optional_date, parse_optional_limit};

/// Raw query parameters; parsed into a [`LogQuery`] with field-tagged errors.
#[derive(Debug, Default, Deserialize)]
pub struct LogParams {
    pub from: Option<String>,
    pub to: Option<String>,
    pub limit: Option<String>,
}

/// A single formatted log entry.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LogEntryBody {
    pub description: String,
    pub duration: i64,
    #[schema(example = "Sun Jan 15 2023")]
    pub date: String,
}

/// The filtered, truncated, formatted log for one user.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LogResponse {
    pub username: String,
    pub count: usize,
    pub id: String,
    pub log: Vec<LogEntryBody>,
}

/// Return a user's exercise log, windowed by `from`/`to` and truncated by
/// `limit`.
#[utoipa::path(
    get,
    path = "/api/users/{id}/logs",
    params(
        ("id" = String, Path, description = "User identifier"),
        ("from" = Option<String>, Query, description = "Inclusive lower date bound (YYYY-MM-DD)"),
        ("to" = Option<String>, Query, description = "Inclusive upper date bound (YYYY-MM-DD)"),
        ("limit" = Option<u32>, Query, description = "Keep only the first N surviving entries")
    ),
    responses(
        (status = 200, description = "Filtered log", body = LogResponse),
        (status = 400, description = "Malformed id or query parameter", body = Error),
        (status = 404, description = "Unknown user", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["exercises"],
    operation_id = "getLogs"
)]
#[get("/api/users/{id}/logs")]
pub async fn get_logs(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    params: web::Query<LogParams>,
) -> ApiResult<web::Json<LogResponse>> {
    let user = state.load_user(&path.into_inner()).await?;

    let LogParams { from, to, limit } = params.into_inner();
    let query = LogQuery {
        from: parse_optional_date(from, FieldName::new("from"))?,
        to: parse_optional_date(to, FieldName::new("to"))?,
        limit: parse_optional_limit(limit)?,
    };

    let log: Vec<LogEntryBody> = filter_log(user.exercises(), &query, Utc::now().date_naive())
        .into_iter()
        .map(|exercise| LogEntryBody {
            description: exercise.description().to_string(),
            duration: exercise.duration().minutes(),
            date: exercise.date_string(),
        })
        .collect();

    Ok(web::Json(LogResponse {
        username: user.username().to_string(),
        count: log.len(),
        id: user.id().to_string(),
        log,
    }))
}
