//! OpenAPI documentation configuration.
//!
//! Registers every HTTP endpoint and its request/response schemas. The
//! generated document backs Swagger UI in debug builds.

use utoipa::OpenApi;

use crate::domain::{Error, ErrorCode};
use crate::inbound::http::exercises::{AddExerciseRequest, AddExerciseResponse};
use crate::inbound::http::files::FileAnalysisResponse;
use crate::inbound::http::logs::{LogEntryBody, LogResponse};
use crate::inbound::http::users::{
    CreateUserRequest, CreateUserResponse, ExerciseRecordBody, UserRecordBody,
};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Exercise tracker API",
        description = "Register users, record exercises, and query filtered exercise logs."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::list_users,
        crate::inbound::http::exercises::add_exercise,
        crate::inbound::http::logs::get_logs,
        crate::inbound::http::files::analyse_file,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Error,
        ErrorCode,
        CreateUserRequest,
        CreateUserResponse,
        UserRecordBody,
        ExerciseRecordBody,
        AddExerciseRequest,
        AddExerciseResponse,
        LogEntryBody,
        LogResponse,
        FileAnalysisResponse,
    )),
    tags(
        (name = "users", description = "User registration and listing"),
        (name = "exercises", description = "Exercise recording and log queries"),
        (name = "files", description = "Upload metadata echo"),
        (name = "health", description = "Liveness and readiness probes")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
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

    #[test]
    fn openapi_lists_every_endpoint() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/users",
            "/api/users/{id}/exercises",
            "/api/users/{id}/logs",
            "/api/fileanalyse",
            "/health/ready",
            "/health/live",
        ] {
            assert!(
                doc.paths.paths.contains_key(path),
                "missing path '{path}' in OpenAPI document"
            );
        }
    }

    #[test]
    fn openapi_error_schema_has_required_fields() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let error_schema = schemas.get("Error").expect("Error schema");

        assert_object_schema_has_field(error_schema, "code");
        assert_object_schema_has_field(error_schema, "message");
    }
}
