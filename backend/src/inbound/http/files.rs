//! File analysis handler: echo upload metadata without reading content.
//!
//! ```text
//! POST /api/fileanalyse (multipart field "upfile")
//! ```

use actix_multipart::form::{MultipartForm, bytes::Bytes as UploadedBytes};
use actix_web::{post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::Error;
use crate::inbound::http::ApiResult;

/// Content type reported when the client does not declare one, matching the
/// multipart default.
const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// Multipart form carrying the single analysed file.
///
/// The upload is buffered fully in memory; only its metadata is ever read.
#[derive(Debug, MultipartForm)]
pub struct FileAnalysisForm {
    pub upfile: Option<UploadedBytes>,
}

/// Metadata echoed back for the uploaded file.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FileAnalysisResponse {
    pub name: String,
    #[serde(rename = "type")]
    #[schema(example = "text/plain")]
    pub content_type: String,
    pub size: usize,
}

/// Report name, content type, and size of the uploaded `upfile` field.
#[utoipa::path(
    post,
    path = "/api/fileanalyse",
    request_body(content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Upload metadata", body = FileAnalysisResponse),
        (status = 400, description = "No file uploaded", body = Error)
    ),
    tags = ["files"],
    operation_id = "analyseFile"
)]
#[post("/api/fileanalyse")]
pub async fn analyse_file(
    MultipartForm(form): MultipartForm<FileAnalysisForm>,
) -> ApiResult<web::Json<FileAnalysisResponse>> {
    let Some(upload) = form.upfile else {
        return Err(Error::invalid_request("no file uploaded")
            .with_details(json!({ "field": "upfile", "code": "missing_field" })));
    };

    Ok(web::Json(FileAnalysisResponse {
        name: upload.file_name.unwrap_or_default(),
        content_type: upload
            .content_type
            .map_or_else(|| FALLBACK_CONTENT_TYPE.to_owned(), |mime| mime.to_string()),
        size: upload.data.len(),
    }))
}
