// handlers/admin/upload.rs - POST /api/admin/upload handler
use axum::extract::{Multipart, Query, State};

use crate::error::ApiError;
use crate::import;
use crate::AppState;

use super::{require_admin, AdminQuery};

struct UploadedFile {
    file_name: Option<String>,
    content_type: Option<String>,
    data: Vec<u8>,
}

/// Upload a CSV file of questions and persist every row.
///
/// The password may arrive as a query parameter or as a `password` form
/// field; the query parameter wins when both are present. Preconditions are
/// checked in a fixed order: password, file presence, file format. The whole
/// multipart body is read first so a bad password always answers 403 even
/// when the file is also missing or malformed.
pub async fn upload_csv(
    State(state): State<AppState>,
    Query(query): Query<AdminQuery>,
    mut multipart: Multipart,
) -> Result<&'static str, ApiError> {
    let mut password = query.password;
    let mut file: Option<UploadedFile> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| ApiError::bad_request("Invalid multipart request."))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file") => {
                let file_name = field.file_name().map(str::to_string);
                let content_type = field.content_type().map(str::to_string);
                let data = field
                    .bytes()
                    .await
                    .map_err(|_| ApiError::bad_request("Invalid multipart request."))?;
                file = Some(UploadedFile {
                    file_name,
                    content_type,
                    data: data.to_vec(),
                });
            }
            Some("password") => {
                let value = field
                    .text()
                    .await
                    .map_err(|_| ApiError::bad_request("Invalid multipart request."))?;
                if password.is_none() {
                    password = Some(value);
                }
            }
            _ => {}
        }
    }

    require_admin(password.as_deref(), &state)?;

    let file = match file {
        Some(f) if !f.data.is_empty() => f,
        _ => return Err(ApiError::bad_request("No file uploaded.")),
    };

    if !import::has_csv_format(file.content_type.as_deref(), file.file_name.as_deref()) {
        return Err(ApiError::bad_request(
            "Invalid file format. Please upload a CSV file.",
        ));
    }

    let questions = import::parse_questions(&file.data)?;
    state.store.insert_all(questions).await?;

    Ok("CSV file uploaded and questions saved successfully!")
}
