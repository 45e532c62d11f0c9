//! Request handlers, one module per resource

pub mod achievements;
pub mod activities;
pub mod auth;
pub mod calendar;
pub mod health;
pub mod ludoteca;
pub mod members;
pub mod profile;

use axum::extract::Multipart;

use crate::response::ApiError;

/// Pull the named file field out of a multipart upload
///
/// Returns the original filename (when the client sent one) and the bytes.
/// A request without that field is a 400.
pub(crate) async fn read_image_field(
    mut multipart: Multipart,
    field_name: &str,
) -> Result<(Option<String>, Vec<u8>), ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(e.to_string()))?
    {
        if field.name() == Some(field_name) {
            let filename = field.file_name().map(ToString::to_string);
            let bytes = field
                .bytes()
                .await
                .map_err(|e| ApiError::bad_request(e.to_string()))?;
            return Ok((filename, bytes.to_vec()));
        }
    }

    Err(ApiError::bad_request("No image uploaded"))
}
