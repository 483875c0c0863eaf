//! Custom Axum extractors

use axum::extract::{FromRequest, Multipart, Request};
use axum::http::header::CONTENT_TYPE;
use axum::Form;
use serde::Deserialize;

use super::error::ApiError;

/// Title and body of a submitted post.
///
/// Read from urlencoded or multipart bodies. Missing fields, and bodies of
/// any other content type, yield empty strings.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct PostFields {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Default, Deserialize)]
struct RawFields {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    body: Option<String>,
}

impl From<RawFields> for PostFields {
    fn from(raw: RawFields) -> Self {
        Self {
            title: raw.title.unwrap_or_default(),
            body: raw.body.unwrap_or_default(),
        }
    }
}

impl<S> FromRequest<S> for PostFields
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let mime = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(';').next())
            .map(|v| v.trim().to_ascii_lowercase())
            .unwrap_or_default();

        let raw = match mime.as_str() {
            "application/x-www-form-urlencoded" => {
                let Form(raw) = Form::<RawFields>::from_request(req, state)
                    .await
                    .map_err(|e| ApiError::Form(e.body_text()))?;
                raw
            }
            "multipart/form-data" => {
                let multipart = Multipart::from_request(req, state)
                    .await
                    .map_err(|e| ApiError::Form(e.body_text()))?;
                read_multipart(multipart).await?
            }
            _ => RawFields::default(),
        };

        Ok(raw.into())
    }
}

// first occurrence of a field wins
async fn read_multipart(mut multipart: Multipart) -> Result<RawFields, ApiError> {
    let mut raw = RawFields::default();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::Form(e.body_text()))?
    {
        let slot = match field.name() {
            Some("title") => &mut raw.title,
            Some("body") => &mut raw.body,
            _ => continue,
        };
        if slot.is_none() {
            let text = field.text().await.map_err(|e| ApiError::Form(e.body_text()))?;
            *slot = Some(text);
        }
    }
    Ok(raw)
}
