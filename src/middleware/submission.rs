use axum::{
    body::Bytes,
    extract::{FromRequest, Multipart, Request},
    http::header::CONTENT_TYPE,
    response::{IntoResponse, Response},
};

use crate::service::submission::{PortfolioSubmission, SubmissionFields};
use crate::service::uploads::AvatarUpload;

/// Form field carrying the optional image.
pub const AVATAR_FIELD: &str = "avatar";

const MULTIPART_FORM_DATA: &str = "multipart/form-data";

/// Media types compare case-insensitively.
fn is_multipart_form(content_type: &str) -> bool {
    content_type
        .get(..MULTIPART_FORM_DATA.len())
        .is_some_and(|essence| essence.eq_ignore_ascii_case(MULTIPART_FORM_DATA))
}

/// Submission form fields plus the optional avatar file.
///
/// Accepts `multipart/form-data`; any other body is parsed as a URL-encoded
/// form, which can't carry a file.
pub struct SubmissionPreprocess(pub PortfolioSubmission, pub Option<AvatarUpload>);

impl<S> FromRequest<S> for SubmissionPreprocess
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_multipart = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(is_multipart_form);

        if !is_multipart {
            let body = Bytes::from_request(req, state)
                .await
                .map_err(IntoResponse::into_response)?;
            let mut fields = SubmissionFields::default();
            for (name, value) in url::form_urlencoded::parse(&body) {
                fields.push(&name, value.into_owned());
            }
            return Ok(SubmissionPreprocess(fields.finish(), None));
        }

        let mut multipart = Multipart::from_request(req, state)
            .await
            .map_err(IntoResponse::into_response)?;

        let mut fields = SubmissionFields::default();
        let mut avatar = None;

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(IntoResponse::into_response)?
        {
            let Some(name) = field.name().map(str::to_owned) else {
                continue;
            };

            if name == AVATAR_FIELD {
                let file_name = field.file_name().map(str::to_owned).unwrap_or_default();
                let bytes = field.bytes().await.map_err(IntoResponse::into_response)?;
                // Browsers send an empty file part when nothing was picked.
                if avatar.is_none() && !file_name.is_empty() {
                    avatar = Some(AvatarUpload { file_name, bytes });
                }
            } else {
                let value = field.text().await.map_err(IntoResponse::into_response)?;
                fields.push(&name, value);
            }
        }

        Ok(SubmissionPreprocess(fields.finish(), avatar))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multipart_detection_ignores_case() {
        assert!(is_multipart_form("multipart/form-data; boundary=x"));
        assert!(is_multipart_form("Multipart/Form-Data; boundary=x"));
        assert!(!is_multipart_form("application/x-www-form-urlencoded"));
        assert!(!is_multipart_form("multipart"));
    }
}
