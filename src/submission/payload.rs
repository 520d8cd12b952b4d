// SPDX-License-Identifier: MPL-2.0
//! Multipart payload of a contact submission and the upload itself.

use super::{ContactForm, FormField};
use crate::api::endpoints::SUBMISSION_PATH;
use crate::api::{Attachment, Gateway, Request, RequestBody};
use crate::config::{ATTACHMENT_FIELD, ATTACHMENT_FILENAME, ATTACHMENT_MIME};
use crate::error::Result;
use std::path::Path;

/// Validated form values plus the image to attach.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionPayload {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    /// Source of the attachment bytes: an `http(s)` URL, a `file://` URL or
    /// a local path.
    pub image_url: String,
}

impl SubmissionPayload {
    #[must_use]
    pub fn new(form: &ContactForm, image_url: &str) -> Self {
        Self {
            first_name: form.first_name.clone(),
            last_name: form.last_name.clone(),
            email: form.email.clone(),
            phone: form.phone.clone(),
            image_url: image_url.to_string(),
        }
    }

    fn value(&self, field: FormField) -> &str {
        match field {
            FormField::FirstName => &self.first_name,
            FormField::LastName => &self.last_name,
            FormField::Email => &self.email,
            FormField::Phone => &self.phone,
        }
    }

    /// Builds the submission request around already loaded image bytes.
    #[must_use]
    pub fn to_request(&self, image: Vec<u8>) -> Request {
        let body = FormField::ALL
            .into_iter()
            .fold(RequestBody::new(), |body, field| {
                body.text(field.wire_name(), self.value(field))
            })
            .attach(Attachment {
                field: ATTACHMENT_FIELD.to_string(),
                filename: ATTACHMENT_FILENAME.to_string(),
                mime: ATTACHMENT_MIME.to_string(),
                bytes: image,
            });

        Request::post(SUBMISSION_PATH).with_body(body)
    }
}

/// Reads the bytes behind `source`.
pub async fn load_attachment(gateway: &dyn Gateway, source: &str) -> Result<Vec<u8>> {
    if source.starts_with("http://") || source.starts_with("https://") {
        return gateway.download(source).await;
    }
    let path = source.strip_prefix("file://").unwrap_or(source);
    Ok(tokio::fs::read(Path::new(path)).await?)
}

/// Uploads `payload`. The response body is not inspected.
pub async fn submit(gateway: &dyn Gateway, payload: SubmissionPayload) -> Result<()> {
    let image = load_attachment(gateway, &payload.image_url).await?;
    tracing::debug!(bytes = image.len(), "attachment loaded");

    let response = gateway.request(payload.to_request(image)).await?;
    tracing::trace!(?response, "submission response");
    Ok(())
}
