// SPDX-License-Identifier: MPL-2.0
//! `reqwest`-backed gateway.

use super::{Gateway, Method, Request, RequestBody};
use crate::config::BackendConfig;
use crate::error::{Error, Result};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

const USER_AGENT: &str = concat!("GallerySubmit/", env!("CARGO_PKG_VERSION"));

/// Gateway bound to one backend origin.
#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: Client,
    base_url: String,
}

impl HttpGateway {
    /// Creates a gateway for `base_url`.
    ///
    /// A missing scheme defaults to `http://` and trailing slashes are dropped,
    /// so `localhost:8080/` and `http://localhost:8080` are equivalent.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| Error::Http(e.to_string()))?;

        let base_url = normalize_base_url(base_url);
        tracing::info!(%base_url, ?timeout, "HTTP gateway ready");

        Ok(Self { client, base_url })
    }

    /// Creates a gateway from the `[backend]` config section.
    pub fn from_config(backend: &BackendConfig) -> Result<Self> {
        Self::new(backend.base_url(), backend.timeout())
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Joins an endpoint path onto the base origin.
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[async_trait]
impl Gateway for HttpGateway {
    async fn request(&self, request: Request) -> Result<Value> {
        let url = self.url_for(&request.path);
        tracing::debug!(method = ?request.method, %url, "sending request");

        let mut builder = match request.method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
        };
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = request.body {
            builder = builder.multipart(build_form(body)?);
        }

        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%url, status = status.as_u16(), "request rejected");
            return Err(Error::Status(status.as_u16()));
        }

        let text = response.text().await?;
        Ok(parse_body(&text))
    }

    async fn download(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status(status.as_u16()));
        }
        let bytes = response.bytes().await?;
        Ok(bytes.to_vec())
    }
}

fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        let normalized = format!("http://{trimmed}");
        tracing::warn!(original = raw, %normalized, "base URL had no scheme");
        normalized
    }
}

fn build_form(body: RequestBody) -> Result<Form> {
    let mut form = Form::new();
    for (name, value) in body.fields {
        form = form.text(name, value);
    }
    for attachment in body.attachments {
        let part = Part::bytes(attachment.bytes)
            .file_name(attachment.filename)
            .mime_str(&attachment.mime)
            .map_err(|e| Error::Http(e.to_string()))?;
        form = form.part(attachment.field, part);
    }
    Ok(form)
}

/// JSON when possible, otherwise the raw text as a JSON string.
fn parse_body(text: &str) -> Value {
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Attachment;
    use serde_json::json;

    fn gateway(base: &str) -> HttpGateway {
        HttpGateway::new(base, Duration::from_secs(5)).expect("client builds")
    }

    #[test]
    fn base_url_without_scheme_gets_http() {
        assert_eq!(gateway("localhost:8080/").base_url(), "http://localhost:8080");
    }

    #[test]
    fn url_for_joins_without_double_slash() {
        let gw = gateway("http://example.test/xttest/");
        assert_eq!(gw.url_for("/getdata.php"), "http://example.test/xttest/getdata.php");
        assert_eq!(gw.url_for("savedata.php"), "http://example.test/xttest/savedata.php");
    }

    #[test]
    fn url_for_passes_absolute_urls_through() {
        let gw = gateway("http://example.test");
        assert_eq!(
            gw.url_for("https://cdn.example.test/a.jpg"),
            "https://cdn.example.test/a.jpg"
        );
    }

    #[test]
    fn parse_body_prefers_json() {
        assert_eq!(parse_body(r#"{"images":[]}"#), json!({ "images": [] }));
    }

    #[test]
    fn parse_body_keeps_plain_text() {
        assert_eq!(parse_body("Saved"), Value::String("Saved".into()));
    }

    #[test]
    fn build_form_rejects_invalid_mime() {
        let body = RequestBody::new().attach(Attachment {
            field: "user_image".into(),
            filename: "profile.jpg".into(),
            mime: "not a mime".into(),
            bytes: vec![1, 2, 3],
        });
        assert!(build_form(body).is_err());
    }
}
