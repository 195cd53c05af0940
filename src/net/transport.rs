//! Raw HTTP exchange behind the API client.
//!
//! Client-side (`csr`): real requests via `gloo-net`.
//! Native builds: a stub returning [`ApiError::Unavailable`], since there is
//! no browser `fetch` to call.
//!
//! DESIGN
//! ======
//! Requests are plain data (`ApiRequest`) so the endpoint layer can be
//! exercised against a scripted transport in tests.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use super::error::ApiError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// A file chosen by the user, already read into memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PartValue {
    Text(String),
    File(FileUpload),
}

/// One field of a multipart form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Part {
    pub name: String,
    pub value: PartValue,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum Body {
    #[default]
    Empty,
    Json(serde_json::Value),
    /// `application/x-www-form-urlencoded` pairs.
    Form(Vec<(String, String)>),
    Multipart(Vec<Part>),
}

/// A request relative to the configured API base.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub bearer: Option<String>,
    pub body: Body,
}

impl ApiRequest {
    #[must_use]
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            bearer: None,
            body: Body::Empty,
        }
    }

    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    #[must_use]
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    #[must_use]
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }

    #[must_use]
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    #[must_use]
    pub fn query(mut self, key: &str, value: impl Into<String>) -> Self {
        self.query.push((key.to_owned(), value.into()));
        self
    }

    #[must_use]
    pub fn bearer(mut self, token: impl Into<String>) -> Self {
        self.bearer = Some(token.into());
        self
    }

    #[must_use]
    pub fn json(mut self, value: serde_json::Value) -> Self {
        self.body = Body::Json(value);
        self
    }

    #[must_use]
    pub fn form(mut self, pairs: Vec<(String, String)>) -> Self {
        self.body = Body::Form(pairs);
        self
    }

    #[must_use]
    pub fn multipart(mut self, parts: Vec<Part>) -> Self {
        self.body = Body::Multipart(parts);
        self
    }
}

/// Status and body text of a completed exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    #[must_use]
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Moves one request to the backend and returns the raw response.
///
/// Futures are not `Send`; everything runs on the browser's single thread.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, base: &str, request: ApiRequest) -> Result<RawResponse, ApiError>;
}

/// `fetch`-backed transport used by the WASM build.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

impl Transport for BrowserTransport {
    async fn send(&self, base: &str, request: ApiRequest) -> Result<RawResponse, ApiError> {
        #[cfg(feature = "csr")]
        {
            browser::send(base, request).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (base, request);
            Err(ApiError::Unavailable)
        }
    }
}

/// Encode a single path segment the way `encodeURIComponent` does.
#[must_use]
pub fn encode_segment(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    for byte in segment.bytes() {
        if byte.is_ascii_alphanumeric() || b"-_.!~*'()".contains(&byte) {
            out.push(char::from(byte));
        } else {
            out.push_str(&format!("%{byte:02X}"));
        }
    }
    out
}

#[cfg(feature = "csr")]
mod browser {
    use gloo_net::http::{Request, RequestBuilder};

    use super::{ApiError, ApiRequest, Body, Method, Part, PartValue, RawResponse};

    pub(super) async fn send(base: &str, request: ApiRequest) -> Result<RawResponse, ApiError> {
        let url = format!("{base}{}", request.path);
        let mut builder = match request.method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Delete => Request::delete(&url),
        };
        if !request.query.is_empty() {
            builder = builder.query(request.query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        }
        if let Some(token) = &request.bearer {
            builder = builder.header("Authorization", &format!("Bearer {token}"));
        }

        let prepared = build(builder, request.body)?;
        let resp = prepared.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        let status = resp.status();
        let body = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
        Ok(RawResponse { status, body })
    }

    fn build(builder: RequestBuilder, body: Body) -> Result<Request, ApiError> {
        let encode = |e: gloo_net::Error| ApiError::Encode(e.to_string());
        match body {
            Body::Empty => builder.build().map_err(encode),
            Body::Json(value) => builder.json(&value).map_err(encode),
            Body::Form(pairs) => {
                let params = web_sys::UrlSearchParams::new().map_err(js_error)?;
                for (key, value) in &pairs {
                    params.append(key, value);
                }
                builder.body(params).map_err(encode)
            }
            Body::Multipart(parts) => builder.body(form_data(&parts)?).map_err(encode),
        }
    }

    fn form_data(parts: &[Part]) -> Result<web_sys::FormData, ApiError> {
        let form = web_sys::FormData::new().map_err(js_error)?;
        for part in parts {
            match &part.value {
                PartValue::Text(text) => form.append_with_str(&part.name, text).map_err(js_error)?,
                PartValue::File(file) => {
                    let bytes = js_sys::Uint8Array::from(file.bytes.as_slice());
                    let sequence = js_sys::Array::of1(&bytes);
                    let options = web_sys::BlobPropertyBag::new();
                    options.set_type(&file.content_type);
                    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&sequence, &options)
                        .map_err(js_error)?;
                    form.append_with_blob_and_filename(&part.name, &blob, &file.file_name)
                        .map_err(js_error)?;
                }
            }
        }
        Ok(form)
    }

    #[allow(clippy::needless_pass_by_value)]
    fn js_error(err: wasm_bindgen::JsValue) -> ApiError {
        ApiError::Encode(format!("{err:?}"))
    }
}
