//! HTTP client over `web_sys::fetch`.
//!
//! Replaces `gloo-net` with a thin builder so the binary stays small.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

#[derive(Debug, Clone, Copy)]
enum Method {
    Get,
    Post,
    Delete,
}

impl Method {
    fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Delete => "DELETE",
        }
    }
}

#[derive(Debug)]
pub enum HttpError {
    RequestBuildFailed(String),
    NetworkError(String),
    ResponseParseFailed(String),
}

impl core::fmt::Display for HttpError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            HttpError::RequestBuildFailed(msg) => write!(f, "failed to build request: {}", msg),
            HttpError::NetworkError(msg) => write!(f, "network error: {}", msg),
            HttpError::ResponseParseFailed(msg) => write!(f, "failed to read response: {}", msg),
        }
    }
}

/// Wrapper around a fetch `Response`.
pub struct HttpResponse {
    inner: Response,
}

impl HttpResponse {
    pub fn status(&self) -> u16 {
        self.inner.status()
    }

    /// Whether the status is in the 2xx range.
    pub fn ok(&self) -> bool {
        self.inner.ok()
    }

    /// Reads the body as text.
    pub async fn text(self) -> Result<String, HttpError> {
        let promise = self
            .inner
            .text()
            .map_err(|e| HttpError::ResponseParseFailed(format!("{:?}", e)))?;

        let text = JsFuture::from(promise)
            .await
            .map_err(|e| HttpError::ResponseParseFailed(format!("{:?}", e)))?;

        text.as_string()
            .ok_or_else(|| HttpError::ResponseParseFailed("body is not a string".to_string()))
    }

    /// Reads the body as raw bytes. Used for file downloads.
    pub async fn binary(self) -> Result<Vec<u8>, HttpError> {
        let promise = self
            .inner
            .array_buffer()
            .map_err(|e| HttpError::ResponseParseFailed(format!("{:?}", e)))?;

        let buffer = JsFuture::from(promise)
            .await
            .map_err(|e| HttpError::ResponseParseFailed(format!("{:?}", e)))?;

        Ok(js_sys::Uint8Array::new(&buffer).to_vec())
    }
}

/// Request builder. Construct through [`HttpClient`].
pub struct HttpRequestBuilder {
    url: String,
    method: Method,
    headers: Vec<(String, String)>,
    body: Option<String>,
}

impl HttpRequestBuilder {
    fn new(url: String, method: Method) -> Self {
        Self {
            url,
            method,
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn header(mut self, key: &str, value: &str) -> Self {
        self.headers.push((key.to_string(), value.to_string()));
        self
    }

    pub fn body(mut self, body: String) -> Self {
        self.body = Some(body);
        self
    }

    pub async fn send(self) -> Result<HttpResponse, HttpError> {
        let headers = Headers::new()
            .map_err(|e| HttpError::RequestBuildFailed(format!("creating headers: {:?}", e)))?;

        for (key, value) in &self.headers {
            headers
                .set(key, value)
                .map_err(|e| HttpError::RequestBuildFailed(format!("setting header: {:?}", e)))?;
        }

        let opts = RequestInit::new();
        opts.set_method(self.method.as_str());
        opts.set_headers(&headers.into());

        if let Some(body) = &self.body {
            opts.set_body(&JsValue::from_str(body));
        }

        let request = Request::new_with_str_and_init(&self.url, &opts)
            .map_err(|e| HttpError::RequestBuildFailed(format!("{:?}", e)))?;

        let window = web_sys::window()
            .ok_or_else(|| HttpError::NetworkError("no window object".to_string()))?;

        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| HttpError::NetworkError(format!("{:?}", e)))?;

        let response: Response = resp_value
            .dyn_into()
            .map_err(|e| HttpError::ResponseParseFailed(format!("not a Response: {:?}", e)))?;

        Ok(HttpResponse { inner: response })
    }
}

/// Lightweight HTTP client.
pub struct HttpClient;

impl HttpClient {
    pub fn get(url: &str) -> HttpRequestBuilder {
        HttpRequestBuilder::new(url.to_string(), Method::Get)
    }

    pub fn post(url: &str) -> HttpRequestBuilder {
        HttpRequestBuilder::new(url.to_string(), Method::Post)
    }

    pub fn delete(url: &str) -> HttpRequestBuilder {
        HttpRequestBuilder::new(url.to_string(), Method::Delete)
    }
}
