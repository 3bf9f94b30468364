//! Typed API client.
//!
//! Endpoints described by [`ApiRequest`] go through the generic
//! [`HamlogApi::execute`] path. Three endpoints sit outside the JSON
//! scheme and get bespoke methods: login (form-encoded per OAuth2
//! password flow), callsign lookup (value embedded in the path), and
//! the ADIF export (binary body).

use hamlog_shared::PAGE_LIMIT;
use hamlog_shared::protocol::{
    ApiRequest, CallsignLookupResult, DeleteQsoRequest, ErrorBody, HttpMethod, ListQsosQuery,
    ParseRequest, ParseResponse, QsoPage, RegisterRequest, RegisteredUser, TokenResponse,
};
use hamlog_shared::{QsoCreate, QsoRecord};
use leptos::prelude::*;
use uuid::Uuid;

use crate::serde_helper;
use crate::session::SessionContext;
use crate::web::{HttpClient, HttpRequestBuilder, HttpResponse};

/// What went wrong with a request, coarse enough for a banner.
#[derive(Debug)]
pub enum ApiError {
    /// The request never produced a response.
    Network(String),
    /// The server rejected the token. The session is already cleared
    /// by the time this value is seen.
    Unauthorized,
    /// The server rejected the payload; the message is ready to show.
    Validation(String),
    /// Any other non-2xx answer.
    Http { status: u16, message: String },
    /// A 2xx answer whose body did not parse.
    Decode(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Network(_) => write!(f, "network error, check the connection"),
            ApiError::Unauthorized => write!(f, "session expired, please sign in again"),
            ApiError::Validation(message) => write!(f, "{message}"),
            ApiError::Http { status, message } => write!(f, "{message} (status {status})"),
            ApiError::Decode(message) => write!(f, "unexpected response: {message}"),
        }
    }
}

#[derive(Clone)]
pub struct HamlogApi {
    base_url: String,
    session: SessionContext,
}

impl HamlogApi {
    pub fn new(base_url: String, session: SessionContext) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        Self { base_url, session }
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    fn authorize(&self, builder: HttpRequestBuilder) -> HttpRequestBuilder {
        match self.session.token() {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    /// Shared response gate: a 401 kills the session on the spot, any
    /// other non-2xx becomes a typed error built from the body.
    async fn check(&self, response: HttpResponse) -> Result<HttpResponse, ApiError> {
        if response.status() == 401 {
            self.session.clear();
            return Err(ApiError::Unauthorized);
        }
        if !response.ok() {
            return Err(error_from_response(response).await);
        }
        Ok(response)
    }

    async fn send<R: ApiRequest>(&self, request: &R) -> Result<HttpResponse, ApiError> {
        let mut url = self.url(&request.path());
        let query = request.query();
        if !query.is_empty() {
            let pairs: Vec<String> = query
                .iter()
                .map(|(key, value)| format!("{}={}", key, encode_component(value)))
                .collect();
            url = format!("{}?{}", url, pairs.join("&"));
        }

        let builder = match R::METHOD {
            HttpMethod::Get => HttpClient::get(&url),
            HttpMethod::Post => HttpClient::post(&url),
            HttpMethod::Delete => HttpClient::delete(&url),
        };
        let mut builder = self.authorize(builder);

        if matches!(R::METHOD, HttpMethod::Post) {
            let body =
                serde_helper::to_json_string(request).map_err(|e| ApiError::Decode(e.to_string()))?;
            builder = builder.header("Content-Type", "application/json").body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        self.check(response).await
    }

    /// Runs a request and parses the JSON response.
    pub async fn execute<R: ApiRequest>(&self, request: &R) -> Result<R::Response, ApiError> {
        let response = self.send(request).await?;
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        serde_helper::from_json_string(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Runs a request whose success carries no body (204s).
    pub async fn execute_empty<R: ApiRequest>(&self, request: &R) -> Result<(), ApiError> {
        self.send(request).await?;
        Ok(())
    }

    // =========================================================
    // Endpoints
    // =========================================================

    /// Password login. The auth server speaks the OAuth2 password
    /// flow: a form-encoded body with `username`/`password` keys, the
    /// email going in as the username.
    pub async fn login(&self, email: &str, password: &str) -> Result<TokenResponse, ApiError> {
        let body = format!(
            "username={}&password={}",
            encode_component(email),
            encode_component(password)
        );
        let response = HttpClient::post(&self.url("/auth/jwt/login"))
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = self.check(response).await?;
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        serde_helper::from_json_string(&text).map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub async fn register(&self, email: String, password: String) -> Result<RegisteredUser, ApiError> {
        self.execute(&RegisterRequest { email, password }).await
    }

    /// First page of the log, optionally filtered by callsign prefix.
    pub async fn list_qsos(&self, call: Option<String>) -> Result<QsoPage, ApiError> {
        self.execute(&ListQsosQuery {
            call,
            offset: 0,
            limit: PAGE_LIMIT,
        })
        .await
    }

    pub async fn create_qso(&self, payload: QsoCreate) -> Result<QsoRecord, ApiError> {
        self.execute(&payload).await
    }

    pub async fn delete_qso(&self, id: Uuid) -> Result<(), ApiError> {
        self.execute_empty(&DeleteQsoRequest { id }).await
    }

    pub async fn parse_text(&self, text: String) -> Result<ParseResponse, ApiError> {
        self.execute(&ParseRequest { text }).await
    }

    /// Directory lookup for a callsign. The value rides in the path,
    /// so it gets URI-encoded here.
    pub async fn lookup_callsign(&self, callsign: &str) -> Result<CallsignLookupResult, ApiError> {
        let url = self.url(&format!("/callsign/{}", encode_component(callsign)));
        let builder = self.authorize(HttpClient::get(&url));
        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = self.check(response).await?;
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        serde_helper::from_json_string(&text).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// The whole log as an ADIF file. The body is treated as opaque
    /// bytes; the server is the authority on the format.
    pub async fn export_adif(&self) -> Result<Vec<u8>, ApiError> {
        let builder = self.authorize(HttpClient::get(&self.url("/qso/export/adif")));
        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = self.check(response).await?;
        response
            .binary()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Builds the banner error for a non-2xx response. Validation errors
/// (422) keep their per-field messages; everything else keeps the
/// status and whatever detail the body offered.
async fn error_from_response(response: HttpResponse) -> ApiError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let detail = serde_helper::from_json_string::<ErrorBody>(&body)
        .ok()
        .and_then(|parsed| parsed.detail)
        .map(|detail| detail.joined());

    match (status, detail) {
        (422, Some(message)) => ApiError::Validation(message),
        (_, Some(message)) => ApiError::Http { status, message },
        (_, None) => ApiError::Http {
            status,
            message: "request failed".to_string(),
        },
    }
}

fn encode_component(value: &str) -> String {
    js_sys::encode_uri_component(value).into()
}

pub fn use_api() -> HamlogApi {
    use_context::<HamlogApi>().expect("HamlogApi should be provided")
}
