use crate::{PartialQso, QsoCreate, QsoRecord};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use uuid::Uuid;

/// HTTP methods for API requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

/// A trait that defines the request-response relationship and metadata
/// for an API endpoint. Paths are built per request because several
/// endpoints embed an id in the path.
pub trait ApiRequest: Serialize + DeserializeOwned {
    /// The response type returned by this request.
    type Response: Serialize + DeserializeOwned;
    /// The HTTP method.
    const METHOD: HttpMethod;
    /// The URL path relative to the API base.
    fn path(&self) -> String;
    /// Query-string pairs, if the endpoint takes any.
    fn query(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }
}

// =========================================================
// Request definitions
// =========================================================

/// Register a new account
#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisteredUser {
    pub id: Uuid,
    pub email: String,
}

impl ApiRequest for RegisterRequest {
    type Response = RegisteredUser;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        "/auth/register".to_string()
    }
}

/// Fetch a page of the contact log, optionally filtered by callsign
#[derive(Debug, Serialize, Deserialize)]
pub struct ListQsosQuery {
    pub call: Option<String>,
    pub offset: u32,
    pub limit: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QsoPage {
    pub items: Vec<QsoRecord>,
    pub total: u64,
}

impl ApiRequest for ListQsosQuery {
    type Response = QsoPage;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        "/qso".to_string()
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(call) = self.call.as_deref() {
            if !call.is_empty() {
                pairs.push(("call", call.to_string()));
            }
        }
        pairs.push(("offset", self.offset.to_string()));
        pairs.push(("limit", self.limit.to_string()));
        pairs
    }
}

/// Log a new contact
// Note: QsoCreate is defined in lib.rs
impl ApiRequest for QsoCreate {
    type Response = QsoRecord;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        "/qso".to_string()
    }
}

/// Delete a contact
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteQsoRequest {
    pub id: Uuid,
}

impl ApiRequest for DeleteQsoRequest {
    type Response = (); // 204 on success; treat it as ()
    const METHOD: HttpMethod = HttpMethod::Delete;

    fn path(&self) -> String {
        format!("/qso/{}", self.id)
    }
}

/// Run the natural-language parser over freeform text
#[derive(Debug, Serialize, Deserialize)]
pub struct ParseRequest {
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseResponse {
    pub parsed: PartialQso,
    /// Parser self-assessment in `0.0..=1.0`.
    pub confidence: f64,
    pub raw_text: String,
}

impl ApiRequest for ParseRequest {
    type Response = ParseResponse;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        "/parse".to_string()
    }
}

// =========================================================
// Wire types outside the ApiRequest scheme
// =========================================================

/// Body of a successful password login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

/// What the callsign directory knows about a station.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallsignLookupResult {
    pub callsign: String,
    pub name: Option<String>,
    pub qth: Option<String>,
    pub grid: Option<String>,
    pub dxcc: Option<String>,
    /// Where the data came from: a directory name, a cache hit, or
    /// [`crate::LOOKUP_SOURCE_NONE`] when nothing was found.
    pub source: String,
}

impl CallsignLookupResult {
    /// Reshapes the lookup into form-seeding material. The callsign
    /// itself is carried along so re-seeding keeps it in the form.
    pub fn into_partial(self) -> PartialQso {
        PartialQso {
            call: Some(self.callsign),
            name: self.name,
            qth: self.qth,
            grid: self.grid,
            dxcc: self.dxcc,
            ..Default::default()
        }
    }
}

/// Error envelope the server wraps failures in. `detail` is either a
/// plain message or a list of per-field validation errors.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub detail: Option<ErrorDetail>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ErrorDetail {
    Message(String),
    Fields(Vec<FieldError>),
}

#[derive(Debug, Deserialize)]
pub struct FieldError {
    #[serde(default)]
    pub msg: Option<String>,
}

impl ErrorDetail {
    /// One banner-ready line out of whatever shape the server sent.
    pub fn joined(&self) -> String {
        match self {
            ErrorDetail::Message(message) => message.clone(),
            ErrorDetail::Fields(fields) => fields
                .iter()
                .map(|field| field.msg.clone().unwrap_or_else(|| "invalid value".to_string()))
                .collect::<Vec<_>>()
                .join("; "),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_query_includes_filter_only_when_set() {
        let unfiltered = ListQsosQuery {
            call: None,
            offset: 0,
            limit: 200,
        };
        assert_eq!(
            unfiltered.query(),
            vec![("offset", "0".to_string()), ("limit", "200".to_string())]
        );

        let filtered = ListQsosQuery {
            call: Some("W1AW".to_string()),
            offset: 0,
            limit: 200,
        };
        assert_eq!(filtered.query()[0], ("call", "W1AW".to_string()));

        let blank = ListQsosQuery {
            call: Some(String::new()),
            offset: 0,
            limit: 200,
        };
        assert_eq!(blank.query().len(), 2);
    }

    #[test]
    fn delete_path_embeds_the_id() {
        let request = DeleteQsoRequest {
            id: Uuid::from_u128(0xded),
        };
        assert_eq!(request.path(), format!("/qso/{}", request.id));
    }

    #[test]
    fn token_response_deserializes_from_login_body() {
        let body = r#"{"access_token":"abc.def.ghi","token_type":"bearer"}"#;
        let token: TokenResponse = serde_json::from_str(body).unwrap();
        assert_eq!(token.access_token, "abc.def.ghi");
        assert_eq!(token.token_type, "bearer");
    }

    #[test]
    fn lookup_converts_to_partial_and_keeps_the_call() {
        let result = CallsignLookupResult {
            callsign: "W1AW".to_string(),
            name: Some("ARRL HQ".to_string()),
            qth: None,
            grid: Some("FN31".to_string()),
            dxcc: None,
            source: "hamqth".to_string(),
        };
        let partial = result.into_partial();
        assert_eq!(partial.call.as_deref(), Some("W1AW"));
        assert_eq!(partial.name.as_deref(), Some("ARRL HQ"));
        assert_eq!(partial.grid.as_deref(), Some("FN31"));
        assert_eq!(partial.qth, None);
        assert_eq!(partial.mode, None);
    }

    #[test]
    fn error_detail_joins_both_server_shapes() {
        let plain: ErrorBody =
            serde_json::from_str(r#"{"detail":"LOGIN_BAD_CREDENTIALS"}"#).unwrap();
        assert_eq!(plain.detail.unwrap().joined(), "LOGIN_BAD_CREDENTIALS");

        let listed: ErrorBody = serde_json::from_str(
            r#"{"detail":[{"msg":"call too short","loc":["body","call"]},{"msg":"freq out of range"}]}"#,
        )
        .unwrap();
        assert_eq!(
            listed.detail.unwrap().joined(),
            "call too short; freq out of range"
        );

        let bare: ErrorBody = serde_json::from_str(r#"{"detail":[{"loc":["body"]}]}"#).unwrap();
        assert_eq!(bare.detail.unwrap().joined(), "invalid value");
    }

    #[test]
    fn error_body_tolerates_missing_detail() {
        let empty: ErrorBody = serde_json::from_str(r#"{}"#).unwrap();
        assert!(empty.detail.is_none());
    }
}
