use serde::Serialize;
use thiserror::Error;

/// Which half of the owner-contact precondition was violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OwnerContactConflict {
    /// Neither `owner_contact_id` nor `owner_contact` was supplied.
    Missing,
    /// Both `owner_contact_id` and `owner_contact` were supplied.
    Both,
}

impl std::fmt::Display for OwnerContactConflict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Missing => write!(
                f,
                "either `owner_contact_id` or `owner_contact` must be provided"
            ),
            Self::Both => write!(
                f,
                "only one of `owner_contact_id` or `owner_contact` can be provided"
            ),
        }
    }
}

/// Unified error type for the registrar state-mapping layer.
///
/// The mapping functions themselves only ever produce [`Configuration`](Self::Configuration),
/// [`InvalidIdentifier`](Self::InvalidIdentifier), [`DuplicateRecordMatch`](Self::DuplicateRecordMatch)
/// and [`RecordNotFound`](Self::RecordNotFound). The remaining variants come from the
/// HTTP registrar client and are handed back to the caller untouched.
#[derive(Error, Debug, Clone, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum RegistrarError {
    /// The resource configuration violates a precondition. Raised before any remote call.
    #[error("Configuration error: {0}")]
    Configuration(OwnerContactConflict),

    /// A resource identifier is not of the form `projectID/domainName`.
    #[error("invalid ID format, expected 'projectID/domainName', got: {id}")]
    InvalidIdentifier { id: String },

    /// More than one DNS record matches a type + data query.
    #[error("multiple records found with type {record_type} and data {data}")]
    DuplicateRecordMatch { record_type: String, data: String },

    /// No DNS record matches a type + data query.
    #[error("record with type {record_type} and data {data} not found")]
    RecordNotFound { record_type: String, data: String },

    /// Network-level failure talking to the registrar.
    #[error("Network error: {0}")]
    NetworkError(String),

    /// The registrar request timed out.
    #[error("Request timeout: {0}")]
    Timeout(String),

    /// The secret key was rejected (HTTP 401/403).
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    /// The registrar does not know the requested domain (HTTP 404).
    #[error("Domain '{domain}' not found")]
    DomainNotFound { domain: String },

    /// Any other non-success answer from the registrar.
    #[error("API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    /// The registrar response body could not be decoded.
    #[error("Parse error: {0}")]
    ParseError(String),

    /// A request body could not be encoded.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl RegistrarError {
    /// 配置错误、标识符损坏、记录不存在等由用户侧引起的错误返回 `true`。
    ///
    /// 调用方据此选择 `warn`（`true`）或 `error`（`false`）日志级别。
    /// 新增变体时请同步更新。
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::Configuration(_)
                | Self::InvalidIdentifier { .. }
                | Self::DuplicateRecordMatch { .. }
                | Self::RecordNotFound { .. }
                | Self::InvalidCredentials(_)
                | Self::DomainNotFound { .. }
        )
    }
}

/// Convenience type alias for `Result<T, RegistrarError>`.
pub type Result<T> = std::result::Result<T, RegistrarError>;
