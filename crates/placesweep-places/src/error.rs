use thiserror::Error;

/// How a transport call failed before any HTTP status was available.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkFailure {
    Connect,
    Timeout,
    Other,
}

impl std::fmt::Display for NetworkFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NetworkFailure::Connect => write!(f, "connection"),
            NetworkFailure::Timeout => write!(f, "timeout"),
            NetworkFailure::Other => write!(f, "request"),
        }
    }
}

/// A fault raised by the transport itself (no response was received).
#[derive(Debug, Clone, Error)]
#[error("{kind} failure: {message}")]
pub struct TransportFault {
    pub kind: NetworkFailure,
    pub message: String,
}

impl TransportFault {
    #[must_use]
    pub fn new(kind: NetworkFailure, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for TransportFault {
    fn from(err: reqwest::Error) -> Self {
        let kind = if err.is_timeout() {
            NetworkFailure::Timeout
        } else if err.is_connect() {
            NetworkFailure::Connect
        } else {
            NetworkFailure::Other
        };
        Self::new(kind, err.to_string())
    }
}

/// Errors returned by the places search client.
///
/// Validation variants are raised before any request is sent. HTTP variants
/// are derived from the response status alone; `message` is the API's
/// `error.message` when the body carries one, otherwise the raw body.
#[derive(Debug, Error)]
pub enum PlacesError {
    #[error("no API key provided: pass a credential or set GOOGLE_PLACES_API_KEY")]
    MissingCredential,

    #[error("invalid location \"{input}\": {reason}")]
    InvalidLocation { input: String, reason: String },

    #[error("invalid {field}: {reason}")]
    InvalidQuery { field: &'static str, reason: String },

    #[error("bad request, check the query parameters: {message}")]
    BadRequest { message: String },

    #[error("unauthorized, check the API key: {message}")]
    Unauthorized { message: String },

    #[error("forbidden, the API key lacks permission or the Places API is not enabled: {message}")]
    Forbidden { message: String },

    #[error("rate limit exceeded, slow down or raise the quota: {message}")]
    RateLimited { message: String },

    #[error("server error {status}, try again later: {message}")]
    ServerError { status: u16, message: String },

    #[error("unexpected HTTP status {status}: {body}")]
    Http { status: u16, body: String },

    #[error("network error: {0}")]
    Network(#[from] TransportFault),

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Fieldless tag for each [`PlacesError`] variant, used in logs and reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    MissingCredential,
    InvalidLocation,
    InvalidQuery,
    BadRequest,
    Unauthorized,
    Forbidden,
    RateLimited,
    ServerError,
    HttpError,
    NetworkError,
    Deserialize,
}

impl ErrorCategory {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCategory::MissingCredential => "MissingCredential",
            ErrorCategory::InvalidLocation => "InvalidLocation",
            ErrorCategory::InvalidQuery => "InvalidQuery",
            ErrorCategory::BadRequest => "BadRequest",
            ErrorCategory::Unauthorized => "Unauthorized",
            ErrorCategory::Forbidden => "Forbidden",
            ErrorCategory::RateLimited => "RateLimited",
            ErrorCategory::ServerError => "ServerError",
            ErrorCategory::HttpError => "HttpError",
            ErrorCategory::NetworkError => "NetworkError",
            ErrorCategory::Deserialize => "Deserialize",
        }
    }
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PlacesError {
    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        match self {
            PlacesError::MissingCredential => ErrorCategory::MissingCredential,
            PlacesError::InvalidLocation { .. } => ErrorCategory::InvalidLocation,
            PlacesError::InvalidQuery { .. } => ErrorCategory::InvalidQuery,
            PlacesError::BadRequest { .. } => ErrorCategory::BadRequest,
            PlacesError::Unauthorized { .. } => ErrorCategory::Unauthorized,
            PlacesError::Forbidden { .. } => ErrorCategory::Forbidden,
            PlacesError::RateLimited { .. } => ErrorCategory::RateLimited,
            PlacesError::ServerError { .. } => ErrorCategory::ServerError,
            PlacesError::Http { .. } => ErrorCategory::HttpError,
            PlacesError::Network(_) => ErrorCategory::NetworkError,
            PlacesError::Deserialize { .. } => ErrorCategory::Deserialize,
        }
    }

    /// `true` for errors raised while validating a query, before any
    /// request was attempted.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            PlacesError::MissingCredential
                | PlacesError::InvalidLocation { .. }
                | PlacesError::InvalidQuery { .. }
        )
    }

    pub(crate) fn invalid_location(input: impl Into<String>, reason: impl Into<String>) -> Self {
        PlacesError::InvalidLocation {
            input: input.into(),
            reason: reason.into(),
        }
    }
}
