use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Malformed DNS message: {0}")]
    MalformedMessage(String),

    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid resource record: {0}")]
    InvalidRecord(String),

    #[error("Transport error: {0}")]
    TransportError(String),

    #[error("Record lookup failed: {0}")]
    LookupFailed(String),

    #[error("Listener stop was already requested")]
    ListenerAlreadyStopping,

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl DomainError {
    /// Shorthand used by the wire decoder, which reports every framing
    /// problem as malformed input.
    pub fn malformed(reason: impl Into<String>) -> Self {
        DomainError::MalformedMessage(reason.into())
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, DomainError::MalformedMessage(_))
    }
}
