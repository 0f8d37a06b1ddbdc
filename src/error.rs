use std::fmt;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Error codes the helpers react to. Anything else is carried as `Other`
/// and only ever propagated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorCode {
    ObjectNotExist,
    TableNotReady,
    PartitionUnavailable,
    Other(String),
}

impl ErrorCode {
    /// Codes a freshly created table reports while it is still being provisioned.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::TableNotReady | Self::PartitionUnavailable)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::ObjectNotExist => "ObjectNotExist",
            Self::TableNotReady => "TableNotReady",
            Self::PartitionUnavailable => "PartitionUnavailable",
            Self::Other(code) => code.as_str(),
        }
    }
}

impl From<&str> for ErrorCode {
    fn from(code: &str) -> Self {
        match code {
            "OTSObjectNotExist" | "ResourceNotFoundException" => Self::ObjectNotExist,
            "OTSTableNotReady" => Self::TableNotReady,
            "OTSPartitionUnavailable" => Self::PartitionUnavailable,
            _ => Self::Other(code.into()),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("{code}: {message}")]
    Service { code: ErrorCode, message: String },
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    pub fn service<C, M>(code: C, message: M) -> Self
    where
        C: Into<ErrorCode>,
        M: Into<String>,
    {
        Self::Service {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn code(&self) -> Option<&ErrorCode> {
        match self {
            Self::Service { code, .. } => Some(code),
            Self::Other(_) => None,
        }
    }

    pub fn is_object_not_exist(&self) -> bool {
        matches!(self.code(), Some(ErrorCode::ObjectNotExist))
    }

    pub fn is_transient(&self) -> bool {
        self.code().map(ErrorCode::is_transient).unwrap_or(false)
    }
}
