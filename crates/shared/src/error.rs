use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RemoteOperation {
    ListEntries,
    GetEntry,
    CreateEntry,
    DeleteEntry,
    ListTeams,
}

impl RemoteOperation {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ListEntries => "list_entries",
            Self::GetEntry => "get_entry",
            Self::CreateEntry => "create_entry",
            Self::DeleteEntry => "delete_entry",
            Self::ListTeams => "list_teams",
        }
    }
}

impl fmt::Display for RemoteOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteErrorKind {
    /// The service could not be reached or the body could not be read.
    Transport,
    /// The service answered with a non-success status.
    Service,
    /// The requested record does not exist.
    NotFound,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{operation} failed ({kind:?}): {message}")]
pub struct RemoteError {
    pub operation: RemoteOperation,
    pub kind: RemoteErrorKind,
    pub status: Option<u16>,
    pub message: String,
}

impl RemoteError {
    pub fn transport(operation: RemoteOperation, message: impl Into<String>) -> Self {
        Self {
            operation,
            kind: RemoteErrorKind::Transport,
            status: None,
            message: message.into(),
        }
    }

    pub fn service(operation: RemoteOperation, status: u16, message: impl Into<String>) -> Self {
        Self {
            operation,
            kind: RemoteErrorKind::Service,
            status: Some(status),
            message: message.into(),
        }
    }

    pub fn not_found(
        operation: RemoteOperation,
        status: Option<u16>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            operation,
            kind: RemoteErrorKind::NotFound,
            status,
            message: message.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind == RemoteErrorKind::NotFound
    }
}
