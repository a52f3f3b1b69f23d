use super::domain::{VoterId, VoterRecord};

/// Storage abstraction so the registry service can run against any backend.
///
/// `save` must reject an identifier that is already stored with
/// [`RepositoryError::Conflict`]; the service relies on that to resolve two
/// registrations racing past `exists_by_id`.
pub trait RecordStore: Send + Sync {
    /// Prepares the underlying storage. Safe to call more than once.
    fn init_schema(&self) -> Result<(), RepositoryError>;
    fn exists_by_id(&self, id: VoterId) -> Result<bool, RepositoryError>;
    fn save(&self, id: VoterId, name: &str, age: u32, alive: bool) -> Result<(), RepositoryError>;
    fn find_by_id(&self, id: VoterId) -> Result<Option<VoterRecord>, RepositoryError>;
    /// Removes every record. Administrative reset only.
    fn delete_all(&self) -> Result<(), RepositoryError>;
}

/// Error enumeration for store failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    #[error("voter {id} already exists")]
    Conflict { id: VoterId },
    #[error("store unavailable: {0}")]
    Unavailable(String),
    #[error("storage failure: {0}")]
    Storage(String),
}

impl RepositoryError {
    /// Short category name kept when the error is wrapped for callers.
    pub const fn category(&self) -> &'static str {
        match self {
            Self::Conflict { .. } => "Conflict",
            Self::Unavailable(_) => "Unavailable",
            Self::Storage(_) => "Storage",
        }
    }

    /// Message without the category prefix.
    pub fn detail(&self) -> String {
        match self {
            Self::Conflict { id } => format!("voter {id} already exists"),
            Self::Unavailable(message) | Self::Storage(message) => message.clone(),
        }
    }
}
