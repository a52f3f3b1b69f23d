//! Voter registration: eligibility rules, the record store port, and its adapters.
//!
//! [`RegistryService::evaluate`] is the single entry point. It screens a
//! candidate, checks the store for an existing registration, and inserts the
//! record when every rule passes.

pub mod domain;
pub(crate) mod evaluation;
pub mod memory;
pub mod repository;
pub mod router;
pub mod service;
pub mod sqlite;

#[cfg(test)]
mod tests;

pub use domain::{Candidate, Gender, Outcome, VoterId, VoterRecord};
pub use evaluation::MINIMUM_VOTING_AGE;
pub use memory::InMemoryRecordStore;
pub use repository::{RecordStore, RepositoryError};
pub use router::{registry_router, PersonRequest};
pub use service::{PersistenceFailure, RegistryService};
pub use sqlite::SqliteRecordStore;

use std::sync::Arc;

use crate::config::{StoreBackend, StoreConfig};

/// Builds the configured store and prepares its schema.
pub fn open_store(config: &StoreConfig) -> Result<Arc<dyn RecordStore>, RepositoryError> {
    let store: Arc<dyn RecordStore> = match config.backend {
        StoreBackend::Memory => Arc::new(InMemoryRecordStore::default()),
        StoreBackend::Sqlite => Arc::new(SqliteRecordStore::open(&config.database_path)?),
    };
    store.init_schema()?;
    Ok(store)
}
