use std::sync::Arc;

use tracing::{debug, warn};

use super::domain::{Candidate, Outcome, VoterId, VoterRecord};
use super::evaluation::screen;
use super::repository::{RecordStore, RepositoryError};

/// Eligibility evaluator composing the ordered rules with a record store.
pub struct RegistryService<S: ?Sized> {
    store: Arc<S>,
}

impl<S> RegistryService<S>
where
    S: RecordStore + ?Sized + 'static,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Decide whether `candidate` may be registered, persisting it when valid.
    ///
    /// Rejections come back as `Ok(outcome)`. Only store failures produce `Err`.
    pub fn evaluate(&self, candidate: Option<&Candidate>) -> Result<Outcome, PersistenceFailure> {
        let Some(candidate) = candidate else {
            debug!(outcome = Outcome::Invalid.label(), "absent candidate rejected");
            return Ok(Outcome::Invalid);
        };

        let outcome = match screen(candidate) {
            Some(rejected) => rejected,
            None => self.register(candidate)?,
        };

        debug!(
            voter_id = candidate.id.0,
            outcome = outcome.label(),
            "eligibility evaluated"
        );
        Ok(outcome)
    }

    /// Fetch a registered voter for lookups.
    pub fn lookup(&self, id: VoterId) -> Result<Option<VoterRecord>, PersistenceFailure> {
        self.store.find_by_id(id).map_err(PersistenceFailure::wrap)
    }

    fn register(&self, candidate: &Candidate) -> Result<Outcome, PersistenceFailure> {
        if self
            .store
            .exists_by_id(candidate.id)
            .map_err(PersistenceFailure::wrap)?
        {
            return Ok(Outcome::Duplicated);
        }

        match self.store.save(
            candidate.id,
            &candidate.name,
            candidate.age,
            candidate.alive,
        ) {
            Ok(()) => Ok(Outcome::Valid),
            // Another registration for the same id landed between the check and the insert.
            Err(RepositoryError::Conflict { .. }) => Ok(Outcome::Duplicated),
            Err(err) => Err(PersistenceFailure::wrap(err)),
        }
    }
}

/// Opaque infrastructure failure raised when the record store misbehaves.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("persistence: {category} - {message}")]
pub struct PersistenceFailure {
    pub category: &'static str,
    pub message: String,
    #[source]
    pub source: RepositoryError,
}

impl PersistenceFailure {
    pub fn wrap(source: RepositoryError) -> Self {
        let failure = Self {
            category: source.category(),
            message: source.detail(),
            source,
        };
        warn!(category = failure.category, message = %failure.message, "record store failure");
        failure
    }
}
