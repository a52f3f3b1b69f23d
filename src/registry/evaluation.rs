use super::domain::{Candidate, Outcome};

/// Youngest age allowed on the voter roll.
pub const MINIMUM_VOTING_AGE: u32 = 18;

/// Applies the store-independent eligibility rules in order.
///
/// Returns `Some(outcome)` when a rule rejects the candidate and `None` when the
/// candidate may proceed to the duplicate check. Order matters: a deceased minor
/// reports `Dead`, never `Underage`.
pub(crate) fn screen(candidate: &Candidate) -> Option<Outcome> {
    if !candidate.id.is_positive() {
        return Some(Outcome::Invalid);
    }
    if !candidate.alive {
        return Some(Outcome::Dead);
    }
    if candidate.age < MINIMUM_VOTING_AGE {
        return Some(Outcome::Underage);
    }

    None
}
