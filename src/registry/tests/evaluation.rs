use crate::registry::domain::{Candidate, Outcome};
use crate::registry::evaluation::{screen, MINIMUM_VOTING_AGE};

#[test]
fn non_positive_ids_are_invalid() {
    for id in [0, -1, i64::MIN] {
        assert_eq!(
            screen(&Candidate::new(id, "Ana", 30, true)),
            Some(Outcome::Invalid),
            "id {id} should be rejected"
        );
    }
}

#[test]
fn invalid_id_wins_over_every_other_rule() {
    let dead_minor = Candidate::new(-7, "Ana", 3, false);
    assert_eq!(screen(&dead_minor), Some(Outcome::Invalid));
}

#[test]
fn deceased_reports_dead_before_underage() {
    let candidate = Candidate::new(5, "X", 10, false);
    assert_eq!(screen(&candidate), Some(Outcome::Dead));
}

#[test]
fn deceased_adult_reports_dead() {
    assert_eq!(
        screen(&Candidate::new(9, "Old", 80, false)),
        Some(Outcome::Dead)
    );
}

#[test]
fn age_threshold_is_inclusive_at_eighteen() {
    assert_eq!(
        screen(&Candidate::new(1, "Teen", MINIMUM_VOTING_AGE - 1, true)),
        Some(Outcome::Underage)
    );
    assert_eq!(
        screen(&Candidate::new(1, "Adult", MINIMUM_VOTING_AGE, true)),
        None
    );
    assert_eq!(screen(&Candidate::new(1, "Baby", 0, true)), Some(Outcome::Underage));
}

#[test]
fn outcome_labels_match_wire_names() {
    let labels: Vec<_> = [
        Outcome::Valid,
        Outcome::Invalid,
        Outcome::Dead,
        Outcome::Underage,
        Outcome::Duplicated,
    ]
    .into_iter()
    .map(|outcome| {
        let json = serde_json::to_value(outcome).expect("serializes");
        assert_eq!(json, serde_json::Value::from(outcome.label()));
        outcome.to_string()
    })
    .collect();

    assert_eq!(
        labels,
        ["VALID", "INVALID", "DEAD", "UNDERAGE", "DUPLICATED"]
    );
}
