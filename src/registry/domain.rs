use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier wrapper for voters. Valid identifiers are strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VoterId(pub i64);

impl VoterId {
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }
}

impl fmt::Display for VoterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Declared gender. Carried through intake but never consulted by eligibility rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    Male,
    Female,
    #[default]
    Unidentified,
}

/// Person asking to be registered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: VoterId,
    pub name: String,
    pub age: u32,
    pub alive: bool,
    #[serde(default)]
    pub gender: Gender,
}

impl Candidate {
    pub fn new(id: i64, name: impl Into<String>, age: u32, alive: bool) -> Self {
        Self {
            id: VoterId(id),
            name: name.into(),
            age,
            alive,
            gender: Gender::default(),
        }
    }

    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = gender;
        self
    }
}

/// Persisted voter. Written once on a successful registration and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoterRecord {
    pub id: VoterId,
    pub name: String,
    pub age: u32,
    pub alive: bool,
}

/// Result of an eligibility evaluation. Every variant is an ordinary answer, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Outcome {
    Valid,
    Invalid,
    Dead,
    Underage,
    Duplicated,
}

impl Outcome {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Valid => "VALID",
            Self::Invalid => "INVALID",
            Self::Dead => "DEAD",
            Self::Underage => "UNDERAGE",
            Self::Duplicated => "DUPLICATED",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
