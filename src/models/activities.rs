use serde::{Deserialize, Serialize};

/// One extracurricular offering, keyed by name in the registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: usize,
    /// Enrolled emails, in signup order. Uniqueness is enforced by the
    /// registry, not here.
    pub participants: Vec<String>,
}

impl Activity {
    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.max_participants
    }
}
