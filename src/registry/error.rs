//! Error type for registry operations.
//!
//! Every variant is an expected, caller-recoverable condition; the web layer
//! translates them into status codes and the `Display` text becomes the
//! response detail.

/// Rejection reasons for signup and unregister commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// No activity with the requested name exists.
    ActivityNotFound,
    /// The email is already on the activity's roster.
    AlreadyRegistered { email: String, activity: String },
    /// The activity's roster is at max_participants.
    CapacityExceeded { activity: String },
    /// The email is not on the activity's roster.
    NotRegistered { email: String, activity: String },
}

impl std::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistryError::ActivityNotFound => write!(f, "Activity not found"),
            RegistryError::AlreadyRegistered { email, activity } => {
                write!(f, "{} is already signed up for {}", email, activity)
            }
            RegistryError::CapacityExceeded { activity } => {
                write!(f, "{} is at maximum capacity", activity)
            }
            RegistryError::NotRegistered { email, activity } => {
                write!(f, "{} is not signed up for {}", email, activity)
            }
        }
    }
}

impl std::error::Error for RegistryError {}
