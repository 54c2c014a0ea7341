use std::collections::BTreeMap;

use crate::models::Activity;
use crate::registry::{RegistryError, SharedRegistry};

/// Snapshot of the full catalog for the listing endpoint.
pub fn list_activities(registry: &SharedRegistry) -> BTreeMap<String, Activity> {
    let registry = registry.lock().expect("registry lock poisoned");
    registry.list().clone()
}

/// Sign `email` up for an activity. Returns the confirmation message shown to
/// the caller.
pub fn signup(
    registry: &SharedRegistry,
    activity_name: &str,
    email: &str,
) -> Result<String, RegistryError> {
    let mut registry = registry.lock().expect("registry lock poisoned");
    registry.add_participant(activity_name, email)?;
    Ok(format!("Signed up {} for {}", email, activity_name))
}

/// Remove `email` from an activity's roster.
pub fn unregister(
    registry: &SharedRegistry,
    activity_name: &str,
    email: &str,
) -> Result<String, RegistryError> {
    let mut registry = registry.lock().expect("registry lock poisoned");
    registry.remove_participant(activity_name, email)?;
    Ok(format!("Unregistered {} from {}", email, activity_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::ActivityRegistry;

    #[test]
    fn test_signup_message_names_email_and_activity() {
        let registry = ActivityRegistry::shared();

        let message = signup(&registry, "Chess Club", "new@x.edu").unwrap();

        assert_eq!(message, "Signed up new@x.edu for Chess Club");
        let snapshot = list_activities(&registry);
        assert!(snapshot["Chess Club"]
            .participants
            .contains(&"new@x.edu".to_string()));
    }

    #[test]
    fn test_signup_twice_rejects_second_attempt() {
        let registry = ActivityRegistry::shared();

        signup(&registry, "Chess Club", "new@x.edu").unwrap();
        let err = signup(&registry, "Chess Club", "new@x.edu").unwrap_err();

        assert!(matches!(err, RegistryError::AlreadyRegistered { .. }));
    }

    #[test]
    fn test_unregister_then_signup_round_trip() {
        let registry = ActivityRegistry::shared();

        let message =
            unregister(&registry, "Chess Club", "michael@mergington.edu").unwrap();
        assert_eq!(
            message,
            "Unregistered michael@mergington.edu from Chess Club"
        );

        signup(&registry, "Chess Club", "michael@mergington.edu").unwrap();
        let snapshot = list_activities(&registry);
        assert!(snapshot["Chess Club"]
            .participants
            .contains(&"michael@mergington.edu".to_string()));
    }

    #[test]
    fn test_unknown_activity_surfaces_not_found() {
        let registry = ActivityRegistry::shared();

        let err = signup(&registry, "NoSuchClub", "new@x.edu").unwrap_err();

        assert_eq!(err, RegistryError::ActivityNotFound);
    }
}
