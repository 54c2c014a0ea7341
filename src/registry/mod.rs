//! In-memory activity registry.
//!
//! The sole piece of state in the application: a map from activity name to
//! [`Activity`]. Seeded once at startup, mutated only through
//! [`ActivityRegistry::add_participant`] and
//! [`ActivityRegistry::remove_participant`].

mod error;
mod seed;

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use crate::models::Activity;

pub use self::error::RegistryError;

/// Handle shared between the request handlers. One lock around every
/// operation; nothing holds it across an await point.
pub type SharedRegistry = Arc<Mutex<ActivityRegistry>>;

/// Registry of all activities, keyed by name.
pub struct ActivityRegistry {
    activities: BTreeMap<String, Activity>,
}

impl ActivityRegistry {
    /// Registry seeded with the school's activity catalog.
    pub fn seeded() -> Self {
        Self::from_activities(seed::mergington_activities())
    }

    pub fn from_activities(activities: BTreeMap<String, Activity>) -> Self {
        Self { activities }
    }

    /// Wrap a seeded registry in the shared handle handed to the router.
    pub fn shared() -> SharedRegistry {
        Arc::new(Mutex::new(Self::seeded()))
    }

    /// Full current state, for serialization. Read-only.
    pub fn list(&self) -> &BTreeMap<String, Activity> {
        &self.activities
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.activities.get(name)
    }

    /// Append `email` to the activity's roster.
    ///
    /// Checks run in a fixed order: unknown activity, then duplicate signup,
    /// then capacity. A full activity still reports `AlreadyRegistered` for
    /// an email already on its roster.
    pub fn add_participant(&mut self, name: &str, email: &str) -> Result<(), RegistryError> {
        let activity = self
            .activities
            .get_mut(name)
            .ok_or(RegistryError::ActivityNotFound)?;

        if activity.participants.iter().any(|p| p == email) {
            return Err(RegistryError::AlreadyRegistered {
                email: email.to_string(),
                activity: name.to_string(),
            });
        }

        if activity.participants.len() >= activity.max_participants {
            return Err(RegistryError::CapacityExceeded {
                activity: name.to_string(),
            });
        }

        activity.participants.push(email.to_string());
        tracing::info!(
            activity = name,
            email = email,
            participants = activity.participants.len(),
            "Participant signed up"
        );
        Ok(())
    }

    /// Remove `email` from the activity's roster. The activity stays listed
    /// even when its roster empties.
    pub fn remove_participant(&mut self, name: &str, email: &str) -> Result<(), RegistryError> {
        let activity = self
            .activities
            .get_mut(name)
            .ok_or(RegistryError::ActivityNotFound)?;

        let Some(position) = activity.participants.iter().position(|p| p == email) else {
            return Err(RegistryError::NotRegistered {
                email: email.to_string(),
                activity: name.to_string(),
            });
        };

        activity.participants.remove(position);
        tracing::info!(
            activity = name,
            email = email,
            participants = activity.participants.len(),
            "Participant unregistered"
        );
        Ok(())
    }
}
