use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::RosterError;
use crate::models::{Activity, Registry};
use crate::store::seed;

/// Shared handle to the in-memory registry. Clones point at the same data;
/// build a new store to get an isolated one.
///
/// Every operation holds the lock for its whole check-then-mutate step, so
/// concurrent handlers never observe a half-applied change or lose an update.
#[derive(Debug, Clone)]
pub struct RosterStore {
    registry: Arc<RwLock<Registry>>,
}

impl RosterStore {
    pub fn new(registry: Registry) -> Self {
        Self {
            registry: Arc::new(RwLock::new(registry)),
        }
    }

    /// Store populated with the built-in school activities.
    pub fn seeded() -> Self {
        Self::new(seed::default_registry())
    }

    /// Snapshot of every activity with its current roster.
    pub fn list_activities(&self) -> Registry {
        self.read().clone()
    }

    pub fn get_activity(&self, activity_name: &str) -> Result<Activity, RosterError> {
        self.read()
            .get(activity_name)
            .cloned()
            .ok_or_else(|| not_found(activity_name))
    }

    /// Appends `email` to the roster. Capacity is not checked.
    pub fn enroll(&self, activity_name: &str, email: &str) -> Result<(), RosterError> {
        let mut registry = self.write();
        let activity = registry
            .get_mut(activity_name)
            .ok_or_else(|| not_found(activity_name))?;

        if activity.is_enrolled(email) {
            return Err(RosterError::AlreadyEnrolled {
                activity: activity_name.to_string(),
                email: email.to_string(),
            });
        }

        activity.participants.push(email.to_string());
        Ok(())
    }

    /// Removes `email` from the roster, keeping the order of the rest.
    pub fn disenroll(&self, activity_name: &str, email: &str) -> Result<(), RosterError> {
        let mut registry = self.write();
        let activity = registry
            .get_mut(activity_name)
            .ok_or_else(|| not_found(activity_name))?;

        let Some(idx) = activity.participants.iter().position(|p| p == email) else {
            return Err(RosterError::NotEnrolled {
                activity: activity_name.to_string(),
                email: email.to_string(),
            });
        };

        activity.participants.remove(idx);
        Ok(())
    }

    // A panic can't leave a partial edit behind (each mutation is a single
    // Vec push/remove), so a poisoned lock still guards consistent data.
    fn read(&self) -> RwLockReadGuard<'_, Registry> {
        self.registry.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Registry> {
        self.registry.write().unwrap_or_else(PoisonError::into_inner)
    }
}

fn not_found(activity_name: &str) -> RosterError {
    RosterError::NotFound {
        activity: activity_name.to_string(),
    }
}
