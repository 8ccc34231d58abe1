use serde::Serialize;
use tracing::{info, warn};

use crate::error::RosterError;
use crate::models::{Activity, Registry};
use crate::store::RosterStore;

/// Body returned by a successful signup or removal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Confirmation {
    pub message: String,
}

pub fn list_activities(store: &RosterStore) -> Registry {
    store.list_activities()
}

pub fn get_activity(store: &RosterStore, activity_name: &str) -> Result<Activity, RosterError> {
    store.get_activity(activity_name)
}

pub fn sign_up(
    store: &RosterStore,
    activity_name: &str,
    email: &str,
) -> Result<Confirmation, RosterError> {
    match store.enroll(activity_name, email) {
        Ok(()) => {
            info!(activity = %activity_name, email = %email, "signup_ok");
            Ok(Confirmation {
                message: format!("Signed up {} for {}", email, activity_name),
            })
        }
        Err(e) => {
            warn!(activity = %activity_name, email = %email, error = %e, "signup_rejected");
            Err(e)
        }
    }
}

pub fn remove_participant(
    store: &RosterStore,
    activity_name: &str,
    email: &str,
) -> Result<Confirmation, RosterError> {
    match store.disenroll(activity_name, email) {
        Ok(()) => {
            info!(activity = %activity_name, email = %email, "removal_ok");
            Ok(Confirmation {
                message: format!("Removed {} from {}", email, activity_name),
            })
        }
        Err(e) => {
            warn!(activity = %activity_name, email = %email, error = %e, "removal_rejected");
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_up_message_names_email_and_activity() {
        let store = RosterStore::seeded();
        let ok = sign_up(&store, "Chess Club", "newstudent@mergington.edu").unwrap();

        assert_eq!(
            ok.message,
            "Signed up newstudent@mergington.edu for Chess Club"
        );
    }

    #[test]
    fn remove_message_names_email_and_activity() {
        let store = RosterStore::seeded();
        let ok = remove_participant(&store, "Chess Club", "michael@mergington.edu").unwrap();

        assert_eq!(ok.message, "Removed michael@mergington.edu from Chess Club");
        assert!(!get_activity(&store, "Chess Club")
            .unwrap()
            .is_enrolled("michael@mergington.edu"));
    }

    #[test]
    fn errors_pass_through() {
        let store = RosterStore::seeded();

        assert!(matches!(
            sign_up(&store, "Chess Club", "michael@mergington.edu"),
            Err(RosterError::AlreadyEnrolled { .. })
        ));
        assert!(matches!(
            remove_participant(&store, "Nonexistent Club", "x@x.edu"),
            Err(RosterError::NotFound { .. })
        ));
    }
}
