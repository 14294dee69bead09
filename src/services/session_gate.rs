// src/services/session_gate.rs
//
// SessionGate: external auth collaborator, consulted only to gate
// access to the catalog and to end a session. Account creation and
// token lifecycle live with the provider, not here.

use std::sync::{Arc, RwLock};

use crate::error::{AppError, AppResult};
use crate::events::{EventBus, SessionEnded};

#[cfg_attr(test, mockall::automock)]
pub trait SessionGate: Send + Sync {
    /// The signed-in user, if any.
    fn current_user(&self) -> Option<String>;

    /// End the active session.
    fn logout(&self);
}

/// The catalog view is reachable only when a user is present; callers
/// redirect to their login entry point on Unauthorized.
pub fn require_user(gate: &dyn SessionGate) -> AppResult<String> {
    gate.current_user().ok_or(AppError::Unauthorized)
}

/// In-memory gate used for local composition and tests. A real
/// deployment adapts the external auth provider behind the same trait.
pub struct InMemorySessionGate {
    user: RwLock<Option<String>>,
    event_bus: Arc<EventBus>,
}

impl InMemorySessionGate {
    pub fn new(event_bus: Arc<EventBus>) -> Self {
        Self {
            user: RwLock::new(None),
            event_bus,
        }
    }

    pub fn login(&self, user_id: impl Into<String>) {
        *self.user.write().unwrap() = Some(user_id.into());
    }
}

impl SessionGate for InMemorySessionGate {
    fn current_user(&self) -> Option<String> {
        self.user.read().unwrap().clone()
    }

    fn logout(&self) {
        let ended = self.user.write().unwrap().take();
        if let Some(user_id) = ended {
            self.event_bus.emit(SessionEnded::new(user_id));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_user_without_session_is_unauthorized() {
        let bus = Arc::new(EventBus::new());
        let gate = InMemorySessionGate::new(bus);

        assert!(matches!(
            require_user(&gate),
            Err(AppError::Unauthorized)
        ));
    }

    #[test]
    fn test_login_then_require_user() {
        let bus = Arc::new(EventBus::new());
        let gate = InMemorySessionGate::new(bus);

        gate.login("user-1");
        assert_eq!(require_user(&gate).unwrap(), "user-1");
    }

    #[test]
    fn test_logout_ends_session_and_emits_event() {
        let bus = Arc::new(EventBus::new());
        let gate = InMemorySessionGate::new(Arc::clone(&bus));

        gate.login("user-1");
        gate.logout();

        assert!(gate.current_user().is_none());
        let log = bus.get_event_log();
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].event_type, "SessionEnded");
    }

    #[test]
    fn test_logout_without_session_is_a_noop() {
        let bus = Arc::new(EventBus::new());
        let gate = InMemorySessionGate::new(Arc::clone(&bus));

        gate.logout();
        assert!(bus.get_event_log().is_empty());
    }
}
