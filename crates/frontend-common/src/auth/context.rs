//! Shared session context and its store

use crate::services::ParkingApi;
use parkspot_http::Identity;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{info, warn};

/// The signed-in account, if any
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    identity: Option<Identity>,
}

impl Session {
    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    fn reduce(&self, action: SessionAction) -> Self {
        match action {
            SessionAction::SignIn(identity) => {
                if let Some(previous) = &self.identity
                    && previous.id != identity.id
                {
                    warn!(previous = %previous.id, "replacing an active session");
                }
                Self {
                    identity: Some(identity),
                }
            }
            SessionAction::SignOut => Self { identity: None },
        }
    }
}

/// Session transitions
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionAction {
    SignIn(Identity),
    SignOut,
}

/// Handle returned by [`SessionStore::subscribe`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Rc<dyn Fn(&Session)>;

#[derive(Default)]
struct StoreInner {
    session: Session,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

/// Single owner of the session.
///
/// Clones share the same state. Listeners run synchronously after every change,
/// once the new state is committed, so they may read the store.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Rc<RefCell<StoreInner>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current identity
    pub fn identity(&self) -> Option<Identity> {
        self.inner.borrow().session.identity.clone()
    }

    /// Snapshot of the whole session
    pub fn session(&self) -> Session {
        self.inner.borrow().session.clone()
    }

    /// `Some` signs in, `None` signs out. No validation happens here.
    pub fn set_identity(&self, identity: Option<Identity>) {
        match identity {
            Some(identity) => self.dispatch(SessionAction::SignIn(identity)),
            None => self.dispatch(SessionAction::SignOut),
        }
    }

    pub fn dispatch(&self, action: SessionAction) {
        let (session, listeners) = {
            let mut inner = self.inner.borrow_mut();
            let next = inner.session.reduce(action);
            if next == inner.session {
                return;
            }
            inner.session = next;
            let listeners: Vec<Listener> = inner
                .listeners
                .iter()
                .map(|(_, listener)| Rc::clone(listener))
                .collect();
            (inner.session.clone(), listeners)
        };

        match session.identity() {
            Some(identity) => info!(user = %identity.id, role = %identity.role, "signed in"),
            None => info!("signed out"),
        }

        for listener in listeners {
            listener(&session);
        }
    }

    pub fn subscribe(&self, listener: impl Fn(&Session) + 'static) -> SubscriptionId {
        let mut inner = self.inner.borrow_mut();
        let id = SubscriptionId(inner.next_id);
        inner.next_id += 1;
        inner.listeners.push((id, Rc::new(listener)));
        id
    }

    /// Returns false if the subscription was already gone
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut inner = self.inner.borrow_mut();
        let before = inner.listeners.len();
        inner.listeners.retain(|(existing, _)| *existing != id);
        inner.listeners.len() != before
    }

    /// Re-establish the session from the server's cookie, if it still has one.
    ///
    /// Returns the identity the server confirmed. When the server cannot be
    /// reached the current session is kept as it is.
    pub async fn restore<A: ParkingApi + ?Sized>(&self, api: &A) -> Option<Identity> {
        match api.current_user().await {
            Ok(Some(identity)) => {
                self.set_identity(Some(identity.clone()));
                Some(identity)
            }
            Ok(None) => {
                self.set_identity(None);
                None
            }
            Err(err) => {
                warn!(error = %err, "could not restore session");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AuthError;
    use crate::services::api::mock::MockParkingApi;
    use parkspot_http::Role;
    use std::cell::Cell;

    fn identity(id: u64, role: Role) -> Identity {
        Identity {
            id: id.into(),
            email: format!("user{id}@example.com"),
            role,
        }
    }

    #[test]
    fn test_starts_empty() {
        let store = SessionStore::new();
        assert_eq!(store.identity(), None);
        assert!(!store.session().is_authenticated());
    }

    #[test]
    fn test_sign_in_and_out() {
        let store = SessionStore::new();
        store.set_identity(Some(identity(1, Role::User)));
        assert_eq!(store.identity(), Some(identity(1, Role::User)));

        store.set_identity(None);
        assert_eq!(store.identity(), None);
    }

    #[test]
    fn test_clones_share_state() {
        let store = SessionStore::new();
        let reader = store.clone();
        store.set_identity(Some(identity(2, Role::Admin)));
        assert!(reader.identity().is_some_and(|i| i.is_admin()));
    }

    #[test]
    fn test_sign_in_replaces_previous_identity() {
        let store = SessionStore::new();
        store.set_identity(Some(identity(1, Role::User)));
        store.set_identity(Some(identity(2, Role::Admin)));
        assert_eq!(store.identity(), Some(identity(2, Role::Admin)));
    }

    #[test]
    fn test_listeners_see_committed_state() {
        let store = SessionStore::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        {
            let seen = Rc::clone(&seen);
            let reader = store.clone();
            store.subscribe(move |session| {
                // The store is readable from inside the callback
                assert_eq!(reader.session(), *session);
                seen.borrow_mut().push(session.is_authenticated());
            });
        }

        store.set_identity(Some(identity(1, Role::User)));
        store.set_identity(None);

        assert_eq!(*seen.borrow(), vec![true, false]);
    }

    #[test]
    fn test_unchanged_state_does_not_notify() {
        let store = SessionStore::new();
        let calls = Rc::new(Cell::new(0));
        {
            let calls = Rc::clone(&calls);
            store.subscribe(move |_| calls.set(calls.get() + 1));
        }

        store.set_identity(None);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_unsubscribe() {
        let store = SessionStore::new();
        let calls = Rc::new(Cell::new(0));
        let id = {
            let calls = Rc::clone(&calls);
            store.subscribe(move |_| calls.set(calls.get() + 1))
        };

        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.set_identity(Some(identity(1, Role::User)));
        assert_eq!(calls.get(), 0);
    }

    #[tokio::test]
    async fn test_restore_signs_in() {
        let mut api = MockParkingApi::new();
        api.expect_current_user()
            .times(1)
            .returning(|| Ok(Some(identity(5, Role::User))));

        let store = SessionStore::new();
        assert_eq!(store.restore(&api).await, Some(identity(5, Role::User)));
        assert_eq!(store.identity(), Some(identity(5, Role::User)));
    }

    #[tokio::test]
    async fn test_restore_without_server_session_clears() {
        let mut api = MockParkingApi::new();
        api.expect_current_user().returning(|| Ok(None));

        let store = SessionStore::new();
        store.set_identity(Some(identity(5, Role::User)));
        assert_eq!(store.restore(&api).await, None);
        assert_eq!(store.identity(), None);
    }

    #[tokio::test]
    async fn test_restore_failure_keeps_state() {
        let mut api = MockParkingApi::new();
        api.expect_current_user()
            .returning(|| Err(AuthError::new("unreachable")));

        let store = SessionStore::new();
        store.set_identity(Some(identity(5, Role::User)));
        let calls = Rc::new(Cell::new(0));
        {
            let calls = Rc::clone(&calls);
            store.subscribe(move |_| calls.set(calls.get() + 1));
        }

        assert_eq!(store.restore(&api).await, None);
        assert_eq!(store.identity(), Some(identity(5, Role::User)));
        assert_eq!(calls.get(), 0);
    }
}
