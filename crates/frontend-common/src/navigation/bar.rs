//! Navigation bar: visible links, the collapsible menu and logout

use super::links::{AccessLevel, AccountPanel, NavLink};
use super::navigator::Navigator;
use super::routes::Route;
use crate::auth::context::SessionStore;
use crate::services::ParkingApi;
use tracing::warn;

/// How a logout ended on the server side. Locally it always succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoutOutcome {
    /// The server ended its session too
    Confirmed,
    /// The request failed; the server session may still be alive
    LocalOnly,
}

pub struct NavigationBar {
    session: SessionStore,
    menu_open: bool,
}

impl NavigationBar {
    pub fn new(session: SessionStore) -> Self {
        Self {
            session,
            menu_open: false,
        }
    }

    pub fn access(&self) -> AccessLevel {
        AccessLevel::from_session(&self.session.session())
    }

    pub fn visible_links(&self) -> Vec<&'static NavLink> {
        self.access().visible_links()
    }

    pub fn account_panel(&self) -> AccountPanel {
        self.access().account_panel()
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn follow<N: Navigator + ?Sized>(&mut self, link: &NavLink, navigator: &mut N) {
        self.menu_open = false;
        navigator.navigate(link.target.clone());
    }

    /// Log out, clear the session whatever the server said, then go to login
    pub async fn logout<A, N>(&mut self, api: &A, navigator: &mut N) -> LogoutOutcome
    where
        A: ParkingApi + ?Sized,
        N: Navigator + ?Sized,
    {
        let outcome = match api.logout().await {
            Ok(()) => LogoutOutcome::Confirmed,
            Err(err) => {
                warn!(error = %err, "logout request failed, clearing local session anyway");
                LogoutOutcome::LocalOnly
            }
        };

        self.session.set_identity(None);
        self.menu_open = false;
        navigator.navigate(Route::Login);
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LogoutTransportError;
    use crate::navigation::links::{GUEST_LINKS, PUBLIC_LINKS};
    use crate::navigation::navigator::History;
    use crate::services::api::mock::MockParkingApi;
    use parkspot_http::{Identity, Role};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn signed_in_store(role: Role) -> SessionStore {
        let store = SessionStore::new();
        store.set_identity(Some(Identity {
            id: 7.into(),
            email: "a@b.com".into(),
            role,
        }));
        store
    }

    #[tokio::test]
    async fn test_logout_clears_session_and_goes_to_login() {
        let mut api = MockParkingApi::new();
        api.expect_logout().times(1).returning(|| Ok(()));

        let store = signed_in_store(Role::User);
        let mut bar = NavigationBar::new(store.clone());
        let mut history = History::new();

        let outcome = bar.logout(&api, &mut history).await;

        assert_eq!(outcome, LogoutOutcome::Confirmed);
        assert_eq!(store.identity(), None);
        assert_eq!(history.current(), &Route::Login);
        assert_eq!(bar.access(), AccessLevel::Anonymous);
    }

    #[tokio::test]
    async fn test_logout_clears_session_even_when_request_fails() {
        let mut api = MockParkingApi::new();
        api.expect_logout()
            .times(1)
            .returning(|| Err(LogoutTransportError::new("connection refused")));

        let store = signed_in_store(Role::Admin);
        let mut bar = NavigationBar::new(store.clone());
        let mut history = History::new();

        let outcome = bar.logout(&api, &mut history).await;

        // The server session may survive; the UI must not
        assert_eq!(outcome, LogoutOutcome::LocalOnly);
        assert_eq!(store.identity(), None);
        assert_eq!(history.current(), &Route::Login);
        assert_eq!(
            bar.account_panel(),
            AccountPanel::SignIn {
                links: &GUEST_LINKS
            }
        );
    }

    #[tokio::test]
    async fn test_subscribers_rerender_on_logout() {
        let mut api = MockParkingApi::new();
        api.expect_logout().returning(|| Ok(()));

        let store = signed_in_store(Role::Admin);
        let rendered = Rc::new(RefCell::new(Vec::new()));
        {
            let rendered = Rc::clone(&rendered);
            store.subscribe(move |session| {
                let labels: Vec<_> = AccessLevel::from_session(session)
                    .visible_links()
                    .into_iter()
                    .map(|link| link.label)
                    .collect();
                rendered.borrow_mut().push(labels);
            });
        }

        let mut bar = NavigationBar::new(store);
        bar.logout(&api, &mut History::new()).await;

        assert_eq!(*rendered.borrow(), vec![vec!["Home", "Lots"]]);
    }

    #[tokio::test]
    async fn test_logout_closes_menu() {
        let mut api = MockParkingApi::new();
        api.expect_logout().returning(|| Ok(()));

        let mut bar = NavigationBar::new(signed_in_store(Role::User));
        bar.toggle_menu();
        assert!(bar.menu_open());

        bar.logout(&api, &mut History::new()).await;
        assert!(!bar.menu_open());
    }

    #[test]
    fn test_following_a_link_closes_menu() {
        let mut bar = NavigationBar::new(SessionStore::new());
        let mut history = History::new();
        bar.toggle_menu();

        bar.follow(&PUBLIC_LINKS[1], &mut history);

        assert!(!bar.menu_open());
        assert_eq!(history.current(), &Route::LotsByCity);
    }

    #[test]
    fn test_links_follow_session_changes() {
        let store = SessionStore::new();
        let bar = NavigationBar::new(store.clone());
        assert_eq!(bar.visible_links().len(), 2);

        store.set_identity(Some(Identity {
            id: 1.into(),
            email: "u@b.com".into(),
            role: Role::User,
        }));
        assert_eq!(bar.visible_links().len(), 3);
    }
}
