//! Navigation links and which session state sees them

use super::routes::Route;
use crate::auth::context::Session;
use parkspot_http::{Identity, Role};

/// Who a link is shown to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VisibilityRule {
    Public,
    Authenticated,
    Admin,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub target: Route,
    pub label: &'static str,
    pub visibility: VisibilityRule,
}

pub static PUBLIC_LINKS: [NavLink; 2] = [
    NavLink {
        target: Route::Home,
        label: "Home",
        visibility: VisibilityRule::Public,
    },
    NavLink {
        target: Route::LotsByCity,
        label: "Lots",
        visibility: VisibilityRule::Public,
    },
];

pub static USER_LINKS: [NavLink; 1] = [NavLink {
    target: Route::TicketHistory,
    label: "My Tickets",
    visibility: VisibilityRule::Authenticated,
}];

pub static ADMIN_LINKS: [NavLink; 3] = [
    NavLink {
        target: Route::AddLot,
        label: "Add Lot",
        visibility: VisibilityRule::Admin,
    },
    NavLink {
        target: Route::ViewLot,
        label: "View Lot",
        visibility: VisibilityRule::Admin,
    },
    NavLink {
        target: Route::Manage,
        label: "Manage",
        visibility: VisibilityRule::Admin,
    },
];

static NO_LINKS: [NavLink; 0] = [];

/// Sign-in entry points, shown by the account panel only while anonymous
pub static GUEST_LINKS: [NavLink; 2] = [
    NavLink {
        target: Route::Login,
        label: "Login",
        visibility: VisibilityRule::Public,
    },
    NavLink {
        target: Route::Register,
        label: "Register",
        visibility: VisibilityRule::Public,
    },
];

/// Navigation state, derived from the session alone
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessLevel {
    Anonymous,
    User(Identity),
    Admin(Identity),
}

impl AccessLevel {
    pub fn from_session(session: &Session) -> Self {
        match session.identity() {
            None => Self::Anonymous,
            Some(identity) => match identity.role {
                Role::User => Self::User(identity.clone()),
                Role::Admin => Self::Admin(identity.clone()),
            },
        }
    }

    pub fn identity(&self) -> Option<&Identity> {
        match self {
            Self::Anonymous => None,
            Self::User(identity) | Self::Admin(identity) => Some(identity),
        }
    }

    /// Admin inherits everything a user may see
    pub fn allows(&self, rule: VisibilityRule) -> bool {
        match (self, rule) {
            (_, VisibilityRule::Public) => true,
            (Self::Anonymous, _) => false,
            (Self::User(_), VisibilityRule::Authenticated) => true,
            (Self::User(_), VisibilityRule::Admin) => false,
            (Self::Admin(_), _) => true,
        }
    }

    /// `public ∪ user links (if signed in) ∪ admin links (if admin)`
    pub fn visible_links(&self) -> Vec<&'static NavLink> {
        let (user, admin): (&'static [NavLink], &'static [NavLink]) = match self {
            Self::Anonymous => (&NO_LINKS[..], &NO_LINKS[..]),
            Self::User(_) => (&USER_LINKS[..], &NO_LINKS[..]),
            Self::Admin(_) => (&USER_LINKS[..], &ADMIN_LINKS[..]),
        };
        PUBLIC_LINKS.iter().chain(user).chain(admin).collect()
    }

    pub fn account_panel(&self) -> AccountPanel {
        match self {
            Self::Anonymous => AccountPanel::SignIn {
                links: &GUEST_LINKS[..],
            },
            Self::User(_) => AccountPanel::SignedIn { role: Role::User },
            Self::Admin(_) => AccountPanel::SignedIn { role: Role::Admin },
        }
    }
}

/// Right-hand side of the navigation bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountPanel {
    SignIn { links: &'static [NavLink] },
    /// "Welcome" with a role badge and the logout action
    SignedIn { role: Role },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::context::SessionStore;
    use std::collections::HashSet;

    fn targets(level: &AccessLevel) -> HashSet<Route> {
        level
            .visible_links()
            .into_iter()
            .map(|link| link.target.clone())
            .collect()
    }

    fn signed_in(role: Role) -> AccessLevel {
        let store = SessionStore::new();
        store.set_identity(Some(Identity {
            id: 7.into(),
            email: "a@b.com".into(),
            role,
        }));
        AccessLevel::from_session(&store.session())
    }

    #[test]
    fn test_state_follows_session() {
        assert_eq!(
            AccessLevel::from_session(&Session::default()),
            AccessLevel::Anonymous
        );
        assert!(matches!(signed_in(Role::User), AccessLevel::User(_)));
        assert!(matches!(signed_in(Role::Admin), AccessLevel::Admin(_)));
    }

    #[test]
    fn test_link_sets_are_strictly_nested() {
        let anonymous = targets(&AccessLevel::Anonymous);
        let user = targets(&signed_in(Role::User));
        let admin = targets(&signed_in(Role::Admin));

        assert!(anonymous.is_subset(&user) && anonymous != user);
        assert!(user.is_subset(&admin) && user != admin);
    }

    #[test]
    fn test_admin_links_only_for_admin() {
        for level in [AccessLevel::Anonymous, signed_in(Role::User)] {
            assert!(
                level
                    .visible_links()
                    .iter()
                    .all(|link| link.visibility != VisibilityRule::Admin)
            );
        }
        let admin = signed_in(Role::Admin);
        let admin_links: Vec<_> = admin
            .visible_links()
            .into_iter()
            .filter(|link| link.visibility == VisibilityRule::Admin)
            .map(|link| link.label)
            .collect();
        assert_eq!(admin_links, vec!["Add Lot", "View Lot", "Manage"]);
    }

    #[test]
    fn test_anonymous_sees_public_links_in_order() {
        let labels: Vec<_> = AccessLevel::Anonymous
            .visible_links()
            .into_iter()
            .map(|link| link.label)
            .collect();
        assert_eq!(labels, vec!["Home", "Lots"]);
    }

    #[test]
    fn test_account_panel() {
        assert_eq!(
            AccessLevel::Anonymous.account_panel(),
            AccountPanel::SignIn {
                links: &GUEST_LINKS
            }
        );
        assert_eq!(
            signed_in(Role::Admin).account_panel(),
            AccountPanel::SignedIn { role: Role::Admin }
        );
    }

    #[test]
    fn test_every_link_respects_its_own_rule() {
        for level in [
            AccessLevel::Anonymous,
            signed_in(Role::User),
            signed_in(Role::Admin),
        ] {
            for link in level.visible_links() {
                assert!(level.allows(link.visibility));
                assert!(level.allows(link.target.access()));
            }
        }
    }
}
