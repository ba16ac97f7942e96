//! Route guard: may the current session enter a page

use super::links::{AccessLevel, VisibilityRule};
use super::routes::Route;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(Route),
}

/// Anonymous visitors are sent to log in, signed-in non-admins to the landing page.
///
/// The server still enforces the same rules on its side.
pub fn guard(route: &Route, access: &AccessLevel) -> GuardDecision {
    let required = route.access();
    if access.allows(required) {
        return GuardDecision::Allow;
    }
    match access {
        AccessLevel::Anonymous => GuardDecision::Redirect(Route::Login),
        AccessLevel::User(_) | AccessLevel::Admin(_) => {
            debug_assert_ne!(required, VisibilityRule::Public);
            GuardDecision::Redirect(Route::Home)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parkspot_http::{Identity, ResourceId, Role};

    fn level(role: Role) -> AccessLevel {
        let identity = Identity {
            id: ResourceId::from(1),
            email: "a@b.com".into(),
            role,
        };
        match role {
            Role::User => AccessLevel::User(identity),
            Role::Admin => AccessLevel::Admin(identity),
        }
    }

    #[test]
    fn test_public_pages_are_open() {
        let slots = Route::slots(ResourceId::from(3));
        assert_eq!(guard(&slots, &AccessLevel::Anonymous), GuardDecision::Allow);
        assert_eq!(guard(&Route::LotsByCity, &AccessLevel::Anonymous), GuardDecision::Allow);
    }

    #[test]
    fn test_anonymous_is_sent_to_login() {
        assert_eq!(
            guard(&Route::TicketHistory, &AccessLevel::Anonymous),
            GuardDecision::Redirect(Route::Login)
        );
        assert_eq!(
            guard(&Route::Manage, &AccessLevel::Anonymous),
            GuardDecision::Redirect(Route::Login)
        );
    }

    #[test]
    fn test_user_cannot_enter_admin_pages() {
        assert_eq!(guard(&Route::TicketHistory, &level(Role::User)), GuardDecision::Allow);
        assert_eq!(
            guard(&Route::AddLot, &level(Role::User)),
            GuardDecision::Redirect(Route::Home)
        );
        assert_eq!(guard(&Route::AddLot, &level(Role::Admin)), GuardDecision::Allow);
    }
}
