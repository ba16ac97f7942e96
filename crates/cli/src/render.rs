//! Plain-text views of the client state

use parkspot_frontend_common::flows::{LoginFlow, LoginPhase, SearchPhase};
use parkspot_frontend_common::navigation::{AccessLevel, AccountPanel, FeatureCard, NavigationBar};
use parkspot_frontend_common::{CitySearch, Route};
use parkspot_http::{Identity, Lot};
use std::fmt::Write;

/// One line of links plus the account panel, e.g.
/// `Home | Lots | My Tickets    Welcome [User] (logout)`
pub fn nav_bar(bar: &NavigationBar) -> String {
    nav_line(&bar.access(), bar.menu_open())
}

pub fn nav_line(access: &AccessLevel, menu_open: bool) -> String {
    let visible = access.visible_links();
    let labels: Vec<_> = visible.iter().map(|link| link.label).collect();
    let mut line = labels.join(" | ");

    let panel = match access.account_panel() {
        AccountPanel::SignIn { links } => links
            .iter()
            .map(|link| link.label)
            .collect::<Vec<_>>()
            .join(" / "),
        AccountPanel::SignedIn { role } => format!("Welcome [{}] (logout)", role.label()),
    };
    line.push_str("    ");
    line.push_str(&panel);

    if menu_open {
        for (index, link) in visible.iter().enumerate() {
            let _ = write!(line, "\n  {}. {} ({})", index + 1, link.label, link.target);
        }
    }
    line
}

/// Landing page cards, numbered for `feature <n>`
pub fn home_view(cards: &[FeatureCard]) -> String {
    cards
        .iter()
        .enumerate()
        .map(|(index, card)| {
            format!(
                "{:>3}. {} ({})\n     {}",
                index + 1,
                card.title,
                card.target,
                card.description
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn lot_line(index: usize, lot: &Lot) -> String {
    let mut line = format!("{:>3}. {} ({})", index + 1, lot.name, lot.city);
    if let Some(address) = &lot.address {
        let _ = write!(line, ", {address}");
    }
    if let Some(spaces) = lot.total_spaces {
        let _ = write!(line, ", {spaces} spaces");
    }
    if let Some(price) = lot.price_per_hour {
        let _ = write!(line, ", ${price}/hr");
    }
    line
}

pub fn search_view(search: &CitySearch) -> String {
    let mut out = String::new();
    if let Some(validation) = search.validation() {
        let _ = writeln!(out, "{validation}");
    }

    match search.phase() {
        SearchPhase::Idle => {}
        SearchPhase::Loading { city } => {
            let _ = writeln!(out, "Searching for lots in {city}...");
        }
        SearchPhase::Results { lots, .. } => {
            if let Some(summary) = search.summary() {
                let _ = writeln!(out, "{summary}");
            }
            for (index, lot) in lots.iter().enumerate() {
                let _ = writeln!(out, "{}", lot_line(index, lot));
            }
        }
        SearchPhase::Empty { city } => {
            let _ = writeln!(out, "No parking lots found in {city}");
        }
        SearchPhase::Error { message, .. } => {
            let _ = writeln!(out, "{message}");
        }
    }
    out.trim_end().to_string()
}

pub fn login_view(flow: &LoginFlow) -> String {
    match flow.phase() {
        LoginPhase::Submitting => "Logging in...".to_string(),
        _ => flow.message().unwrap_or_default(),
    }
}

pub fn identity_line(identity: Option<&Identity>) -> String {
    match identity {
        Some(identity) => format!("{} ({})", identity.email, identity.role.label()),
        None => "Not signed in".to_string(),
    }
}

pub fn location(route: &Route) -> String {
    format!("-> {route}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use parkspot_frontend_common::SessionStore;
    use parkspot_http::{ResourceId, Role};

    fn lot() -> Lot {
        Lot {
            id: ResourceId::from(1),
            name: "Lot A".into(),
            city: "Paris".into(),
            address: Some("1 Rue de Rivoli".into()),
            total_spaces: Some(40),
            price_per_hour: Some(2.5),
        }
    }

    #[test]
    fn test_lot_line() {
        assert_eq!(
            lot_line(0, &lot()),
            "  1. Lot A (Paris), 1 Rue de Rivoli, 40 spaces, $2.5/hr"
        );

        let bare = Lot {
            address: None,
            total_spaces: None,
            price_per_hour: None,
            ..lot()
        };
        assert_eq!(lot_line(1, &bare), "  2. Lot A (Paris)");
    }

    #[test]
    fn test_nav_bar_anonymous() {
        let bar = NavigationBar::new(SessionStore::new());
        assert_eq!(nav_bar(&bar), "Home | Lots    Login / Register");
    }

    #[test]
    fn test_nav_bar_admin_with_menu() {
        let store = SessionStore::new();
        store.set_identity(Some(Identity {
            id: ResourceId::from(7),
            email: "a@b.com".into(),
            role: Role::Admin,
        }));
        let mut bar = NavigationBar::new(store);
        assert_eq!(
            nav_bar(&bar),
            "Home | Lots | My Tickets | Add Lot | View Lot | Manage    Welcome [Admin] (logout)"
        );

        bar.toggle_menu();
        let rendered = nav_bar(&bar);
        assert!(rendered.contains("\n  3. My Tickets (/ticket-history)"));
        assert!(rendered.contains("\n  6. Manage (/manage)"));
    }

    #[test]
    fn test_identity_line() {
        assert_eq!(identity_line(None), "Not signed in");
        let identity = Identity {
            id: ResourceId::from(1),
            email: "u@b.com".into(),
            role: Role::User,
        };
        assert_eq!(identity_line(Some(&identity)), "u@b.com (User)");
    }

    #[test]
    fn test_home_view_lists_cards() {
        use parkspot_frontend_common::navigation::FEATURE_CARDS;

        let rendered = home_view(&FEATURE_CARDS);
        assert!(rendered.starts_with("  1. Find Nearby Lots (/lotsByCity)\n"));
        assert!(rendered.contains("  3. Secure Payment (/ticket-history)"));
    }

    #[test]
    fn test_idle_search_renders_nothing() {
        assert_eq!(search_view(&CitySearch::new()), "");
    }
}
