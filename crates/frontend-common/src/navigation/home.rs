//! Landing page feature cards

use super::guard::{GuardDecision, guard};
use super::links::AccessLevel;
use super::navigator::Navigator;
use super::routes::Route;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureCard {
    pub title: &'static str,
    pub description: &'static str,
    pub target: Route,
}

/// Shown to everyone; entering a target still goes through the route guard
pub static FEATURE_CARDS: [FeatureCard; 3] = [
    FeatureCard {
        title: "Find Nearby Lots",
        description: "Discover parking spaces close to your destination with real-time availability.",
        target: Route::LotsByCity,
    },
    FeatureCard {
        title: "Instant Booking",
        description: "Reserve your spot in seconds with our streamlined booking process.",
        target: Route::Lots,
    },
    FeatureCard {
        title: "Secure Payment",
        description: "Pay safely with our encrypted payment system and get instant confirmation.",
        target: Route::TicketHistory,
    },
];

/// Follow a card, landing wherever the guard sends the current session
pub fn open_card<N: Navigator + ?Sized>(
    card: &FeatureCard,
    access: &AccessLevel,
    navigator: &mut N,
) -> GuardDecision {
    let decision = guard(&card.target, access);
    match &decision {
        GuardDecision::Allow => navigator.navigate(card.target.clone()),
        GuardDecision::Redirect(to) => navigator.navigate(to.clone()),
    }
    decision
}
