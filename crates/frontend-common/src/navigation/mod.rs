//! Role-gated navigation

pub mod bar;
pub mod guard;
pub mod home;
pub mod links;
pub mod navigator;
pub mod routes;

pub use bar::{LogoutOutcome, NavigationBar};
pub use guard::{GuardDecision, guard};
pub use home::{FEATURE_CARDS, FeatureCard, open_card};
pub use links::{AccessLevel, AccountPanel, NavLink, VisibilityRule};
pub use navigator::{History, Navigator};
pub use routes::Route;
