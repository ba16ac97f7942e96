//! Session state, role-gated navigation and the search/login flows of the
//! ParkSpot client, independent of how they are rendered.

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod flows;
pub mod navigation;
pub mod services;

pub use auth::context::{Session, SessionStore};
pub use client::{ApiSettings, create_client};
pub use config::AuthConfig;
pub use error::{AuthError, LogoutTransportError, SearchError, ValidationError};
pub use flows::{CitySearch, LoginFlow, Submission};
pub use navigation::{AccessLevel, History, NavigationBar, Navigator, Route};
pub use services::ParkingApi;
