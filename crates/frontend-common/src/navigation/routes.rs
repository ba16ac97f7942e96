//! Pages of the application and their paths

use super::links::VisibilityRule;
use crate::error::UnknownRoute;
use parkspot_http::ResourceId;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Login,
    Register,
    LotsByCity,
    Lots,
    /// Slot selection for one lot
    Slots { lot_id: ResourceId },
    TicketHistory,
    AddLot,
    ViewLot,
    Manage,
}

impl Route {
    pub fn slots(lot_id: ResourceId) -> Self {
        Self::Slots { lot_id }
    }

    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Login => "/login".to_string(),
            Self::Register => "/register".to_string(),
            Self::LotsByCity => "/lotsByCity".to_string(),
            Self::Lots => "/lots".to_string(),
            Self::Slots { lot_id } => format!("/slots/{lot_id}"),
            Self::TicketHistory => "/ticket-history".to_string(),
            Self::AddLot => "/addLot".to_string(),
            Self::ViewLot => "/viewLot".to_string(),
            Self::Manage => "/manage".to_string(),
        }
    }

    /// Who may enter the page
    pub fn access(&self) -> VisibilityRule {
        match self {
            Self::AddLot | Self::ViewLot | Self::Manage => VisibilityRule::Admin,
            Self::TicketHistory => VisibilityRule::Authenticated,
            Self::Home
            | Self::Login
            | Self::Register
            | Self::LotsByCity
            | Self::Lots
            | Self::Slots { .. } => VisibilityRule::Public,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

impl FromStr for Route {
    type Err = UnknownRoute;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        let trimmed = path.trim();
        let normalized = match trimmed.trim_end_matches('/') {
            "" => "/",
            other => other,
        };

        let route = match normalized {
            "/" => Self::Home,
            "/login" => Self::Login,
            "/register" => Self::Register,
            "/lotsByCity" => Self::LotsByCity,
            "/lots" => Self::Lots,
            "/ticket-history" => Self::TicketHistory,
            "/addLot" => Self::AddLot,
            "/viewLot" => Self::ViewLot,
            "/manage" => Self::Manage,
            other => match other.strip_prefix("/slots/") {
                Some(lot_id) if !lot_id.is_empty() && !lot_id.contains('/') => {
                    Self::slots(ResourceId::from(lot_id))
                }
                _ => return Err(UnknownRoute(trimmed.to_string())),
            },
        };
        Ok(route)
    }
}
