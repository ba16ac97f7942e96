//! Common types used by the client and anything speaking the ParkSpot wire format

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Opaque identifier as handed out by the server.
///
/// The backend emits either numeric ids or document id strings, so both decode
/// into the same textual form (`7` becomes `"7"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ResourceId(String);

impl ResourceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ResourceId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<u64> for ResourceId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl<'de> Deserialize<'de> for ResourceId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Unsigned(u64),
            Signed(i64),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(text) => Self(text),
            Raw::Unsigned(n) => Self(n.to_string()),
            Raw::Signed(n) => Self(n.to_string()),
        })
    }
}

/// Account role as reported by the server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    /// Human readable label for badges
    pub const fn label(self) -> &'static str {
        match self {
            Self::User => "User",
            Self::Admin => "Admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User => f.write_str("user"),
            Self::Admin => f.write_str("admin"),
        }
    }
}

/// The pair of id fields a document may carry. Mongo style payloads send
/// `_id`, sometimes alongside an `id` virtual holding the same value.
#[derive(Deserialize)]
struct WireIds {
    #[serde(default)]
    id: Option<ResourceId>,
    #[serde(default, rename = "_id")]
    document_id: Option<ResourceId>,
}

impl WireIds {
    fn resolve(self) -> Result<ResourceId, &'static str> {
        self.document_id
            .or(self.id)
            .ok_or("missing field `id` or `_id`")
    }
}

#[derive(Deserialize)]
struct IdentityWire {
    #[serde(flatten)]
    ids: WireIds,
    email: String,
    role: Role,
}

/// The authenticated account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "IdentityWire")]
pub struct Identity {
    pub id: ResourceId,
    pub email: String,
    pub role: Role,
}

impl TryFrom<IdentityWire> for Identity {
    type Error = &'static str;

    fn try_from(wire: IdentityWire) -> Result<Self, Self::Error> {
        Ok(Self {
            id: wire.ids.resolve()?,
            email: wire.email,
            role: wire.role,
        })
    }
}

impl Identity {
    pub fn is_admin(&self) -> bool {
        matches!(self.role, Role::Admin)
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LotWire {
    #[serde(flatten)]
    ids: WireIds,
    name: String,
    city: String,
    #[serde(default)]
    address: Option<String>,
    #[serde(default)]
    total_spaces: Option<u32>,
    #[serde(default)]
    price_per_hour: Option<f64>,
}

/// A parking lot returned by the city search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "LotWire")]
pub struct Lot {
    pub id: ResourceId,
    pub name: String,
    pub city: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_spaces: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_per_hour: Option<f64>,
}

impl TryFrom<LotWire> for Lot {
    type Error = &'static str;

    fn try_from(wire: LotWire) -> Result<Self, Self::Error> {
        Ok(Self {
            id: wire.ids.resolve()?,
            name: wire.name,
            city: wire.city,
            address: wire.address,
            total_spaces: wire.total_spaces,
            price_per_hour: wire.price_per_hour,
        })
    }
}

/// Login request
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response and who-am-I response
#[derive(Debug, Serialize, Deserialize)]
pub struct UserResponse {
    pub user: Identity,
}

/// City search request
#[derive(Debug, Serialize, Deserialize)]
pub struct CitySearchRequest {
    pub city: String,
}

/// City search response
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CitySearchResponse {
    #[serde(rename = "lotsCity", default)]
    pub lots_city: Vec<Lot>,
}

/// Error body returned with non-2xx statuses
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub msg: Option<String>,
}
