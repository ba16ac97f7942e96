//! ParkSpot HTTP module providing the API client and its wire types
//!
//! The wire types are always available so other crates can share them without
//! pulling in the reqwest client.

pub mod types;

#[cfg(feature = "client")]
pub mod client;

#[cfg(feature = "client")]
pub use client::{ParkingClient, ParkingClientBuilder, error::ClientError};
pub use types::{Identity, Lot, ResourceId, Role};
