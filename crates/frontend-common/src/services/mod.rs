//! Services talking to the ParkSpot backend

pub mod api;

pub use api::ParkingApi;
