//! Services module
//!
//! This module contains the transport to the Playfield server

pub mod api;
pub mod routes;

pub use api::PlayfieldApi;
