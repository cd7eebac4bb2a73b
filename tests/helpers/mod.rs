//! Test helpers module
//!
//! This module provides utilities and helpers for testing the Playfield client.
//! It includes the mock Playfield server, JSON fixtures and a recording
//! feedback sink.

#![allow(dead_code)]

pub mod playfield_mock;
pub mod test_data;
pub mod feedback;

pub use playfield_mock::*;
pub use test_data::*;
pub use feedback::*;
