//! Client state module
//!
//! This module holds the state that drives rendering: which action an event
//! offers, which view is visible, which controls are locked and which view
//! fetches are still current.

pub mod action;
pub mod control;
pub mod sequence;
pub mod navigation;

// Re-export main components
pub use action::{ActionState, ActionInputs};
pub use control::{Control, ControlLock};
pub use sequence::{RequestSequence, Ticket};
pub use navigation::ViewKind;
