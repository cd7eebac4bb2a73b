//! Interactive control lockout
//!
//! A control is disabled for the lifetime of the request it triggered. The
//! lock re-enables it on drop, so every exit path (success, rejection,
//! transport failure, early return) releases it.

use std::sync::atomic::{AtomicBool, Ordering};

use tracing::debug;

/// A clickable control (button, submit) that can be disabled
#[derive(Debug)]
pub struct Control {
    id: String,
    disabled: AtomicBool,
}

impl Control {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            disabled: AtomicBool::new(false),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled.load(Ordering::Acquire)
    }

    /// Disable the control for the duration of a request
    ///
    /// Returns `None` while another request holds it; the click is a no-op.
    pub fn try_lock(&self) -> Option<ControlLock<'_>> {
        match self
            .disabled
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
        {
            Ok(_) => Some(ControlLock { control: self }),
            Err(_) => {
                debug!(control = %self.id, "Control is disabled, ignoring activation");
                None
            }
        }
    }
}

/// Keeps a [`Control`] disabled until dropped
#[derive(Debug)]
pub struct ControlLock<'a> {
    control: &'a Control,
}

impl Drop for ControlLock<'_> {
    fn drop(&mut self) {
        self.control.disabled.store(false, Ordering::Release);
    }
}
