//! User feedback seam
//!
//! Alerts, confirmations and notices go through [`UserFeedback`] so the
//! interaction logic does not depend on where it is displayed.

use std::io::{self, BufRead, Write};

use tracing::{info, warn};

/// How the client talks back to the user
pub trait UserFeedback: Send + Sync {
    /// Surface an error message
    fn alert(&self, message: &str);

    /// Ask before an irreversible action; `false` aborts it
    fn confirm(&self, prompt: &str) -> bool;

    /// Surface a success message
    fn notify(&self, message: &str) {
        info!(message = message, "Notice");
    }
}

/// Feedback on the terminal: alerts on stderr, confirmation on stdin
#[derive(Debug, Clone, Default)]
pub struct TerminalFeedback {
    assume_yes: bool,
}

impl TerminalFeedback {
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

impl UserFeedback for TerminalFeedback {
    fn alert(&self, message: &str) {
        eprintln!("error: {}", message);
    }

    fn confirm(&self, prompt: &str) -> bool {
        if self.assume_yes {
            return true;
        }

        eprint!("{} [y/N] ", prompt);
        if io::stderr().flush().is_err() {
            return false;
        }

        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(_) => matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"),
            Err(e) => {
                warn!(error = %e, "Failed to read confirmation");
                false
            }
        }
    }

    fn notify(&self, message: &str) {
        eprintln!("{}", message);
    }
}
