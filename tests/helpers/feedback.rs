//! Feedback sink that records what the user would have seen

use std::sync::{Arc, Mutex};

use playfield_client::UserFeedback;

/// Records alerts, notices and confirmation prompts
#[derive(Debug, Default)]
pub struct RecordingFeedback {
    confirm_answer: bool,
    alerts: Mutex<Vec<String>>,
    notices: Mutex<Vec<String>>,
    prompts: Mutex<Vec<String>>,
}

impl RecordingFeedback {
    /// Feedback that answers every confirmation with `confirm_answer`
    pub fn new(confirm_answer: bool) -> Arc<Self> {
        Arc::new(Self {
            confirm_answer,
            ..Default::default()
        })
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.lock().unwrap().clone()
    }

    pub fn notices(&self) -> Vec<String> {
        self.notices.lock().unwrap().clone()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

impl UserFeedback for RecordingFeedback {
    fn alert(&self, message: &str) {
        self.alerts.lock().unwrap().push(message.to_string());
    }

    fn confirm(&self, prompt: &str) -> bool {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.confirm_answer
    }

    fn notify(&self, message: &str) {
        self.notices.lock().unwrap().push(message.to_string());
    }
}
