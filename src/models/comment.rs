//! Comment model

use serde::{Deserialize, Serialize};

/// Comment as returned by the comment endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Username of the author
    pub author: String,
    pub author_pic_url: String,
    pub author_profile_url: String,
    /// Free text; always rendered literally
    pub content: String,
    pub naturaltime: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Successful response of the comment endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentResponse {
    pub comment: Comment,
    #[serde(default)]
    pub message: Option<String>,
}

/// Comment form field values
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentForm {
    pub content: String,
}

impl CommentForm {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.content.trim().is_empty()
    }

    pub fn clear(&mut self) {
        self.content.clear();
    }

    /// Form fields as (name, value) pairs, in submission order
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        vec![("content", self.content.clone())]
    }
}
