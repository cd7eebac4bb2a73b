//! Comment section

use crate::models::{Comment, CommentForm};
use super::dom::Element;

pub const COMMENT_FORM_ID: &str = "comment-form";
pub const COMMENT_SUBMIT_ID: &str = "comment-submit-btn";

/// Comment list, counter and input form of an event detail view
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommentSection {
    /// Newest first
    pub comments: Vec<Comment>,
    pub count: u32,
    pub form: CommentForm,
}

impl CommentSection {
    pub fn new(comments: Vec<Comment>) -> Self {
        let count = u32::try_from(comments.len()).unwrap_or(u32::MAX);
        Self {
            comments,
            count,
            form: CommentForm::default(),
        }
    }

    /// Insert a freshly posted comment at the head and reset the form
    pub fn add_comment(&mut self, comment: Comment) {
        self.comments.insert(0, comment);
        self.count = self.count.saturating_add(1);
        self.form.clear();
    }

    pub fn render_comment(comment: &Comment) -> Element {
        Element::new("div")
            .class("comment")
            .child(
                Element::new("a")
                    .attr("href", comment.author_profile_url.clone())
                    .child(
                        Element::new("img")
                            .class("avatar")
                            .attr("src", comment.author_pic_url.clone())
                            .attr("alt", comment.author.clone()),
                    ),
            )
            .child(
                Element::new("div")
                    .class("comment-body")
                    .child(
                        Element::new("a")
                            .class("comment-author")
                            .attr("href", comment.author_profile_url.clone())
                            .text(comment.author.clone()),
                    )
                    .child(
                        Element::new("small")
                            .class("comment-time")
                            .attr("title", comment.created_at.clone().unwrap_or_default())
                            .text(comment.naturaltime.clone()),
                    )
                    .child(Element::new("p").class("comment-content").text(comment.content.clone())),
            )
    }

    pub fn render(&self, action_url: &str) -> Element {
        let form = Element::new("form")
            .id(COMMENT_FORM_ID)
            .attr("method", "post")
            .attr("action", action_url)
            .child(
                Element::new("textarea")
                    .attr("name", "content")
                    .attr("rows", "2")
                    .attr("placeholder", "Add a comment...")
                    .text(self.form.content.clone()),
            )
            .child(
                Element::new("button")
                    .id(COMMENT_SUBMIT_ID)
                    .attr("type", "submit")
                    .class("btn")
                    .class("btn-primary")
                    .text("Post"),
            );

        let list = Element::new("div")
            .id("comments-list")
            .children(self.comments.iter().map(Self::render_comment));

        Element::new("section")
            .id("comments")
            .child(
                Element::new("h3")
                    .text("Comments (")
                    .child(Element::new("span").id("comment-count").text(self.count.to_string()))
                    .text(")"),
            )
            .child(form)
            .child(list)
    }
}
