// Blog draft - the authoring payload handed to the composer

use crate::error::{Error, Result};
use std::fmt;

/// What the composer should do once every field is filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishIntent {
    PublishNow,
    SaveAsDraft,
    Cancel,
}

/// Status chip shown next to each entry on the admin dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlogStatus {
    Published,
    Draft,
}

impl BlogStatus {
    pub fn label(&self) -> &'static str {
        match self {
            BlogStatus::Published => "published",
            BlogStatus::Draft => "draft",
        }
    }
}

impl fmt::Display for BlogStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Title, excerpt, content, category and one or more tags.
///
/// Drafts only exist on the way into the application; whether one was
/// stored is checked by reading the dashboard back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogDraft {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub category: String,
    pub tags: Vec<String>,
}

impl BlogDraft {
    pub fn builder() -> BlogDraftBuilder {
        BlogDraftBuilder::default()
    }

    pub fn has_title(&self) -> bool {
        !self.title.trim().is_empty()
    }
}

#[derive(Debug, Clone, Default)]
pub struct BlogDraftBuilder {
    title: String,
    excerpt: String,
    content: String,
    category: Option<String>,
    tags: Vec<String>,
}

impl BlogDraftBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = excerpt.into();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Builds the draft. A category and at least one tag are required; the
    /// title may be empty to exercise the composer's disabled publish state.
    pub fn build(self) -> Result<BlogDraft> {
        let category = self
            .category
            .filter(|c| !c.trim().is_empty())
            .ok_or_else(|| Error::Precondition("blog draft needs a category".to_string()))?;
        if self.tags.is_empty() {
            return Err(Error::Precondition(
                "blog draft needs at least one tag".to_string(),
            ));
        }
        Ok(BlogDraft {
            title: self.title,
            excerpt: self.excerpt,
            content: self.content,
            category,
            tags: self.tags,
        })
    }
}
