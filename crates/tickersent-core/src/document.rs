use serde::Serialize;

/// A single fetched text document: a short post, or a titled article.
///
/// Immutable once fetched. The relevance classifier treats the title portion
/// as a stronger signal than the body; short posts carry no title.
#[derive(Debug, Clone, Serialize)]
pub struct Document {
    /// Title portion, when the source provides one.
    pub title: Option<String>,
    /// Body text.
    pub body: String,
}

impl Document {
    /// Build a title-less document from a short post.
    #[must_use]
    pub fn post(body: impl Into<String>) -> Self {
        Self {
            title: None,
            body: body.into(),
        }
    }

    /// Build a titled document.
    #[must_use]
    pub fn titled(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            body: body.into(),
        }
    }

    /// Title and body concatenated, the form consumers score.
    #[must_use]
    pub fn combined(&self) -> String {
        match self.title.as_deref() {
            Some(title) if !title.is_empty() => format!("{title} {}", self.body),
            _ => self.body.clone(),
        }
    }

    /// Combined text capped at `max_chars` characters, for model submission.
    ///
    /// Counts characters, not bytes, so multi-byte text never splits mid
    /// character.
    #[must_use]
    pub fn truncated(&self, max_chars: usize) -> String {
        let combined = self.combined();
        if combined.chars().count() <= max_chars {
            combined
        } else {
            combined.chars().take(max_chars).collect()
        }
    }
}
