//! The blog entry model

use serde::{Deserialize, Serialize};

use crate::helpers::slugify;

/// One published blog entry
///
/// `date` is the formatted display string the pages show; the store keeps
/// entries newest first. The body is raw text, preserved verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Formatted publication date
    pub date: String,

    /// Entry title
    pub title: String,

    /// URL-safe identifier derived from the title
    pub slug: String,

    /// Raw entry body, whitespace preserved
    pub content: String,
}

impl Entry {
    /// Create a new entry, deriving the slug from the title
    pub fn new(title: String, content: String, date: String) -> Self {
        let slug = slugify(&title);
        Self {
            date,
            title,
            slug,
            content,
        }
    }

    /// File name of the entry's rendered page
    pub fn file_name(&self) -> String {
        format!("{}.html", self.slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_derives_slug() {
        let entry = Entry::new(
            "Hello, World!".to_string(),
            "body".to_string(),
            "January 15, 2024".to_string(),
        );
        assert_eq!(entry.slug, "hello-world");
        assert_eq!(entry.file_name(), "hello-world.html");
    }

    #[test]
    fn test_same_title_same_slug() {
        let a = Entry::new("Rain".into(), "first".into(), "May 01, 2024".into());
        let b = Entry::new("Rain".into(), "second".into(), "May 02, 2024".into());
        // Duplicate slugs are not detected; later pages overwrite earlier ones.
        assert_eq!(a.slug, b.slug);
    }
}
