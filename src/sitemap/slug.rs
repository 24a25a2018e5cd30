//! Slug derivation
//!
//! A slug is a content file name with everything from the first `.` removed.
//! `my.post.md` becomes `my`, `README` stays `README`, and `.hidden` becomes
//! the empty slug.

use std::fmt;

/// URL identifier for a blog post, derived from its content file name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    /// Derive a slug from a content file name
    pub fn from_file_name(file_name: &str) -> Self {
        let end = file_name.find('.').unwrap_or(file_name.len());
        Self(file_name[..end].to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
