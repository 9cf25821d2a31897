//! Recognized source extensions and the path rewrite they drive.

use std::borrow::Cow;

/// Ordered list of recognized source extensions plus the single target
/// extension they all map to.
///
/// Matching is a plain substring search that includes the leading dot, so
/// `".png"` matches `"./a.png"` as well as `"./a.png?v=2"` and `"./x.png/y"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionSet {
    recognized: Vec<String>,
    target: String,
}

impl Default for ExtensionSet {
    fn default() -> Self {
        Self::new([".png", ".jpg", ".jpeg"], ".webp")
    }
}

impl ExtensionSet {
    pub fn new<I, S>(recognized: I, target: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            recognized: recognized.into_iter().map(Into::into).collect(),
            target: target.into(),
        }
    }

    pub fn recognized(&self) -> &[String] {
        &self.recognized
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// Whether `text` contains any recognized extension.
    pub fn contains_any(&self, text: &str) -> bool {
        self.first_match(text).is_some()
    }

    /// First recognized extension, in configured order, that occurs in `text`.
    pub fn first_match(&self, text: &str) -> Option<&str> {
        self.recognized
            .iter()
            .map(String::as_str)
            .find(|ext| text.contains(ext))
    }

    /// Replace the first occurrence of the first matching extension with the
    /// target extension.
    ///
    /// Unmatched input comes back borrowed and byte-for-byte identical; callers
    /// treat "unchanged" as "do not rewrite".
    ///
    /// ```
    /// use webp_swap::ExtensionSet;
    ///
    /// let set = ExtensionSet::default();
    /// assert_eq!(set.rewrite_path("./a.png"), "./a.webp");
    /// assert_eq!(set.rewrite_path("./a.js"), "./a.js");
    /// ```
    pub fn rewrite_path<'p>(&self, path: &'p str) -> Cow<'p, str> {
        match self.first_match(path) {
            Some(ext) => Cow::Owned(path.replacen(ext, &self.target, 1)),
            None => Cow::Borrowed(path),
        }
    }
}
