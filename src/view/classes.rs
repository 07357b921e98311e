//! Class lists: the styling hooks attached to an element.

use smallvec::SmallVec;

/// Ordered, de-duplicated set of class names.
///
/// Mirrors the usual "classnames" idiom: always-on names, names gated by
/// a flag, and optional names that are skipped when absent or empty.
///
/// ```
/// use crew_tracker::view::ClassList;
///
/// let classes = ClassList::new("card")
///     .with("red")
///     .with_if("was-played", false)
///     .with_opt(Some(""));
///
/// assert_eq!(classes.to_string(), "card red");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassList {
    names: SmallVec<[String; 4]>,
}

impl ClassList {
    /// Start a list with one class.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self::default().with(name)
    }

    /// Add a class. Empty names and repeats are ignored.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>) -> Self {
        self.push(name.into());
        self
    }

    /// Add a class when `enabled` is true.
    #[must_use]
    pub fn with_if(self, name: impl Into<String>, enabled: bool) -> Self {
        if enabled {
            self.with(name)
        } else {
            self
        }
    }

    /// Add a class if one is given.
    #[must_use]
    pub fn with_opt<S: Into<String>>(self, name: Option<S>) -> Self {
        match name {
            Some(name) => self.with(name),
            None => self,
        }
    }

    fn push(&mut self, name: String) {
        if !name.is_empty() && !self.contains(&name) {
            self.names.push(name);
        }
    }

    /// Check if a class is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Check if the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Class names in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl std::fmt::Display for ClassList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, name) in self.names.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(name)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conditional_classes() {
        let classes = ClassList::new("nice-button")
            .with_if("primary-button", true)
            .with_if("secondary-button", false);
        assert_eq!(classes.to_string(), "nice-button primary-button");
        assert!(classes.contains("primary-button"));
        assert!(!classes.contains("secondary-button"));
    }

    #[test]
    fn test_optional_and_empty() {
        let classes = ClassList::new("circle-button")
            .with_opt(None::<&str>)
            .with_opt(Some(""))
            .with_opt(Some("extra"));
        assert_eq!(classes.iter().collect::<Vec<_>>(), vec!["circle-button", "extra"]);
    }

    #[test]
    fn test_duplicates_ignored() {
        let classes = ClassList::new("card").with("card").with("red");
        assert_eq!(classes.to_string(), "card red");
    }

    #[test]
    fn test_empty() {
        let classes = ClassList::default();
        assert!(classes.is_empty());
        assert_eq!(classes.to_string(), "");
    }
}
