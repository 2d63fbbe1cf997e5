//! Substring filters applied when listing users.

use utilisateur_core::NonEmptyString;

use crate::UserRecord;

/// Escape character used by generated `LIKE` patterns.
pub const LIKE_ESCAPE: char = '\\';

/// Builds a `LIKE` pattern matching any value that contains `value`.
///
/// Wildcards inside `value` are escaped with [`LIKE_ESCAPE`] so they match literally.
#[must_use]
pub fn like_contains_pattern(value: &str) -> String {
    let mut pattern = String::with_capacity(value.len() + 2);
    pattern.push('%');
    for character in value.chars() {
        if matches!(character, '%' | '_' | LIKE_ESCAPE) {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(character);
    }
    pattern.push('%');
    pattern
}

/// Optional first/last name filters, combined with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserFilter {
    first_name: Option<NonEmptyString>,
    last_name: Option<NonEmptyString>,
}

impl UserFilter {
    /// Creates a filter. Absent and empty values disable the matching criterion.
    #[must_use]
    pub fn new(first_name: Option<String>, last_name: Option<String>) -> Self {
        Self {
            first_name: NonEmptyString::from_optional(first_name),
            last_name: NonEmptyString::from_optional(last_name),
        }
    }

    /// Returns the first-name substring, if filtering on it.
    #[must_use]
    pub fn first_name(&self) -> Option<&str> {
        self.first_name.as_ref().map(NonEmptyString::as_str)
    }

    /// Returns the last-name substring, if filtering on it.
    #[must_use]
    pub fn last_name(&self) -> Option<&str> {
        self.last_name.as_ref().map(NonEmptyString::as_str)
    }

    /// Returns the `LIKE` pattern for the first name, if filtering on it.
    #[must_use]
    pub fn first_name_pattern(&self) -> Option<String> {
        self.first_name().map(like_contains_pattern)
    }

    /// Returns the `LIKE` pattern for the last name, if filtering on it.
    #[must_use]
    pub fn last_name_pattern(&self) -> Option<String> {
        self.last_name().map(like_contains_pattern)
    }

    /// Returns whether no criterion is set.
    #[must_use]
    pub fn is_unfiltered(&self) -> bool {
        self.first_name.is_none() && self.last_name.is_none()
    }

    /// Case-sensitive substring match, the in-process equivalent of the `LIKE` patterns.
    #[must_use]
    pub fn matches(&self, record: &UserRecord) -> bool {
        self.first_name()
            .is_none_or(|needle| record.first_name().contains(needle))
            && self
                .last_name()
                .is_none_or(|needle| record.last_name().contains(needle))
    }
}
