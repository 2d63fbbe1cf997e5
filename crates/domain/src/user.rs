//! User record entity and its mutation rules.

use utilisateur_core::{AppError, AppResult, NonEmptyString};
use uuid::Uuid;

/// Message returned when an identifier does not resolve to a user.
pub const USER_NOT_FOUND_MESSAGE: &str = "Utilisateur non trouvé";

/// Message returned when a user is created without both names.
pub const USER_NAMES_REQUIRED_MESSAGE: &str = "Le nom et le prénom sont obligatoires";

/// Message returned after a user has been deleted.
pub const USER_DELETED_MESSAGE: &str = "Utilisateur supprimé avec succès";

/// Unique identifier for a user record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(Uuid);

impl UserId {
    /// Creates a new random user identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a user identifier from an existing UUID value.
    #[must_use]
    pub fn from_uuid(value: Uuid) -> Self {
        Self(value)
    }

    /// Parses a transport identifier.
    ///
    /// A value that is not a UUID was never issued, so it resolves to
    /// `NotFound` rather than a validation error.
    pub fn parse(value: &str) -> AppResult<Self> {
        Uuid::parse_str(value)
            .map(Self)
            .map_err(|_| AppError::NotFound(USER_NOT_FOUND_MESSAGE.to_owned()))
    }

    /// Returns the underlying UUID value.
    #[must_use]
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// A persisted user: identifier, first name and last name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    id: UserId,
    first_name: String,
    last_name: String,
}

impl UserRecord {
    /// Builds a new record with a freshly generated identifier.
    ///
    /// Both names must be non-empty.
    pub fn create(first_name: impl Into<String>, last_name: impl Into<String>) -> AppResult<Self> {
        let first_name = NonEmptyString::new(first_name).map_err(|_| names_required())?;
        let last_name = NonEmptyString::new(last_name).map_err(|_| names_required())?;

        Ok(Self {
            id: UserId::new(),
            first_name: first_name.into(),
            last_name: last_name.into(),
        })
    }

    /// Rebuilds a record from stored values without re-validating them.
    #[must_use]
    pub fn from_parts(
        id: UserId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// Returns the record identifier.
    #[must_use]
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Returns the first name.
    #[must_use]
    pub fn first_name(&self) -> &str {
        self.first_name.as_str()
    }

    /// Returns the last name.
    #[must_use]
    pub fn last_name(&self) -> &str {
        self.last_name.as_str()
    }

    /// Merges a patch into the record. Absent patch fields keep the stored value.
    pub fn apply_patch(&mut self, patch: UserPatch) {
        if let Some(first_name) = patch.first_name {
            self.first_name = first_name.into();
        }

        if let Some(last_name) = patch.last_name {
            self.last_name = last_name.into();
        }
    }
}

fn names_required() -> AppError {
    AppError::Validation(USER_NAMES_REQUIRED_MESSAGE.to_owned())
}

/// Partial update of a user record.
///
/// Empty incoming values are dropped, so a patch can never blank a name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    first_name: Option<NonEmptyString>,
    last_name: Option<NonEmptyString>,
}

impl UserPatch {
    /// Creates a patch from optional transport values.
    #[must_use]
    pub fn new(first_name: Option<String>, last_name: Option<String>) -> Self {
        Self {
            first_name: NonEmptyString::from_optional(first_name),
            last_name: NonEmptyString::from_optional(last_name),
        }
    }

    /// Returns whether applying the patch would change nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none() && self.last_name.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_assigns_distinct_identifiers() {
        let first = UserRecord::create("Valentin", "Dejean");
        let second = UserRecord::create("Valentin", "Dejean");

        let (Ok(first), Ok(second)) = (first, second) else {
            panic!("valid names must create records");
        };
        assert_ne!(first.id(), second.id());
        assert!(!first.id().as_uuid().is_nil());
        assert_eq!(first.first_name(), "Valentin");
        assert_eq!(first.last_name(), "Dejean");
    }

    #[test]
    fn create_rejects_any_empty_name() {
        for (first_name, last_name) in [("", "Degendt"), ("Damien", ""), ("", "")] {
            let result = UserRecord::create(first_name, last_name);
            assert!(matches!(
                result,
                Err(AppError::Validation(ref message)) if message == USER_NAMES_REQUIRED_MESSAGE
            ));
        }
    }

    #[test]
    fn patch_only_overwrites_non_empty_fields() {
        let mut record = UserRecord::from_parts(UserId::new(), "Valentin", "Dejean");

        record.apply_patch(UserPatch::new(Some("Val".to_owned()), Some(String::new())));

        assert_eq!(record.first_name(), "Val");
        assert_eq!(record.last_name(), "Dejean");
    }

    #[test]
    fn blank_patch_is_a_no_op() {
        let original = UserRecord::from_parts(UserId::new(), "Guillaume", "Pesetti");
        let mut record = original.clone();
        let patch = UserPatch::new(None, Some(String::new()));

        assert!(patch.is_empty());
        record.apply_patch(patch);
        assert_eq!(record, original);
    }

    #[test]
    fn unparseable_identifier_is_not_found() {
        assert!(matches!(
            UserId::parse("not-a-uuid"),
            Err(AppError::NotFound(ref message)) if message == USER_NOT_FOUND_MESSAGE
        ));

        let id = UserId::new();
        assert_eq!(UserId::parse(&id.to_string()).ok(), Some(id));
    }
}
