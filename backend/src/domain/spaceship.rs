//! Spaceship records and their validated building blocks.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::armament::ArmamentLoadout;

/// Storage-assigned spaceship identifier. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpaceshipId(i64);

impl SpaceshipId {
    /// Wrap a raw identifier, rejecting zero and negative values.
    ///
    /// # Examples
    /// ```
    /// use fleet_backend::domain::SpaceshipId;
    ///
    /// assert!(SpaceshipId::new(1).is_some());
    /// assert!(SpaceshipId::new(0).is_none());
    /// ```
    pub fn new(raw: i64) -> Option<Self> {
        (raw > 0).then_some(Self(raw))
    }

    /// Raw integer value.
    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for SpaceshipId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Longest text, in characters, that the fleet store accepts for names,
/// classes, image references, and armament titles.
pub const MAX_TEXT_CHARS: usize = 256;

pub(crate) fn exceeds_text_limit(value: &str) -> bool {
    value.chars().count() > MAX_TEXT_CHARS
}

/// Spaceship name: required, unique across the fleet, stored trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SpaceshipName(String);

impl SpaceshipName {
    /// Validate and normalise a raw name.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, SpaceshipValidationError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(SpaceshipValidationError::NameRequired);
        }
        if exceeds_text_limit(trimmed) {
            return Err(SpaceshipValidationError::FieldTooLong { field: "name" });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the name.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for SpaceshipName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for SpaceshipName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validation failures for spaceship writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SpaceshipValidationError {
    /// The name was missing or blank.
    #[error("spaceship name must not be empty")]
    NameRequired,
    /// A text field is longer than [`MAX_TEXT_CHARS`].
    #[error("spaceship {field} must be at most 256 characters")]
    FieldTooLong {
        /// Wire name of the offending field.
        field: &'static str,
    },
    /// An armament entry had a blank title.
    #[error("armament title at position {index} must not be empty")]
    ArmamentTitleRequired {
        /// Zero-based position in the submitted list.
        index: usize,
    },
    /// An armament title is longer than [`MAX_TEXT_CHARS`].
    #[error("armament title at position {index} must be at most 256 characters")]
    ArmamentTitleTooLong {
        /// Zero-based position in the submitted list.
        index: usize,
    },
}

/// Operational state of a spaceship.
///
/// Parsing from free text is lenient: see [`SpaceshipStatus::from_label`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SpaceshipStatus {
    /// Unknown or unrecognised state.
    #[default]
    Undefined,
    /// Fit for service.
    Operational,
    /// Needs repair.
    Damaged,
}

impl SpaceshipStatus {
    /// Map a free-text label onto a status.
    ///
    /// Matching is case-insensitive after trimming. Anything other than
    /// `operational` or `damaged` becomes [`SpaceshipStatus::Undefined`];
    /// this never fails.
    ///
    /// # Examples
    /// ```
    /// use fleet_backend::domain::SpaceshipStatus;
    ///
    /// assert_eq!(SpaceshipStatus::from_label("DAMAGED"), SpaceshipStatus::Damaged);
    /// assert_eq!(SpaceshipStatus::from_label("destroyed"), SpaceshipStatus::Undefined);
    /// ```
    pub fn from_label(label: &str) -> Self {
        let label = label.trim();
        if label.eq_ignore_ascii_case("operational") {
            Self::Operational
        } else if label.eq_ignore_ascii_case("damaged") {
            Self::Damaged
        } else {
            Self::Undefined
        }
    }

    /// Display label used on the wire.
    pub fn label(self) -> &'static str {
        match self {
            Self::Undefined => "Undefined",
            Self::Operational => "Operational",
            Self::Damaged => "Damaged",
        }
    }

    /// Compact storage code.
    pub fn code(self) -> i16 {
        match self {
            Self::Undefined => 0,
            Self::Operational => 1,
            Self::Damaged => 2,
        }
    }

    /// Decode a storage code; unknown codes yield `None`.
    pub fn from_code(code: i16) -> Option<Self> {
        match code {
            0 => Some(Self::Undefined),
            1 => Some(Self::Operational),
            2 => Some(Self::Damaged),
            _ => None,
        }
    }
}

impl fmt::Display for SpaceshipStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Validated spaceship content awaiting persistence.
///
/// Used for both creation and full replacement; the identity travels
/// separately.
#[derive(Debug, Clone, PartialEq)]
pub struct SpaceshipDraft {
    pub name: SpaceshipName,
    pub class: String,
    pub crew: u32,
    pub image: String,
    pub value: f64,
    pub status: SpaceshipStatus,
    pub armament: ArmamentLoadout,
}

/// A persisted spaceship with its full armament loadout.
#[derive(Debug, Clone, PartialEq)]
pub struct Spaceship {
    pub id: SpaceshipId,
    pub name: SpaceshipName,
    pub class: String,
    pub crew: u32,
    pub image: String,
    pub value: f64,
    pub status: SpaceshipStatus,
    pub armament: ArmamentLoadout,
}

impl Spaceship {
    /// Attach a storage identity to a draft.
    pub fn from_draft(id: SpaceshipId, draft: SpaceshipDraft) -> Self {
        let SpaceshipDraft {
            name,
            class,
            crew,
            image,
            value,
            status,
            armament,
        } = draft;
        Self {
            id,
            name,
            class,
            crew,
            image,
            value,
            status,
            armament,
        }
    }

    /// Project the list-view summary.
    pub fn summary(&self) -> SpaceshipSummary {
        SpaceshipSummary {
            id: self.id,
            name: self.name.clone(),
            status: self.status,
        }
    }
}

/// List-view projection: identity, name, and status only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpaceshipSummary {
    pub id: SpaceshipId,
    pub name: SpaceshipName,
    pub status: SpaceshipStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("operational", SpaceshipStatus::Operational)]
    #[case("Operational", SpaceshipStatus::Operational)]
    #[case("  damaged ", SpaceshipStatus::Damaged)]
    #[case("DAMAGED", SpaceshipStatus::Damaged)]
    #[case("destroyed", SpaceshipStatus::Undefined)]
    #[case("", SpaceshipStatus::Undefined)]
    #[case("operational!", SpaceshipStatus::Undefined)]
    fn status_labels_parse_case_insensitively(
        #[case] label: &str,
        #[case] expected: SpaceshipStatus,
    ) {
        assert_eq!(SpaceshipStatus::from_label(label), expected);
    }

    #[rstest]
    #[case(SpaceshipStatus::Undefined)]
    #[case(SpaceshipStatus::Operational)]
    #[case(SpaceshipStatus::Damaged)]
    fn storage_codes_are_stable(#[case] status: SpaceshipStatus) {
        assert_eq!(SpaceshipStatus::from_code(status.code()), Some(status));
    }

    #[rstest]
    fn unknown_storage_code_is_rejected() {
        assert_eq!(SpaceshipStatus::from_code(9), None);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\t\n")]
    fn blank_names_are_rejected(#[case] raw: &str) {
        assert_eq!(
            SpaceshipName::new(raw),
            Err(SpaceshipValidationError::NameRequired)
        );
    }

    #[rstest]
    fn names_are_trimmed() {
        let name = SpaceshipName::new("  Executor  ").expect("valid name");
        assert_eq!(name.as_str(), "Executor");
    }

    #[rstest]
    fn names_longer_than_the_column_are_rejected() {
        let at_limit = "X".repeat(MAX_TEXT_CHARS);
        let over_limit = format!("{at_limit}X");

        assert!(SpaceshipName::new(&at_limit).is_ok());
        assert_eq!(
            SpaceshipName::new(over_limit),
            Err(SpaceshipValidationError::FieldTooLong { field: "name" })
        );
    }

    #[rstest]
    fn text_limit_counts_characters_not_bytes() {
        assert!(!exceeds_text_limit(&"é".repeat(MAX_TEXT_CHARS)));
        assert!(exceeds_text_limit(&"é".repeat(MAX_TEXT_CHARS + 1)));
    }

    #[rstest]
    #[case(-1)]
    #[case(0)]
    fn non_positive_ids_are_rejected(#[case] raw: i64) {
        assert!(SpaceshipId::new(raw).is_none());
    }

    #[rstest]
    fn summary_projects_identity_name_and_status() {
        let id = SpaceshipId::new(4).expect("positive id");
        let ship = Spaceship::from_draft(
            id,
            SpaceshipDraft {
                name: SpaceshipName::new("Devastator").expect("valid name"),
                class: "Imperial I-class Star Destroyer".to_owned(),
                crew: 35_000,
                image: String::new(),
                value: 1_999.5,
                status: SpaceshipStatus::Operational,
                armament: ArmamentLoadout::empty(),
            },
        );

        let summary = ship.summary();
        assert_eq!(summary.id, id);
        assert_eq!(summary.name.as_str(), "Devastator");
        assert_eq!(summary.status, SpaceshipStatus::Operational);
    }
}
