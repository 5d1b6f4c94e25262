//! Diagnostic event types.

use std::fmt;

/// A notable, non-fatal event observed during a load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// The caller's discriminator expression is not a non-empty string map.
    ///
    /// Every section is rejected when this is reported.
    MalformedExpression {
        /// The expression as supplied
        expression: String,
        /// Why it was rejected
        reason: String,
    },

    /// A section's own discriminator could not be parsed; the section is excluded.
    MalformedSectionDiscriminator {
        /// Store identity of the section
        section_id: String,
        /// Name of the section
        section_name: String,
        /// Parser error
        reason: String,
    },

    /// A non-object array element was dropped during flattening.
    SkippedArrayElement {
        /// Key path of the array
        path: String,
        /// Position of the element within the array
        index: usize,
    },

    /// A key was already present and the later value was discarded.
    DuplicateKey {
        /// The colliding key
        key: String,
    },

    /// A section passed filtering and is being flattened.
    SectionLoaded {
        /// Store identity of the section
        section_id: String,
        /// Name of the section
        section_name: String,
    },

    /// Releasing a loader-owned store failed.
    StoreCloseFailed {
        /// Name of the store
        store: String,
        /// Error reported by the store
        reason: String,
    },
}

impl Diagnostic {
    /// Whether the event points at bad data or a failed release rather than
    /// routine progress.
    pub fn is_warning(&self) -> bool {
        matches!(
            self,
            Self::MalformedExpression { .. }
                | Self::MalformedSectionDiscriminator { .. }
                | Self::StoreCloseFailed { .. }
        )
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedExpression { expression, reason } => write!(
                f,
                "Discriminator '{}' is not a JSON object of strings ({}); no sections match",
                expression, reason
            ),
            Self::MalformedSectionDiscriminator {
                section_id,
                section_name,
                reason,
            } => write!(
                f,
                "Discriminator of section '{}' (id '{}') is not a JSON object of strings ({}); section excluded",
                section_name, section_id, reason
            ),
            Self::SkippedArrayElement { path, index } => {
                write!(f, "Skipped non-object element {} of array '{}'", index, path)
            }
            Self::DuplicateKey { key } => {
                write!(f, "Key '{}' already set; later value ignored", key)
            }
            Self::SectionLoaded {
                section_id,
                section_name,
            } => write!(f, "Adding section '{}' (id '{}')", section_name, section_id),
            Self::StoreCloseFailed { store, reason } => {
                write!(f, "Failed to close store '{}': {}", store, reason)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warning_classification() {
        let malformed = Diagnostic::MalformedExpression {
            expression: "nope".to_string(),
            reason: "expected value".to_string(),
        };
        assert!(malformed.is_warning());

        let duplicate = Diagnostic::DuplicateKey {
            key: "Db:Host".to_string(),
        };
        assert!(!duplicate.is_warning());
    }

    #[test]
    fn test_display_skipped_element() {
        let event = Diagnostic::SkippedArrayElement {
            path: "Tags:Values".to_string(),
            index: 2,
        };
        assert_eq!(
            event.to_string(),
            "Skipped non-object element 2 of array 'Tags:Values'"
        );
    }
}
