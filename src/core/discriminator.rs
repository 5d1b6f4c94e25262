//! Discriminator parsing and section filtering.

use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::store::SectionRecord;
use std::collections::HashMap;

/// A set of string tags parsed from a JSON object, e.g. `{"tenant":"acme"}`.
///
/// Used both for the caller's filter expression and for each section's own
/// discriminator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscriminatorExpression {
    pairs: HashMap<String, String>,
}

impl DiscriminatorExpression {
    /// Parse a JSON object whose values are all strings.
    ///
    /// # Errors
    ///
    /// Fails if `text` is not a JSON object, or if any value is not a string.
    /// No coercion is attempted: `{"id":1}` is rejected.
    pub fn parse(text: &str) -> std::result::Result<Self, serde_json::Error> {
        let pairs = serde_json::from_str::<HashMap<String, String>>(text)?;
        Ok(Self { pairs })
    }

    /// Number of tag pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether there are no tag pairs.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Look up a tag.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs.get(key).map(String::as_str)
    }

    /// Whether every pair of `self` appears, with an equal value, in `tags`.
    ///
    /// `tags` may carry extra pairs.
    pub fn is_satisfied_by(&self, tags: &DiscriminatorExpression) -> bool {
        self.pairs
            .iter()
            .all(|(key, value)| tags.get(key) == Some(value.as_str()))
    }
}

/// Keep the sections whose discriminator carries every pair of `expression`.
///
/// - `None` or an empty expression disables filtering: `sections` is returned
///   as is.
/// - An expression that does not parse into a non-empty string map matches
///   nothing, and [`Diagnostic::MalformedExpression`] is reported.
/// - Sections without a discriminator never match. Sections whose
///   discriminator does not parse are excluded and reported with
///   [`Diagnostic::MalformedSectionDiscriminator`].
///
/// Retained sections keep their relative order.
///
/// # Examples
///
/// ```rust
/// use section_config::core::filter_sections;
/// use section_config::diagnostics::NullSink;
/// use section_config::store::SectionRecord;
///
/// let sections = vec![
///     SectionRecord::new("1", "Db").with_discriminator(r#"{"tenant":"acme","region":"eu"}"#),
///     SectionRecord::new("2", "Db").with_discriminator(r#"{"tenant":"globex"}"#),
/// ];
///
/// let kept = filter_sections(sections, Some(r#"{"tenant":"acme"}"#), &NullSink);
/// assert_eq!(kept.len(), 1);
/// assert_eq!(kept[0].id, "1");
/// ```
pub fn filter_sections(
    sections: Vec<SectionRecord>,
    expression: Option<&str>,
    sink: &dyn DiagnosticSink,
) -> Vec<SectionRecord> {
    let text = match expression {
        None | Some("") => return sections,
        Some(text) => text,
    };

    let wanted = match DiscriminatorExpression::parse(text) {
        Ok(wanted) if !wanted.is_empty() => wanted,
        Ok(_) => {
            sink.emit(&Diagnostic::MalformedExpression {
                expression: text.to_string(),
                reason: "no discriminator pairs".to_string(),
            });
            return Vec::new();
        }
        Err(e) => {
            sink.emit(&Diagnostic::MalformedExpression {
                expression: text.to_string(),
                reason: e.to_string(),
            });
            return Vec::new();
        }
    };

    sections
        .into_iter()
        .filter(|section| section_matches(section, &wanted, sink))
        .collect()
}

fn section_matches(
    section: &SectionRecord,
    wanted: &DiscriminatorExpression,
    sink: &dyn DiagnosticSink,
) -> bool {
    let text = match section.discriminator.as_deref() {
        None | Some("") => return false,
        Some(text) => text,
    };

    match DiscriminatorExpression::parse(text) {
        Ok(tags) => wanted.is_satisfied_by(&tags),
        Err(e) => {
            sink.emit(&Diagnostic::MalformedSectionDiscriminator {
                section_id: section.id.clone(),
                section_name: section.section_name.clone(),
                reason: e.to_string(),
            });
            false
        }
    }
}
