//! Property-based tests for filtering and flattening.

use proptest::prelude::*;
use section_config::core::{filter_sections, flatten_sections};
use section_config::diagnostics::NullSink;
use section_config::store::SectionRecord;
use std::collections::BTreeMap;

fn tags() -> impl Strategy<Value = BTreeMap<String, String>> {
    prop::collection::btree_map("[a-c]", "[0-2]", 0..4)
}

fn section_strategy() -> impl Strategy<Value = SectionRecord> {
    (
        "[0-9]{1,3}",
        "[A-C][a-z]{0,3}",
        prop::option::of(prop_oneof![
            tags().prop_map(|t| serde_json::to_string(&t).unwrap()),
            Just(String::new()),
            Just("{not json".to_string()),
        ]),
        prop::collection::vec(("[A-Z][a-z]{0,4}", "[a-z0-9]{0,6}"), 0..4),
    )
        .prop_map(|(id, name, discriminator, settings)| {
            let mut section = SectionRecord::new(id, name);
            section.discriminator = discriminator;
            for (i, (key, value)) in settings.into_iter().enumerate() {
                section = section.with_setting(i.to_string(), key, value);
            }
            section
        })
}

proptest! {
    #[test]
    fn prop_absent_expression_is_identity(sections in prop::collection::vec(section_strategy(), 0..8)) {
        prop_assert_eq!(filter_sections(sections.clone(), None, &NullSink), sections.clone());
        prop_assert_eq!(filter_sections(sections.clone(), Some(""), &NullSink), sections);
    }

    #[test]
    fn prop_filter_keeps_an_ordered_subsequence(
        sections in prop::collection::vec(section_strategy(), 0..8),
        wanted in tags(),
    ) {
        let expression = serde_json::to_string(&wanted).unwrap();
        let kept = filter_sections(sections.clone(), Some(&expression), &NullSink);

        let mut remaining = sections.iter();
        for section in &kept {
            prop_assert!(remaining.any(|candidate| candidate == section));
        }
        if wanted.is_empty() {
            prop_assert!(kept.is_empty());
        }
    }

    #[test]
    fn prop_retained_sections_carry_every_pair(
        sections in prop::collection::vec(section_strategy(), 0..8),
        wanted in tags(),
    ) {
        let expression = serde_json::to_string(&wanted).unwrap();
        for section in filter_sections(sections, Some(&expression), &NullSink) {
            let text = section.discriminator.unwrap();
            let own: BTreeMap<String, String> = serde_json::from_str(&text).unwrap();
            for (key, value) in &wanted {
                prop_assert_eq!(own.get(key), Some(value));
            }
        }
    }

    #[test]
    fn prop_scalar_settings_keep_first_value(sections in prop::collection::vec(section_strategy(), 0..8)) {
        let map = flatten_sections(&sections, &NullSink).unwrap();

        let mut expected: BTreeMap<&str, &str> = BTreeMap::new();
        for setting in sections.iter().flat_map(|s| &s.settings) {
            expected.entry(setting.key.as_str()).or_insert(setting.json.as_str());
        }

        prop_assert_eq!(map.len(), expected.len());
        for (key, value) in expected {
            prop_assert_eq!(map.get(key), Some(Some(value)));
        }
    }
}
