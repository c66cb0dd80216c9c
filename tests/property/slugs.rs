//! Slug properties over arbitrary skill ids

use agentc::slug::slugify;
use proptest::prelude::*;

proptest! {
    #[test]
    fn slug_uses_only_safe_characters(id in any::<String>()) {
        let slug = slugify(&id);
        prop_assert!(!slug.is_empty());
        prop_assert!(slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
    }

    #[test]
    fn slug_has_no_stray_dashes(id in any::<String>()) {
        let slug = slugify(&id);
        prop_assert!(!slug.starts_with('-'));
        prop_assert!(!slug.ends_with('-'));
        prop_assert!(!slug.contains("--"));
    }

    #[test]
    fn slugify_is_idempotent(id in any::<String>()) {
        let once = slugify(&id);
        prop_assert_eq!(slugify(&once), once);
    }

    #[test]
    fn lowercase_alphanumeric_ids_are_unchanged(id in "[a-z0-9]{1,24}(-[a-z0-9]{1,8}){0,3}") {
        prop_assert_eq!(slugify(&id), id);
    }

    #[test]
    fn path_separators_become_single_dashes(a in "[a-z]{1,8}", b in "[a-z]{1,8}", sep in "[/ _.@()]{1,4}") {
        prop_assert_eq!(slugify(&format!("{a}{sep}{b}")), format!("{a}-{b}"));
    }
}
